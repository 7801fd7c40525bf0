use once_cell::sync::Lazy;
use std::collections::HashMap;

/// All internal balances are tracked in EUR; other currencies exist only for display.
pub const BASE_CURRENCY: &str = "EUR";

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    /// Exchange rate relative to EUR.
    pub rate: f64,
    pub symbol: &'static str,
    pub placement: SymbolPlacement,
    /// Fractional digits shown when formatting. JPY is the one zero-decimal currency.
    pub decimals: u32,
}

static CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "EUR", rate: 1.0, symbol: "€", placement: SymbolPlacement::Prefix, decimals: 2 },
    CurrencyInfo { code: "USD", rate: 1.08, symbol: "$", placement: SymbolPlacement::Prefix, decimals: 2 },
    CurrencyInfo { code: "GBP", rate: 0.86, symbol: "£", placement: SymbolPlacement::Prefix, decimals: 2 },
    CurrencyInfo { code: "CNY", rate: 7.8, symbol: "¥", placement: SymbolPlacement::Prefix, decimals: 2 },
    CurrencyInfo { code: "JPY", rate: 160.5, symbol: "¥", placement: SymbolPlacement::Prefix, decimals: 0 },
    CurrencyInfo { code: "INR", rate: 89.7, symbol: "₹", placement: SymbolPlacement::Prefix, decimals: 2 },
    CurrencyInfo { code: "CAD", rate: 1.48, symbol: "C$", placement: SymbolPlacement::Prefix, decimals: 2 },
    CurrencyInfo { code: "AUD", rate: 1.65, symbol: "A$", placement: SymbolPlacement::Prefix, decimals: 2 },
    CurrencyInfo { code: "AED", rate: 3.97, symbol: "AED", placement: SymbolPlacement::Suffix, decimals: 2 },
];

static COUNTRY_TO_CURRENCY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    // Eurozone and the EU countries the site treats as EUR
    for country in [
        "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR",
        "HU", "IE", "IT", "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK",
        "SI", "ES", "SE",
    ] {
        map.insert(country, "EUR");
    }
    map.insert("US", "USD");
    map.insert("GB", "GBP");
    map.insert("CN", "CNY");
    map.insert("JP", "JPY");
    map.insert("IN", "INR");
    map.insert("CA", "CAD");
    map.insert("AU", "AUD");
    map.insert("AE", "AED");
    map.insert("RU", "USD");
    map
});

fn info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Fallback used whenever a currency code is not configured.
fn base_info() -> &'static CurrencyInfo {
    &CURRENCIES[0]
}

pub fn is_known(code: &str) -> bool {
    info(code).is_some()
}

pub fn all_codes() -> impl Iterator<Item = &'static str> {
    CURRENCIES.iter().map(|c| c.code)
}

/// Exchange rate relative to EUR. Unknown codes fall back to 1:1.
pub fn rate(code: &str) -> f64 {
    info(code).map(|c| c.rate).unwrap_or(1.0)
}

pub fn symbol(code: &str) -> &'static str {
    info(code).map(|c| c.symbol).unwrap_or(base_info().symbol)
}

/// Display currency for a visitor's country. Unknown countries get EUR.
pub fn currency_for_country(country: &str) -> &'static str {
    COUNTRY_TO_CURRENCY
        .get(country.to_uppercase().as_str())
        .copied()
        .unwrap_or(BASE_CURRENCY)
}

pub fn convert_to_user(amount_eur: f64, code: &str) -> f64 {
    amount_eur * rate(code)
}

pub fn convert_to_base(amount_user: f64, code: &str) -> f64 {
    amount_user / rate(code)
}

/// Format an amount already denominated in `code`.
///
/// Two fractional digits for every currency except JPY, which rounds to a whole
/// number and never shows a decimal point.
pub fn format_amount(amount: f64, code: &str, with_symbol: bool) -> String {
    let info = info(code).unwrap_or_else(base_info);
    let digits = if info.decimals == 0 {
        format!("{}", amount.round() as i64)
    } else {
        format!("{:.1$}", amount, info.decimals as usize)
    };
    if !with_symbol {
        return digits;
    }
    match info.placement {
        SymbolPlacement::Prefix => format!("{}{}", info.symbol, digits),
        SymbolPlacement::Suffix => format!("{} {}", digits, info.symbol),
    }
}

/// Convert an EUR amount into the user's currency and format it in one step.
pub fn format_eur_as(amount_eur: f64, code: &str, with_symbol: bool) -> String {
    format_amount(convert_to_user(amount_eur, code), code, with_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_rate() {
        for code in all_codes() {
            let start = 37.25;
            let back = convert_to_base(convert_to_user(start, code), code);
            assert!(
                (back - start).abs() < 1e-9,
                "round trip drifted for {code}: {back}"
            );
        }
    }

    #[test]
    fn test_unknown_code_is_one_to_one() {
        assert_eq!(rate("XXX"), 1.0);
        assert_eq!(convert_to_user(42.0, "XXX"), 42.0);
        assert_eq!(symbol("XXX"), "€");
    }

    #[test]
    fn test_usd_display_scenario() {
        // 20 EUR at 1.08 shows as 21.60 USD
        assert_eq!(format_eur_as(20.0, "USD", false), "21.60");
        assert_eq!(format_eur_as(20.0, "USD", true), "$21.60");
    }

    #[test]
    fn test_jpy_never_shows_decimals() {
        for amount in [0.0, 1.4, 99.5, 12345.678] {
            let formatted = format_amount(amount, "JPY", true);
            assert!(!formatted.contains('.'), "JPY emitted decimals: {formatted}");
        }
        assert_eq!(format_amount(99.5, "JPY", true), "¥100");
    }

    #[test]
    fn test_two_decimals_everywhere_else() {
        for code in all_codes().filter(|c| *c != "JPY") {
            let formatted = format_amount(7.0, code, false);
            let (_, frac) = formatted.split_once('.').expect("missing decimal point");
            assert_eq!(frac.len(), 2, "{code} formatted as {formatted}");
        }
    }

    #[test]
    fn test_aed_symbol_is_suffixed() {
        assert_eq!(format_amount(50.0, "AED", true), "50.00 AED");
    }

    #[test]
    fn test_country_mapping() {
        assert_eq!(currency_for_country("DE"), "EUR");
        assert_eq!(currency_for_country("us"), "USD");
        assert_eq!(currency_for_country("JP"), "JPY");
        assert_eq!(currency_for_country("RU"), "USD");
        assert_eq!(currency_for_country("ZZ"), "EUR");
    }
}
