use crate::currency;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The resolved {country, language, currency} triple for one session.
///
/// Persisted as a single JSON value and immutable until the user explicitly
/// changes it through the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub country: String,
    pub lang: String,
    pub currency: String,
}

impl Locale {
    /// Baseline used when detection fails or the country is unrecognized.
    pub fn fallback() -> Self {
        Self {
            country: "US".to_string(),
            lang: "en".to_string(),
            currency: "USD".to_string(),
        }
    }

    pub fn from_country(country: &str) -> Self {
        let country = country.trim().to_uppercase();
        if country.is_empty() {
            return Self::fallback();
        }
        let lang = language_for_country(&country);
        let currency = currency::currency_for_country(&country);
        Self {
            country,
            lang: lang.to_string(),
            currency: currency.to_string(),
        }
    }
}

static COUNTRY_TO_LANGUAGE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("DE", "de");
    map.insert("AT", "de");
    map.insert("FR", "fr");
    map.insert("AE", "ar");
    map.insert("CN", "zh");
    map.insert("JP", "ja");
    map.insert("RU", "ru");
    map.insert("ES", "es");
    map.insert("IT", "it");
    map
});

pub fn language_for_country(country: &str) -> &'static str {
    COUNTRY_TO_LANGUAGE
        .get(country.to_uppercase().as_str())
        .copied()
        .unwrap_or("en")
}

/// UI text bundle for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStrings {
    pub balance: &'static str,
    pub jackpot: &'static str,
    pub spin: &'static str,
    pub win_title: &'static str,
    pub claim: &'static str,
    pub close: &'static str,
    pub promo_placeholder: &'static str,
    pub promo_button: &'static str,
    pub claim_heading: &'static str,
    pub claim_body: &'static str,
}

const EN: UiStrings = UiStrings {
    balance: "BALANCE",
    jackpot: "JACKPOT",
    spin: "SPIN",
    win_title: "Congratulations!",
    claim: "Claim winnings",
    close: "Close",
    promo_placeholder: "Enter promo code",
    promo_button: "Activate",
    claim_heading: "Your winnings are on the way",
    claim_body: "Our team will contact you shortly to complete the payout.",
};

const DE: UiStrings = UiStrings {
    balance: "GUTHABEN",
    jackpot: "JACKPOT",
    spin: "DREHEN",
    win_title: "Glückwunsch!",
    claim: "Gewinn abholen",
    close: "Schließen",
    promo_placeholder: "Promocode eingeben",
    promo_button: "Aktivieren",
    claim_heading: "Ihr Gewinn ist unterwegs",
    claim_body: "Unser Team meldet sich in Kürze, um die Auszahlung abzuschließen.",
};

const FR: UiStrings = UiStrings {
    balance: "SOLDE",
    jackpot: "JACKPOT",
    spin: "TOURNER",
    win_title: "Félicitations!",
    claim: "Réclamer les gains",
    close: "Fermer",
    promo_placeholder: "Entrez le code promo",
    promo_button: "Activer",
    claim_heading: "Vos gains sont en route",
    claim_body: "Notre équipe vous contactera sous peu pour finaliser le paiement.",
};

const AR: UiStrings = UiStrings {
    balance: "الرصيد",
    jackpot: "الجائزة الكبرى",
    spin: "دوران",
    win_title: "تهانينا!",
    claim: "المطالبة بالأرباح",
    close: "إغلاق",
    promo_placeholder: "أدخل الرمز الترويجي",
    promo_button: "تفعيل",
    claim_heading: "أرباحك في الطريق",
    claim_body: "سيتواصل فريقنا معك قريباً لإتمام الدفع.",
};

const ZH: UiStrings = UiStrings {
    balance: "余额",
    jackpot: "累积奖金",
    spin: "旋转",
    win_title: "恭喜！",
    claim: "领取奖金",
    close: "关闭",
    promo_placeholder: "输入优惠码",
    promo_button: "激活",
    claim_heading: "您的奖金正在路上",
    claim_body: "我们的团队将尽快与您联系以完成付款。",
};

const JA: UiStrings = UiStrings {
    balance: "残高",
    jackpot: "ジャックポット",
    spin: "スピン",
    win_title: "おめでとう！",
    claim: "賞金を受け取る",
    close: "閉じる",
    promo_placeholder: "プロモコードを入力",
    promo_button: "有効化",
    claim_heading: "賞金はまもなく届きます",
    claim_body: "支払い手続きのため、担当者よりご連絡いたします。",
};

const RU: UiStrings = UiStrings {
    balance: "БАЛАНС",
    jackpot: "ДЖЕКПОТ",
    spin: "ВРАЩАТЬ",
    win_title: "Поздравляем!",
    claim: "Забрать выигрыш",
    close: "Закрыть",
    promo_placeholder: "Введите промокод",
    promo_button: "Активировать",
    claim_heading: "Ваш выигрыш уже в пути",
    claim_body: "Наша команда свяжется с вами для завершения выплаты.",
};

const ES: UiStrings = UiStrings {
    balance: "SALDO",
    jackpot: "BOTE",
    spin: "GIRAR",
    win_title: "¡Felicidades!",
    claim: "Reclamar ganancias",
    close: "Cerrar",
    promo_placeholder: "Introduce el código promocional",
    promo_button: "Activar",
    claim_heading: "Tus ganancias están en camino",
    claim_body: "Nuestro equipo se pondrá en contacto contigo para completar el pago.",
};

const IT: UiStrings = UiStrings {
    balance: "SALDO",
    jackpot: "JACKPOT",
    spin: "GIRA",
    win_title: "Congratulazioni!",
    claim: "Ritira la vincita",
    close: "Chiudi",
    promo_placeholder: "Inserisci il codice promo",
    promo_button: "Attiva",
    claim_heading: "La tua vincita è in arrivo",
    claim_body: "Il nostro team ti contatterà a breve per completare il pagamento.",
};

/// Text bundle for a language code, falling back to English.
pub fn strings(lang: &str) -> &'static UiStrings {
    match lang {
        "de" => &DE,
        "fr" => &FR,
        "ar" => &AR,
        "zh" => &ZH,
        "ja" => &JA,
        "ru" => &RU,
        "es" => &ES,
        "it" => &IT,
        _ => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_country_known() {
        let locale = Locale::from_country("de");
        assert_eq!(locale.country, "DE");
        assert_eq!(locale.lang, "de");
        assert_eq!(locale.currency, "EUR");

        let locale = Locale::from_country("JP");
        assert_eq!(locale.lang, "ja");
        assert_eq!(locale.currency, "JPY");
    }

    #[test]
    fn test_unknown_country_keeps_english_with_local_currency() {
        // GB has no dedicated translation but does have a currency
        let locale = Locale::from_country("GB");
        assert_eq!(locale.lang, "en");
        assert_eq!(locale.currency, "GBP");
    }

    #[test]
    fn test_unrecognized_country_falls_back() {
        let locale = Locale::from_country("ZZ");
        assert_eq!(locale.lang, "en");
        assert_eq!(locale.currency, "EUR");
        assert_eq!(Locale::from_country(""), Locale::fallback());
    }

    #[test]
    fn test_strings_fall_back_to_english() {
        assert_eq!(strings("pt").win_title, EN.win_title);
        assert_eq!(strings("de").win_title, "Glückwunsch!");
    }

    #[test]
    fn test_locale_round_trips_through_json() {
        let locale = Locale::from_country("FR");
        let json = serde_json::to_string(&locale).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(locale, back);
    }
}
