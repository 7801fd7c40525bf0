use crate::promo::PromoCode;

/// Starting balance for a first-time visitor, in EUR.
pub const INITIAL_BALANCE_EUR: f64 = 20.0;

/// Base jackpot amount shown on the landing page, in EUR.
pub const JACKPOT_BASE_EUR: f64 = 1_250_000.0;

/// A balance threshold paired with the page the claim button navigates to.
#[derive(Debug, Clone, PartialEq)]
pub struct WinThreshold {
    pub amount: f64,
    pub redirect_url: &'static str,
}

/// Conditions under which the win modal is allowed to appear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPolicy {
    /// Minimum balance, in the user's display currency.
    pub threshold_balance: f64,
    /// Minimum flagged spins since the last promo redemption.
    pub min_spins: u32,
}

pub const WIN_MODAL_POLICY: TriggerPolicy = TriggerPolicy {
    threshold_balance: 100.0,
    min_spins: 3,
};

/// Claim destination when no configured threshold matches.
pub const DEFAULT_CLAIM_URL: &str = "/claim";

static PROMO_CODES: &[PromoCode] = &[
    PromoCode { code: "FRUIT10", amount: 10.0, max_activations: 100 },
    PromoCode { code: "WELCOME20", amount: 20.0, max_activations: 100 },
    PromoCode { code: "PARADISE50", amount: 50.0, max_activations: 50 },
    PromoCode { code: "TEST202", amount: 85.0, max_activations: 50 },
    PromoCode { code: "VIP100", amount: 100.0, max_activations: 1 },
];

static WIN_THRESHOLDS: &[WinThreshold] = &[
    WinThreshold { amount: 30.0, redirect_url: "https://www.twitch.tv/" },
    WinThreshold { amount: 50.0, redirect_url: "/claim-big" },
    WinThreshold { amount: 100.0, redirect_url: "https://youtube.com" },
];

pub fn promo_codes() -> &'static [PromoCode] {
    PROMO_CODES
}

pub fn win_thresholds() -> &'static [WinThreshold] {
    WIN_THRESHOLDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promo_codes_are_unique_and_uppercase() {
        for (i, promo) in promo_codes().iter().enumerate() {
            assert_eq!(promo.code, promo.code.to_uppercase());
            assert!(promo.amount > 0.0);
            assert!(promo.max_activations > 0);
            for other in &promo_codes()[i + 1..] {
                assert_ne!(promo.code, other.code);
            }
        }
    }

    #[test]
    fn test_thresholds_sorted_ascending() {
        let amounts: Vec<f64> = win_thresholds().iter().map(|t| t.amount).collect();
        let mut sorted = amounts.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(amounts, sorted);
    }
}
