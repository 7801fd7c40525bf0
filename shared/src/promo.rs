use crate::{config, currency};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A configured promo code: one-time-per-user bonus with a global cap.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoCode {
    pub code: &'static str,
    /// Bonus amount, in EUR.
    pub amount: f64,
    pub max_activations: u32,
}

/// Per-user record of consumed codes, keyed by the generated user id.
/// Stored as `{ "<user id>": ["CODE", ...] }` and never pruned.
pub type UserUsage = BTreeMap<String, Vec<String>>;

/// Global activation counter for one code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeUsage {
    #[serde(rename = "usageCount", default)]
    pub usage_count: u32,
    #[serde(rename = "lastUsed", default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<String>,
}

/// Global usage counters keyed by normalized code.
pub type GlobalUsage = BTreeMap<String, CodeUsage>;

/// Outcome of evaluating a redemption attempt. Nothing is mutated until the
/// caller applies an `Approved` outcome through [`record_redemption`].
#[derive(Debug, Clone, PartialEq)]
pub enum RedeemOutcome {
    Approved {
        promo: &'static PromoCode,
        /// Activations left after this one, when the cap is finite.
        remaining: u32,
    },
    Invalid,
    AlreadyUsed { code: String },
    LimitReached { code: String },
}

pub fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Decide whether `code` can be redeemed by `user_id`.
///
/// The per-user check runs before the global cap check, so a repeat user is
/// told "already used" even when the cap is also exhausted.
pub fn evaluate(
    code: &str,
    user_id: &str,
    user_usage: &UserUsage,
    global_usage: &GlobalUsage,
) -> RedeemOutcome {
    let code = normalize(code);
    if code.is_empty() {
        return RedeemOutcome::Invalid;
    }

    let promo = match config::promo_codes().iter().find(|p| p.code == code) {
        Some(promo) => promo,
        None => return RedeemOutcome::Invalid,
    };

    let used_by_user = user_usage
        .get(user_id)
        .map_or(false, |codes| codes.iter().any(|c| c == &code));
    if used_by_user {
        return RedeemOutcome::AlreadyUsed { code };
    }

    let count = global_usage.get(&code).map_or(0, |u| u.usage_count);
    if count >= promo.max_activations {
        return RedeemOutcome::LimitReached { code };
    }

    RedeemOutcome::Approved {
        promo,
        remaining: promo.max_activations - count - 1,
    }
}

/// Session state to write back after an approved redemption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedPromo {
    /// Balance after crediting the bonus, in EUR.
    pub balance_eur: f64,
    /// Spin counter value; a redemption always restarts the spin requirement.
    pub spins: u32,
}

/// Credit an approved promo to the balance and restart the spin counter, so
/// the win trigger needs fresh spins after every redemption.
pub fn apply(balance_eur: f64, promo: &PromoCode) -> AppliedPromo {
    AppliedPromo {
        balance_eur: balance_eur + promo.amount,
        spins: 0,
    }
}

/// Record a redemption approved by [`evaluate`] in both usage maps.
pub fn record_redemption(
    promo: &PromoCode,
    user_id: &str,
    user_usage: &mut UserUsage,
    global_usage: &mut GlobalUsage,
    timestamp: Option<String>,
) {
    let codes = user_usage.entry(user_id.to_string()).or_default();
    if !codes.iter().any(|c| c == promo.code) {
        codes.push(promo.code.to_string());
    }

    let entry = global_usage.entry(promo.code.to_string()).or_default();
    entry.usage_count += 1;
    entry.last_used = timestamp;
}

impl RedeemOutcome {
    /// User-facing message, with amounts shown in the user's currency.
    pub fn message(&self, user_currency: &str) -> String {
        match self {
            RedeemOutcome::Approved { promo, remaining } => {
                let bonus = currency::format_eur_as(promo.amount, user_currency, true);
                let mut message =
                    format!("Promo code {} activated! You received {}", promo.code, bonus);
                if *remaining > 0 {
                    message.push_str(&format!(" ({remaining} activations remaining)"));
                } else {
                    message.push_str(" (this was the last activation)");
                }
                message
            }
            RedeemOutcome::Invalid => "Invalid promo code".to_string(),
            RedeemOutcome::AlreadyUsed { code } => {
                format!("You have already used promo code {code}")
            }
            RedeemOutcome::LimitReached { code } => {
                format!("Promo code {code} is no longer valid (activation limit reached)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redeem_for(user: &str, code: &str, users: &mut UserUsage, global: &mut GlobalUsage) -> RedeemOutcome {
        let outcome = evaluate(code, user, users, global);
        if let RedeemOutcome::Approved { promo, .. } = &outcome {
            record_redemption(promo, user, users, global, None);
        }
        outcome
    }

    #[test]
    fn test_normalization_and_unknown_code() {
        let users = UserUsage::new();
        let global = GlobalUsage::new();
        assert!(matches!(
            evaluate("  welcome20 ", "u1", &users, &global),
            RedeemOutcome::Approved { promo, .. } if promo.code == "WELCOME20"
        ));
        assert_eq!(evaluate("NOPE", "u1", &users, &global), RedeemOutcome::Invalid);
        assert_eq!(evaluate("   ", "u1", &users, &global), RedeemOutcome::Invalid);
    }

    #[test]
    fn test_redemption_is_idempotent_per_user() {
        let mut users = UserUsage::new();
        let mut global = GlobalUsage::new();

        let first = redeem_for("u1", "WELCOME20", &mut users, &mut global);
        assert!(matches!(first, RedeemOutcome::Approved { .. }));
        assert_eq!(global["WELCOME20"].usage_count, 1);

        let second = redeem_for("u1", "welcome20", &mut users, &mut global);
        assert_eq!(second, RedeemOutcome::AlreadyUsed { code: "WELCOME20".to_string() });
        assert_eq!(global["WELCOME20"].usage_count, 1, "bonus must not reapply");
    }

    #[test]
    fn test_global_cap_rejects_after_n_activations() {
        // VIP100 is capped at a single activation
        let mut users = UserUsage::new();
        let mut global = GlobalUsage::new();

        assert!(matches!(
            redeem_for("u1", "VIP100", &mut users, &mut global),
            RedeemOutcome::Approved { remaining: 0, .. }
        ));
        assert_eq!(
            redeem_for("u2", "VIP100", &mut users, &mut global),
            RedeemOutcome::LimitReached { code: "VIP100".to_string() }
        );
    }

    #[test]
    fn test_already_used_wins_over_limit_reached() {
        let mut users = UserUsage::new();
        let mut global = GlobalUsage::new();
        redeem_for("u1", "VIP100", &mut users, &mut global);

        // cap is now exhausted, but u1 must still see "already used"
        assert_eq!(
            evaluate("VIP100", "u1", &users, &global),
            RedeemOutcome::AlreadyUsed { code: "VIP100".to_string() }
        );
    }

    #[test]
    fn test_apply_credits_bonus_and_restarts_spins() {
        let users = UserUsage::new();
        let global = GlobalUsage::new();
        let promo = match evaluate("WELCOME20", "u1", &users, &global) {
            RedeemOutcome::Approved { promo, .. } => promo,
            other => panic!("expected approval, got {other:?}"),
        };

        let applied = apply(20.0, promo);
        assert_eq!(applied.balance_eur, 40.0);
        assert_eq!(applied.spins, 0, "redemption must restart the spin requirement");
    }

    #[test]
    fn test_success_message_in_user_currency() {
        let users = UserUsage::new();
        let global = GlobalUsage::new();
        let outcome = evaluate("WELCOME20", "u1", &users, &global);
        let message = outcome.message("USD");
        assert!(message.contains("$21.60"), "got: {message}");
        assert!(message.contains("99 activations remaining"), "got: {message}");
    }

    #[test]
    fn test_usage_records_survive_json() {
        let mut users = UserUsage::new();
        let mut global = GlobalUsage::new();
        redeem_for("u1", "FRUIT10", &mut users, &mut global);

        let users_json = serde_json::to_string(&users).unwrap();
        let global_json = serde_json::to_string(&global).unwrap();
        assert_eq!(serde_json::from_str::<UserUsage>(&users_json).unwrap(), users);
        assert!(global_json.contains("usageCount"));
        assert_eq!(serde_json::from_str::<GlobalUsage>(&global_json).unwrap(), global);
    }
}
