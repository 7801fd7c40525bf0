use crate::config::{TriggerPolicy, WinThreshold};

/// Result of one trigger evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Show,
    Hide,
    NoChange,
}

/// Two-state machine deciding when the "claim winnings" overlay is visible.
///
/// Transient by design: rebuilt on every page load, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinModalState {
    shown: bool,
}

impl WinModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Re-evaluate after a balance update.
    ///
    /// Shows the modal once the balance (in the user's display currency)
    /// reaches the threshold AND enough flagged spins happened since the last
    /// promo redemption. While shown, further qualifying updates are a no-op;
    /// an update that drops the balance below the threshold hides it again.
    pub fn evaluate(
        &mut self,
        balance_in_user_currency: f64,
        spins_since_promo: u32,
        policy: &TriggerPolicy,
    ) -> Transition {
        let qualifies = balance_in_user_currency >= policy.threshold_balance
            && spins_since_promo >= policy.min_spins;

        match (self.shown, qualifies) {
            (false, true) => {
                self.shown = true;
                Transition::Show
            }
            (true, _) if balance_in_user_currency < policy.threshold_balance => {
                self.shown = false;
                Transition::Hide
            }
            _ => Transition::NoChange,
        }
    }

    /// User dismissed the overlay (close button, backdrop, Escape).
    pub fn dismiss(&mut self) {
        self.shown = false;
    }

    /// The game asked for the overlay directly; no threshold gating applies.
    pub fn force_show(&mut self) -> Transition {
        if self.shown {
            Transition::NoChange
        } else {
            self.shown = true;
            Transition::Show
        }
    }
}

/// Pick the claim destination: the highest configured threshold that does not
/// exceed the current balance. `None` means the default claim page.
pub fn claim_target(balance_eur: f64, thresholds: &[WinThreshold]) -> Option<&WinThreshold> {
    thresholds
        .iter()
        .filter(|t| balance_eur >= t.amount)
        .max_by(|a, b| a.amount.partial_cmp(&b.amount).expect("finite thresholds"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WIN_MODAL_POLICY;

    fn threshold(amount: f64, url: &'static str) -> WinThreshold {
        WinThreshold { amount, redirect_url: url }
    }

    #[test]
    fn test_below_threshold_never_shows() {
        let mut state = WinModalState::new();
        for spins in [0, 3, 50] {
            assert_eq!(state.evaluate(99.99, spins, &WIN_MODAL_POLICY), Transition::NoChange);
            assert!(!state.is_shown());
        }
    }

    #[test]
    fn test_needs_min_spins_after_promo() {
        let mut state = WinModalState::new();
        // 110 in user currency, but only one flagged spin since the promo
        assert_eq!(state.evaluate(110.0, 1, &WIN_MODAL_POLICY), Transition::NoChange);
        assert!(!state.is_shown());
        assert_eq!(state.evaluate(110.0, 2, &WIN_MODAL_POLICY), Transition::NoChange);
        // third qualifying spin tips it over
        assert_eq!(state.evaluate(110.0, 3, &WIN_MODAL_POLICY), Transition::Show);
        assert!(state.is_shown());
    }

    #[test]
    fn test_show_is_idempotent_until_dismissed() {
        let mut state = WinModalState::new();
        assert_eq!(state.evaluate(150.0, 5, &WIN_MODAL_POLICY), Transition::Show);
        assert_eq!(state.evaluate(200.0, 6, &WIN_MODAL_POLICY), Transition::NoChange);
        assert!(state.is_shown());

        state.dismiss();
        assert!(!state.is_shown());
        // conditions still hold, so the next evaluation shows it again
        assert_eq!(state.evaluate(200.0, 6, &WIN_MODAL_POLICY), Transition::Show);
    }

    #[test]
    fn test_balance_drop_hides_shown_modal() {
        let mut state = WinModalState::new();
        state.evaluate(150.0, 5, &WIN_MODAL_POLICY);
        assert_eq!(state.evaluate(40.0, 5, &WIN_MODAL_POLICY), Transition::Hide);
        assert!(!state.is_shown());
    }

    #[test]
    fn test_force_show_bypasses_gating() {
        let mut state = WinModalState::new();
        assert_eq!(state.force_show(), Transition::Show);
        assert_eq!(state.force_show(), Transition::NoChange);
    }

    #[test]
    fn test_claim_picks_highest_threshold_not_exceeding_balance() {
        let thresholds = [
            threshold(30.0, "urlA"),
            threshold(50.0, "urlB"),
            threshold(100.0, "urlC"),
        ];
        assert_eq!(claim_target(120.0, &thresholds).unwrap().redirect_url, "urlC");
        assert_eq!(claim_target(100.0, &thresholds).unwrap().redirect_url, "urlC");
        assert_eq!(claim_target(75.0, &thresholds).unwrap().redirect_url, "urlB");
        assert_eq!(claim_target(30.0, &thresholds).unwrap().redirect_url, "urlA");
        assert!(claim_target(10.0, &thresholds).is_none());
    }
}
