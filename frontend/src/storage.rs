use shared::config::INITIAL_BALANCE_EUR;
use shared::locale::Locale;
use shared::promo::{GlobalUsage, UserUsage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};

pub const BALANCE_KEY: &str = "fruitParadiseBalance";
pub const INIT_BALANCE_KEY: &str = "fruitParadiseInitBalance";
pub const SPIN_COUNTER_KEY: &str = "fruitParadiseSpinCounter";
pub const USER_ID_KEY: &str = "fruitParadiseUserId";
pub const USER_PROMOS_KEY: &str = "fruitParadiseUserUsedCodes";
pub const USED_PROMOS_KEY: &str = "fruitParadiseUsedPromoCodes";
pub const LOCALE_KEY: &str = "fruitParadiseLocale";
pub const CURRENCY_KEY: &str = "fruitParadiseCurrency";

/// Typed wrapper over localStorage, the single owner of all persisted state.
///
/// When localStorage is unavailable (storage disabled, sandboxed frame) every
/// read and write degrades to an in-memory map for the lifetime of the page.
#[derive(Clone)]
pub struct SlotStorage {
    backend: Option<Storage>,
    fallback: Rc<RefCell<HashMap<String, String>>>,
}

impl SlotStorage {
    pub fn new() -> Self {
        let backend = window().and_then(|w| w.local_storage().ok().flatten());
        if backend.is_none() {
            log::warn!("localStorage unavailable; balance and promo state will not persist");
        }
        Self { backend, fallback: Rc::new(RefCell::new(HashMap::new())) }
    }

    fn get(&self, key: &str) -> Option<String> {
        match &self.backend {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.fallback.borrow().get(key).cloned(),
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.backend {
            if storage.set_item(key, value).is_ok() {
                return;
            }
            log::warn!("failed to persist {key}; keeping value in memory");
        }
        self.fallback.borrow_mut().insert(key.to_string(), value.to_string());
    }

    /// Current balance in EUR. Seeds the configured initial balance on the
    /// very first load so both frames start from the same value.
    pub fn balance(&self) -> f64 {
        if let Some(balance) = self.get(BALANCE_KEY).and_then(|v| v.parse::<f64>().ok()) {
            if balance.is_finite() && balance >= 0.0 {
                return balance;
            }
        }
        let initial = self.initial_balance();
        self.set(BALANCE_KEY, &initial.to_string());
        initial
    }

    /// Persist a new balance. Non-finite values are rejected and negative
    /// values clamped to zero; returns what was actually stored.
    pub fn set_balance(&self, balance_eur: f64) -> f64 {
        if !balance_eur.is_finite() {
            log::warn!("ignoring non-finite balance write");
            return self.balance();
        }
        let clamped = balance_eur.max(0.0);
        self.set(BALANCE_KEY, &clamped.to_string());
        clamped
    }

    fn initial_balance(&self) -> f64 {
        self.get(INIT_BALANCE_KEY)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(INITIAL_BALANCE_EUR)
    }

    pub fn spin_count(&self) -> u32 {
        self.get(SPIN_COUNTER_KEY).and_then(|v| v.parse().ok()).unwrap_or(0)
    }

    /// Count one flagged spin; returns the new total.
    pub fn record_spin(&self) -> u32 {
        let count = self.spin_count() + 1;
        self.set(SPIN_COUNTER_KEY, &count.to_string());
        count
    }

    pub fn reset_spins(&self) {
        self.set(SPIN_COUNTER_KEY, "0");
    }

    /// Stable pseudo-random id for this browser, generated once.
    pub fn user_id(&self) -> String {
        if let Some(id) = self.get(USER_ID_KEY).filter(|id| !id.is_empty()) {
            return id;
        }
        let id = format!("user_{}", uuid::Uuid::new_v4().simple());
        self.set(USER_ID_KEY, &id);
        id
    }

    pub fn user_usage(&self) -> UserUsage {
        self.read_json(USER_PROMOS_KEY)
    }

    pub fn set_user_usage(&self, usage: &UserUsage) {
        self.write_json(USER_PROMOS_KEY, usage);
    }

    pub fn global_usage(&self) -> GlobalUsage {
        self.read_json(USED_PROMOS_KEY)
    }

    pub fn set_global_usage(&self, usage: &GlobalUsage) {
        self.write_json(USED_PROMOS_KEY, usage);
    }

    pub fn locale(&self) -> Option<Locale> {
        self.get(LOCALE_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn set_locale(&self, locale: &Locale) {
        self.write_json(LOCALE_KEY, locale);
        // the in-frame localization script reads the bare currency code
        self.set(CURRENCY_KEY, &locale.currency);
    }

    fn read_json<T: serde::de::DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("discarding corrupt {key} entry: {err}");
                T::default()
            }),
            None => T::default(),
        }
    }

    fn write_json<T: serde::Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw),
            Err(err) => log::warn!("failed to serialize {key}: {err}"),
        }
    }
}

impl Default for SlotStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory() -> SlotStorage {
        SlotStorage {
            backend: None,
            fallback: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    #[test]
    fn test_first_read_seeds_and_persists_initial_balance() {
        let storage = in_memory();
        assert_eq!(storage.balance(), INITIAL_BALANCE_EUR);
        assert_eq!(storage.get(BALANCE_KEY).unwrap(), INITIAL_BALANCE_EUR.to_string());
    }

    #[test]
    fn test_balance_seed_honors_init_override() {
        let storage = in_memory();
        storage.set(INIT_BALANCE_KEY, "35");
        assert_eq!(storage.balance(), 35.0);
        assert_eq!(storage.get(BALANCE_KEY).unwrap(), "35");
    }

    #[test]
    fn test_set_balance_clamps_and_rejects() {
        let storage = in_memory();
        assert_eq!(storage.set_balance(-5.0), 0.0);
        storage.set_balance(12.5);
        assert_eq!(storage.set_balance(f64::NAN), 12.5, "non-finite write must not stick");
        assert_eq!(storage.balance(), 12.5);
    }

    #[test]
    fn test_spin_counter_round_trip() {
        let storage = in_memory();
        assert_eq!(storage.spin_count(), 0);
        assert_eq!(storage.record_spin(), 1);
        assert_eq!(storage.record_spin(), 2);
        storage.reset_spins();
        assert_eq!(storage.spin_count(), 0);
    }
}
