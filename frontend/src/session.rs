use crate::storage::SlotStorage;
use shared::locale::Locale;
use shared::win_modal::WinModalState;
use std::cell::RefCell;

/// Mutable per-page state, owned in one place instead of scattered globals.
///
/// Created once when the landing page mounts and shared by every callback
/// through an `Rc`. The storage wrapper is the single writer of the balance;
/// the modal machine and resolved locale live here so event handlers captured
/// at mount always see current values.
pub struct Session {
    pub storage: SlotStorage,
    pub modal: RefCell<WinModalState>,
    pub locale: RefCell<Locale>,
}

impl Session {
    pub fn new() -> Self {
        let storage = SlotStorage::new();
        let locale = storage.locale().unwrap_or_else(Locale::fallback);
        Self {
            storage,
            modal: RefCell::new(WinModalState::new()),
            locale: RefCell::new(locale),
        }
    }

    pub fn currency(&self) -> String {
        self.locale.borrow().currency.clone()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
