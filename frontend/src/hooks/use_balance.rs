use crate::base::BALANCE_UPDATE_EVENT;
use crate::storage::SlotStorage;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent};
use yew::prelude::*;

/// Read-only mirror of the persisted EUR balance.
///
/// Seeded through [`SlotStorage`] on mount, then kept current by the
/// `balanceUpdate` events the session dispatches after every write. The hook
/// never writes the balance itself; ownership stays with `SlotStorage`.
#[hook]
pub fn use_balance() -> UseStateHandle<f64> {
    let balance = use_state(|| SlotStorage::new().balance());

    {
        let balance = balance.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |e: CustomEvent| {
                if let Some(new_total) = e.detail().as_f64() {
                    balance.set(new_total);
                }
            }) as Box<dyn FnMut(CustomEvent)>);

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback(
                    BALANCE_UPDATE_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        BALANCE_UPDATE_EVENT,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    balance
}
