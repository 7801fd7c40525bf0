use crate::components::balance_display::BalanceDisplay;
use shared::locale::Locale;
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::prelude::*;

/// Fired on `window` after every persisted balance mutation; the detail is
/// the new EUR total. Components mirror the stored value through this event
/// instead of polling storage.
pub const BALANCE_UPDATE_EVENT: &str = "balanceUpdate";

pub fn dispatch_balance_event(balance_eur: f64) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_f64(balance_eur));
        if let Ok(event) =
            CustomEvent::new_with_event_init_dict(BALANCE_UPDATE_EVENT, &event_init)
        {
            let _ = window.dispatch_event(&event);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub locale: Locale,
    pub children: Html,
}

/// Shared page chrome: top bar with the brand and the live balance.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-950 text-white">
            <nav class="fixed top-0 z-40 w-full bg-gray-900/80 backdrop-blur-md border-b border-amber-500/20">
                <div class="max-w-5xl mx-auto h-16 px-4 flex items-center justify-between">
                    <span class="text-xl font-bold text-amber-400">{"Fruit Paradise"}</span>
                    <BalanceDisplay locale={props.locale.clone()} />
                </div>
            </nav>
            <main class="pt-16 max-w-5xl mx-auto px-4">
                { props.children.clone() }
            </main>
        </div>
    }
}
