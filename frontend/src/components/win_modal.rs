use crate::styles;
use gloo::events::EventListener;
use shared::{currency, locale::Locale};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WinModalProps {
    pub shown: bool,
    pub balance_eur: f64,
    pub locale: Locale,
    pub on_dismiss: Callback<()>,
    pub on_claim: Callback<()>,
}

/// "Claim winnings" overlay. Dismissable via close button, backdrop click or
/// Escape; the claim button hands control back to the page, which resets the
/// balance and navigates away.
#[function_component(WinModal)]
pub fn win_modal(props: &WinModalProps) -> Html {
    // Escape-to-close only while the overlay is up
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.shown, move |shown| {
            let listener = shown.then(|| {
                EventListener::new(&gloo_utils::document(), "keydown", move |event| {
                    if let Some(e) = event.dyn_ref::<KeyboardEvent>() {
                        if e.key() == "Escape" {
                            on_dismiss.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    if !props.shown {
        return html! {};
    }

    let strings = shared::locale::strings(&props.locale.lang);
    let amount = currency::format_eur_as(props.balance_eur, &props.locale.currency, false);

    let on_backdrop_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            let clicked_backdrop = match (e.target(), e.current_target()) {
                (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
                _ => false,
            };
            if clicked_backdrop {
                on_dismiss.emit(());
            }
        })
    };

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let on_claim = {
        let on_claim = props.on_claim.clone();
        Callback::from(move |_: MouseEvent| on_claim.emit(()))
    };

    html! {
        <div id="win-modal" class={styles::MODAL_BACKDROP} onclick={on_backdrop_click}>
            <div class={styles::MODAL_CARD}>
                <h2 class="text-3xl font-extrabold text-amber-400 mb-2">{ strings.win_title }</h2>
                <div class="my-4">
                    <span id="win-modal-amount" class="text-5xl font-bold text-white">{ amount }</span>
                    <span id="win-modal-currency" class="ml-2 text-xl text-gray-400">
                        { &props.locale.currency }
                    </span>
                </div>
                <div class="flex justify-center space-x-3 mt-6">
                    <button id="win-modal-claim-btn" class={styles::BUTTON_PRIMARY} onclick={on_claim}>
                        { strings.claim }
                    </button>
                    <button id="win-modal-close-btn" class={styles::BUTTON_SECONDARY} onclick={on_close}>
                        { strings.close }
                    </button>
                </div>
            </div>
        </div>
    }
}
