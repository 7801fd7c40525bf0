use crate::styles;
use shared::locale::Locale;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Result of the last activation attempt, rendered under the form.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoFeedback {
    pub text: String,
    pub success: bool,
}

#[derive(Properties, PartialEq)]
pub struct PromoFormProps {
    pub locale: Locale,
    pub feedback: Option<PromoFeedback>,
    /// Receives the raw code as typed; normalization happens in the redeemer.
    pub on_activate: Callback<String>,
}

#[function_component(PromoForm)]
pub fn promo_form(props: &PromoFormProps) -> Html {
    let input_ref = use_node_ref();
    let strings = shared::locale::strings(&props.locale.lang);

    let activate = {
        let input_ref = input_ref.clone();
        let on_activate = props.on_activate.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let code = input.value();
                if code.trim().is_empty() {
                    return;
                }
                input.set_value("");
                on_activate.emit(code);
            }
        })
    };

    let onclick = {
        let activate = activate.clone();
        Callback::from(move |_: MouseEvent| activate.emit(()))
    };

    let onkeypress = {
        let activate = activate.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                activate.emit(());
            }
        })
    };

    html! {
        <div class={classes!(styles::CARD, "max-w-md", "w-full", "mx-auto")}>
            <div class="flex space-x-2">
                <input
                    ref={input_ref}
                    id="promo-code-input"
                    type="text"
                    class={styles::INPUT}
                    placeholder={strings.promo_placeholder}
                    {onkeypress}
                />
                <button id="activate-promo-btn" class={styles::BUTTON_PRIMARY} {onclick}>
                    { strings.promo_button }
                </button>
            </div>
            {
                match &props.feedback {
                    Some(feedback) => {
                        let class = if feedback.success {
                            styles::ALERT_SUCCESS
                        } else {
                            styles::ALERT_ERROR
                        };
                        html! { <div id="promo-message" class={classes!(class, "mt-3")}>{ &feedback.text }</div> }
                    }
                    None => html! {},
                }
            }
        </div>
    }
}
