use crate::base::Base;
use crate::hooks::use_locale;
use crate::styles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClaimProps {
    /// Big-win variant, reached from the 100+ threshold.
    #[prop_or_default]
    pub big: bool,
}

/// Post-claim destination. Purely informational; the balance was already
/// zeroed before the redirect landed here.
#[function_component(Claim)]
pub fn claim(props: &ClaimProps) -> Html {
    let locale = use_locale();
    let strings = shared::locale::strings(&locale.lang);

    html! {
        <Base locale={(*locale).clone()}>
            <div class="flex flex-col items-center pt-12">
                <div class={classes!(styles::CARD, "max-w-lg", "w-full", "text-center")}>
                    <h1 class={styles::TEXT_H1}>
                        { strings.claim_heading }
                        { props.big.then(|| html! { <span class="ml-2">{"🎉"}</span> }) }
                    </h1>
                    <p class={classes!(styles::TEXT_BODY, "mt-4")}>{ strings.claim_body }</p>
                </div>
            </div>
        </Base>
    }
}
