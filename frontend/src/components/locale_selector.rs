use shared::{currency, locale::Locale};
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Countries offered in the dropdown; detection covers the rest.
const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("DE", "Deutschland"),
    ("FR", "France"),
    ("ES", "España"),
    ("IT", "Italia"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("AE", "الإمارات"),
    ("CN", "中国"),
    ("JP", "日本"),
    ("IN", "India"),
    ("RU", "Россия"),
];

#[derive(Properties, PartialEq)]
pub struct LocaleSelectorProps {
    pub locale: Locale,
    pub on_change: Callback<Locale>,
}

/// Explicit locale override. A choice made here is persisted and wins over IP
/// detection on every later visit.
#[function_component(LocaleSelector)]
pub fn locale_selector(props: &LocaleSelectorProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok());
            if let Some(select) = select {
                on_change.emit(Locale::from_country(&select.value()));
            }
        })
    };

    html! {
        <select
            id="country-select"
            class="bg-gray-800 text-white text-sm rounded-lg border border-gray-700 px-2 py-1"
            {onchange}
        >
            {
                for COUNTRIES.iter().map(|(code, name)| {
                    let label = format!(
                        "{} ({}, {})",
                        name,
                        shared::locale::language_for_country(code).to_uppercase(),
                        currency::symbol(currency::currency_for_country(code)),
                    );
                    html! {
                        <option value={*code} selected={*code == props.locale.country}>
                            { label }
                        </option>
                    }
                })
            }
        </select>
    }
}
