use crate::hooks::use_balance;
use shared::{currency, locale::Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BalanceDisplayProps {
    pub locale: Locale,
}

/// Live balance in the user's currency, without the symbol; the currency code
/// is rendered alongside in its own element.
#[function_component(BalanceDisplay)]
pub fn balance_display(props: &BalanceDisplayProps) -> Html {
    let balance = use_balance();
    let strings = shared::locale::strings(&props.locale.lang);
    let formatted = currency::format_eur_as(*balance, &props.locale.currency, false);

    html! {
        <div class="flex items-center space-x-2">
            <span class="text-xs text-gray-400 uppercase tracking-wide">{ strings.balance }</span>
            <span class="text-lg font-bold text-amber-400">{ formatted }</span>
            <span class="text-sm text-gray-400 balance-currency">{ &props.locale.currency }</span>
        </div>
    }
}
