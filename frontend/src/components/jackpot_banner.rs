use shared::config::JACKPOT_BASE_EUR;
use shared::{currency, locale::Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JackpotBannerProps {
    pub locale: Locale,
}

#[function_component(JackpotBanner)]
pub fn jackpot_banner(props: &JackpotBannerProps) -> Html {
    let strings = shared::locale::strings(&props.locale.lang);
    let amount = currency::convert_to_user(JACKPOT_BASE_EUR, &props.locale.currency).round() as i64;
    let display = format!(
        "{}{}",
        currency::symbol(&props.locale.currency),
        group_thousands(amount)
    );

    html! {
        <div class="text-center py-6">
            <div class="text-sm uppercase tracking-widest text-gray-400">{ strings.jackpot }</div>
            <div class="jackpot-amount text-4xl font-extrabold text-amber-400 animate-pulse">
                { display }
            </div>
        </div>
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_250_000), "1,250,000");
        assert_eq!(group_thousands(1_350_000), "1,350,000");
    }
}
