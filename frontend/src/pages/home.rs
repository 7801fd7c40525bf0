use crate::base::{dispatch_balance_event, Base};
use crate::components::{
    GameFrame, JackpotBanner, LocaleSelector, PromoFeedback, PromoForm, WinModal,
};
use crate::config::{PROMO_MESSAGE_MS, WIN_EVAL_DELAY_MS};
use crate::hooks::{use_balance, use_locale};
use crate::session::Session;
use gloo_timers::callback::Timeout;
use shared::config::{DEFAULT_CLAIM_URL, WIN_MODAL_POLICY};
use shared::locale::Locale;
use shared::messages::GameMessage;
use shared::promo::RedeemOutcome;
use shared::win_modal::{claim_target, Transition};
use shared::{config, currency, promo};
use std::rc::Rc;
use yew::prelude::*;

/// Landing page: jackpot banner, the embedded slot, promo redemption and the
/// win overlay, all hanging off one [`Session`].
#[function_component(Home)]
pub fn home() -> Html {
    let session = use_memo((), |_| Session::new());
    let locale = use_locale();
    let balance = use_balance();
    let modal_shown = use_state(|| false);
    let feedback = use_state(|| None::<PromoFeedback>);
    let feedback_timer = use_mut_ref(|| None::<Timeout>);

    // Seed the persisted balance on first load so both frames agree before
    // the game even starts, and let the mirrors know.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            dispatch_balance_event(session.storage.balance());
            || ()
        });
    }

    // The session keeps its own copy of the locale so mount-time callbacks
    // never read a stale one.
    {
        let session = session.clone();
        use_effect_with((*locale).clone(), move |locale: &Locale| {
            *session.locale.borrow_mut() = locale.clone();
            || ()
        });
    }

    let on_game_message = {
        let session = session.clone();
        let modal_shown = modal_shown.clone();
        Callback::from(move |message: GameMessage| match message {
            GameMessage::UpdateBalance { balance, spin_made, win } => {
                let stored = session.storage.set_balance(balance);
                dispatch_balance_event(stored);
                // canonical spin policy: only flagged spins count
                if spin_made == Some(true) {
                    session.storage.record_spin();
                }
                if let Some(win) = win {
                    log::info!("game reported a win of {win} EUR");
                }
                schedule_modal_evaluation(session.clone(), modal_shown.clone());
            }
            GameMessage::ShowWinModal { amount } => {
                log::info!("game requested the win overlay for {amount} EUR");
                if session.modal.borrow_mut().force_show() == Transition::Show {
                    modal_shown.set(true);
                }
            }
            GameMessage::SlotScriptLoaded { time } => {
                log::debug!("slot sync script loaded at {time}");
            }
            // handshake is answered inside the frame component
            GameMessage::GameStarted | GameMessage::GameReady => {}
            GameMessage::SetBalance { .. } => {}
        })
    };

    let on_activate = {
        let session = session.clone();
        let feedback = feedback.clone();
        let feedback_timer = feedback_timer.clone();
        Callback::from(move |raw_code: String| {
            let user_id = session.storage.user_id();
            let mut user_usage = session.storage.user_usage();
            let mut global_usage = session.storage.global_usage();

            let outcome = promo::evaluate(&raw_code, &user_id, &user_usage, &global_usage);
            if let RedeemOutcome::Approved { promo, .. } = &outcome {
                let applied = promo::apply(session.storage.balance(), promo);
                let new_balance = session.storage.set_balance(applied.balance_eur);
                session.storage.reset_spins();
                promo::record_redemption(
                    promo,
                    &user_id,
                    &mut user_usage,
                    &mut global_usage,
                    Some(now_iso()),
                );
                session.storage.set_user_usage(&user_usage);
                session.storage.set_global_usage(&global_usage);
                dispatch_balance_event(new_balance);
                log::info!("promo {} applied, balance is now {new_balance} EUR", promo.code);
            }

            let success = matches!(outcome, RedeemOutcome::Approved { .. });
            feedback.set(Some(PromoFeedback {
                text: outcome.message(&session.currency()),
                success,
            }));

            let feedback = feedback.clone();
            *feedback_timer.borrow_mut() =
                Some(Timeout::new(PROMO_MESSAGE_MS, move || feedback.set(None)));
        })
    };

    let on_dismiss = {
        let session = session.clone();
        let modal_shown = modal_shown.clone();
        Callback::from(move |_| {
            session.modal.borrow_mut().dismiss();
            modal_shown.set(false);
        })
    };

    let on_claim = {
        let session = session.clone();
        let modal_shown = modal_shown.clone();
        Callback::from(move |_| {
            let balance_eur = session.storage.balance();
            let target = claim_target(balance_eur, config::win_thresholds())
                .map(|t| t.redirect_url)
                .unwrap_or(DEFAULT_CLAIM_URL);

            // reset before navigating; the new page must not see the old balance
            let zeroed = session.storage.set_balance(0.0);
            dispatch_balance_event(zeroed);
            session.modal.borrow_mut().dismiss();
            modal_shown.set(false);

            log::info!("claiming {balance_eur} EUR, redirecting to {target}");
            if let Some(window) = web_sys::window() {
                if window.location().set_href(target).is_err() {
                    log::warn!("redirect to {target} failed");
                }
            }
        })
    };

    let on_locale_change = {
        let session = session.clone();
        let locale = locale.clone();
        Callback::from(move |selected: Locale| {
            session.storage.set_locale(&selected);
            *session.locale.borrow_mut() = selected.clone();
            locale.set(selected);
        })
    };

    html! {
        <Base locale={(*locale).clone()}>
            <div class="flex justify-end py-2">
                <LocaleSelector locale={(*locale).clone()} on_change={on_locale_change} />
            </div>
            <JackpotBanner locale={(*locale).clone()} />
            <GameFrame balance_eur={*balance} on_message={on_game_message} />
            <div class="my-6">
                <PromoForm
                    locale={(*locale).clone()}
                    feedback={(*feedback).clone()}
                    on_activate={on_activate}
                />
            </div>
            <WinModal
                shown={*modal_shown}
                balance_eur={*balance}
                locale={(*locale).clone()}
                on_dismiss={on_dismiss}
                on_claim={on_claim}
            />
        </Base>
    }
}

/// Re-run the trigger after the win-animation grace period, against whatever
/// is persisted by then. A newer update just schedules another evaluation, so
/// the last one always sees the final state.
fn schedule_modal_evaluation(session: Rc<Session>, modal_shown: UseStateHandle<bool>) {
    Timeout::new(WIN_EVAL_DELAY_MS, move || {
        let balance_eur = session.storage.balance();
        let spins = session.storage.spin_count();
        let currency_code = session.currency();
        let in_user_currency = currency::convert_to_user(balance_eur, &currency_code);

        let transition = session
            .modal
            .borrow_mut()
            .evaluate(in_user_currency, spins, &WIN_MODAL_POLICY);
        match transition {
            Transition::Show => {
                log::info!(
                    "win conditions met ({in_user_currency} {currency_code}, {spins} spins)"
                );
                modal_shown.set(true);
            }
            Transition::Hide => modal_shown.set(false),
            Transition::NoChange => {}
        }
    })
    .forget();
}

fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}
