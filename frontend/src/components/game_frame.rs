use crate::config::{GAME_FRAME_URL, SYNC_BACKOFF_MS};
use crate::game::{parse_event, GameAdapter, PushError};
use crate::storage::SlotStorage;
use gloo_timers::callback::Timeout;
use shared::messages::GameMessage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GameFrameProps {
    /// Current EUR balance; a change re-syncs the game.
    pub balance_eur: f64,
    /// Every validated inbound message, after the frame's own bookkeeping.
    pub on_message: Callback<GameMessage>,
}

/// Delivery bookkeeping for one mounted frame.
struct SyncState {
    /// Last balance the game itself reported; `NEG_INFINITY` until the first
    /// report arrives.
    last_game_report: Cell<f64>,
    /// Pending resend, if any. Writing a new timeout drops (and cancels) the
    /// old one, so a stale retry can never reapply an outdated balance.
    pending: RefCell<Option<Timeout>>,
}

impl SyncState {
    fn new() -> Self {
        Self {
            last_game_report: Cell::new(f64::NEG_INFINITY),
            pending: RefCell::new(None),
        }
    }
}

/// Send the balance and keep resending on a backoff schedule until the game
/// acknowledges by reporting a balance of its own. Covers both the
/// not-yet-loaded content window and a loaded game that missed the message.
fn push_with_backoff(adapter: GameAdapter, sync: Rc<SyncState>, balance_eur: f64, attempt: usize) {
    match adapter.push_balance(balance_eur) {
        Ok(()) => log::debug!("sent balance {balance_eur} to game (attempt {attempt})"),
        Err(PushError::FrameNotReady) => {
            log::debug!("game frame not ready, retrying balance sync")
        }
        Err(PushError::Send) => {
            log::warn!("failed to deliver balance to game frame");
            return;
        }
    }

    let delay = SYNC_BACKOFF_MS[attempt.min(SYNC_BACKOFF_MS.len() - 1)];
    let sync_for_retry = sync.clone();
    let next = Timeout::new(delay, move || {
        push_with_backoff(adapter, sync_for_retry, balance_eur, attempt + 1)
    });
    *sync.pending.borrow_mut() = Some(next);
}

/// The embedded slot game and the message channel to it.
///
/// Owns the `<iframe>` and the window `message` listener. Handshake and
/// balance convergence are handled here; everything with game-state meaning
/// is forwarded to the page through `on_message`.
#[function_component(GameFrame)]
pub fn game_frame(props: &GameFrameProps) -> Html {
    let iframe_ref = use_node_ref();
    let sync = use_memo((), |_| SyncState::new());
    let adapter = GameAdapter::new(iframe_ref.clone());

    // Inbound message listener, attached once per mount.
    {
        let sync = sync.clone();
        let adapter = adapter.clone();
        let on_message = props.on_message.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");

            let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
                let Some(message) = parse_event(&event) else {
                    return;
                };
                match &message {
                    GameMessage::UpdateBalance { balance, .. } => {
                        // the game is live and authoritative; stop resending
                        sync.last_game_report.set(*balance);
                        *sync.pending.borrow_mut() = None;
                    }
                    GameMessage::GameStarted | GameMessage::GameReady => {
                        // a (re)loaded frame starts from its own default, so
                        // converge it onto the persisted balance
                        let stored = SlotStorage::new().balance();
                        push_with_backoff(adapter.clone(), sync.clone(), stored, 0);
                    }
                    _ => {}
                }
                on_message.emit(message);
            }) as Box<dyn FnMut(MessageEvent)>);

            window
                .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
                .expect("listener add failed");

            move || {
                let _ = window
                    .remove_event_listener_with_callback("message", closure.as_ref().unchecked_ref());
                drop(closure);
            }
        });
    }

    // Outbound sync whenever the page-side balance changes (initial mount,
    // promo redemption, claim reset). Balances the game itself just reported
    // are skipped so the echo does not ping-pong.
    {
        let sync = sync.clone();
        let adapter = adapter.clone();
        use_effect_with(props.balance_eur, move |balance_eur| {
            let target = *balance_eur;
            if (target - sync.last_game_report.get()).abs() > 0.005 {
                push_with_backoff(adapter, sync, target, 0);
            }
            || ()
        });
    }

    html! {
        <div class="iframe-wrapper relative aspect-video rounded-lg overflow-hidden border border-amber-500/20 shadow-2xl">
            <iframe
                ref={iframe_ref}
                id="game-frame"
                class="absolute inset-0 w-full h-full border-none"
                src={GAME_FRAME_URL}
                title="Fruit Paradise Slots"
                allow="autoplay"
            />
        </div>
    }
}
