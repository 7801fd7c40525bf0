use gloo_utils::format::JsValueSerdeExt;
use shared::messages::GameMessage;
use wasm_bindgen::JsValue;
use web_sys::{HtmlIFrameElement, MessageEvent};
use yew::NodeRef;

/// Why a message could not be delivered to the game frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError {
    /// The iframe element or its content window does not exist yet; retry.
    FrameNotReady,
    /// Serialization or postMessage itself failed; retrying will not help.
    Send,
}

/// The one place that talks to the embedded game.
///
/// The slot build is an opaque collaborator: its only contract is that it
/// accepts `SET_BALANCE` and reports back with the messages in
/// [`GameMessage`]. Everything else about its internals stays on its side of
/// the frame boundary.
#[derive(Clone)]
pub struct GameAdapter {
    iframe: NodeRef,
}

impl GameAdapter {
    pub fn new(iframe: NodeRef) -> Self {
        Self { iframe }
    }

    /// Force the game's internal balance to `balance_eur`.
    pub fn push_balance(&self, balance_eur: f64) -> Result<(), PushError> {
        let iframe = self
            .iframe
            .cast::<HtmlIFrameElement>()
            .ok_or(PushError::FrameNotReady)?;
        let target = iframe.content_window().ok_or(PushError::FrameNotReady)?;

        let message = GameMessage::SetBalance { balance: balance_eur };
        let payload = JsValue::from_serde(&message).map_err(|err| {
            log::warn!("failed to serialize SET_BALANCE: {err}");
            PushError::Send
        })?;
        // The slot build is served from a separate origin, so the target
        // origin cannot be pinned here. Nothing sensitive crosses this channel.
        target.post_message(&payload, "*").map_err(|_| PushError::Send)
    }
}

/// Validate one inbound `message` event. Returns `None` for anything that is
/// not a known, well-formed [`GameMessage`]; malformed traffic is expected on
/// this channel (browser extensions, the slot engine's own chatter) and is
/// dropped silently.
pub fn parse_event(event: &MessageEvent) -> Option<GameMessage> {
    let data = event.data();
    if !data.is_object() {
        return None;
    }
    match data.into_serde::<GameMessage>() {
        Ok(message) if message.is_well_formed() => Some(message),
        Ok(_) => {
            log::debug!("dropping frame message with non-finite amount");
            None
        }
        Err(_) => None,
    }
}
