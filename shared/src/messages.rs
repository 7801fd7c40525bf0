use serde::{Deserialize, Serialize};

/// Every message exchanged with the embedded slot iframe.
///
/// The wire format is a JSON object whose `type` field selects the variant.
/// Anything that does not deserialize into one of these variants is dropped at
/// the frame boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameMessage {
    /// Game reports an authoritative new balance, optionally flagging that a
    /// spin happened or that part of the delta was a win.
    #[serde(rename = "UPDATE_BALANCE")]
    UpdateBalance {
        balance: f64,
        #[serde(rename = "spinMade", default, skip_serializing_if = "Option::is_none")]
        spin_made: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        win: Option<f64>,
    },
    /// Parent forces the game's internal balance.
    #[serde(rename = "SET_BALANCE")]
    SetBalance { balance: f64 },
    #[serde(rename = "GAME_STARTED")]
    GameStarted,
    #[serde(rename = "GAME_READY")]
    GameReady,
    /// Game asks the parent to surface the win overlay directly.
    #[serde(rename = "SHOW_WIN_MODAL")]
    ShowWinModal { amount: f64 },
    /// Diagnostic ping emitted when the in-frame sync script loads.
    #[serde(rename = "SLOT_SCRIPT_LOADED")]
    SlotScriptLoaded { time: String },
}

impl GameMessage {
    /// The numeric payload of the message, if it carries one.
    pub fn amount(&self) -> Option<f64> {
        match self {
            GameMessage::UpdateBalance { balance, .. } => Some(*balance),
            GameMessage::SetBalance { balance } => Some(*balance),
            GameMessage::ShowWinModal { amount } => Some(*amount),
            _ => None,
        }
    }

    /// A message is usable only if its numeric payload is finite.
    /// JSON itself cannot carry NaN/inf, but the postMessage boundary can.
    pub fn is_well_formed(&self) -> bool {
        self.amount().map_or(true, f64::is_finite)
    }

    /// Parse and validate one inbound message. Returns `None` for anything
    /// that is not a known, well-formed variant.
    pub fn parse(raw: &str) -> Option<GameMessage> {
        let message: GameMessage = match serde_json::from_str(raw) {
            Ok(message) => message,
            Err(err) => {
                log::debug!("dropping unrecognized frame message: {err}");
                return None;
            }
        };
        if !message.is_well_formed() {
            log::debug!("dropping frame message with non-finite amount");
            return None;
        }
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_balance_wire_names() {
        let msg = GameMessage::UpdateBalance {
            balance: 42.5,
            spin_made: Some(true),
            win: None,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"UPDATE_BALANCE\""));
        assert!(json.contains("\"spinMade\":true"));
        assert!(!json.contains("win"));
        assert_eq!(GameMessage::parse(&json), Some(msg));
    }

    #[test]
    fn test_optional_flags_default_to_none() {
        let msg = GameMessage::parse(r#"{"type":"UPDATE_BALANCE","balance":10}"#).unwrap();
        assert_eq!(
            msg,
            GameMessage::UpdateBalance { balance: 10.0, spin_made: None, win: None }
        );
    }

    #[test]
    fn test_handshake_variants() {
        assert_eq!(
            GameMessage::parse(r#"{"type":"GAME_STARTED"}"#),
            Some(GameMessage::GameStarted)
        );
        // the in-frame script sends GAME_READY with an extra `ready` field
        assert_eq!(
            GameMessage::parse(r#"{"type":"GAME_READY","ready":true}"#),
            Some(GameMessage::GameReady)
        );
    }

    #[test]
    fn test_rejects_unknown_and_malformed() {
        assert_eq!(GameMessage::parse(r#"{"type":"NOT_A_THING"}"#), None);
        assert_eq!(GameMessage::parse(r#"{"balance":10}"#), None);
        assert_eq!(GameMessage::parse("42"), None);
        assert_eq!(GameMessage::parse("not json"), None);
        assert_eq!(GameMessage::parse(r#"{"type":"UPDATE_BALANCE"}"#), None);
    }

    #[test]
    fn test_slot_script_loaded_diagnostic() {
        let msg =
            GameMessage::parse(r#"{"type":"SLOT_SCRIPT_LOADED","time":"2024-01-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(
            msg,
            GameMessage::SlotScriptLoaded { time: "2024-01-01T00:00:00Z".to_string() }
        );
        assert!(msg.amount().is_none());
    }
}
