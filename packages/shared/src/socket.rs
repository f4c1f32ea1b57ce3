//! Outbound socket payloads.
//!
//! The transport speaks `(kind, args...)` tuples; the kinds are opaque
//! string tags as far as this client is concerned. Modeling them as an enum
//! keeps every send site exhaustive and testable.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A message the client pushes through the real-time transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum OutboundMessage {
    /// Attach a deck to the current player's seat in a game
    #[serde(rename = "selectdeck")]
    SelectDeck { game_id: String, deck_id: String },
    /// Post a line of lobby chat
    #[serde(rename = "chat")]
    Chat { text: String },
}

impl OutboundMessage {
    /// The wire tag the transport expects as the first tuple element.
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::SelectDeck { .. } => "selectdeck",
            OutboundMessage::Chat { .. } => "chat",
        }
    }

    /// The positional arguments following the tag.
    pub fn args(&self) -> Vec<Value> {
        match self {
            OutboundMessage::SelectDeck { game_id, deck_id } => {
                vec![json!(game_id), json!(deck_id)]
            }
            OutboundMessage::Chat { text } => vec![json!(text)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_deck_wire_shape() {
        // Test: selectdeck carries (game_id, deck_id) after its tag
        // given:
        let msg = OutboundMessage::SelectDeck {
            game_id: "g1".to_string(),
            deck_id: "d7".to_string(),
        };

        // when / then:
        assert_eq!(msg.kind(), "selectdeck");
        assert_eq!(msg.args(), vec![json!("g1"), json!("d7")]);
    }

    #[test]
    fn test_chat_wire_shape() {
        // Test: chat carries the message text as its only argument
        // given:
        let msg = OutboundMessage::Chat {
            text: "hello".to_string(),
        };

        // when / then:
        assert_eq!(msg.kind(), "chat");
        assert_eq!(msg.args(), vec![json!("hello")]);
    }
}
