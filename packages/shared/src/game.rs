//! Game-state snapshot types pushed by the lobby server.
//!
//! These are plain data carriers deserialized from the server's JSON
//! payloads. The client never mutates them in place; each update replaces
//! the previous snapshot wholesale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A pending game as the lobby server reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Server-assigned game id, used to key outbound socket messages
    pub id: String,
    /// Display name of the game
    pub name: String,
    /// Username of the player who created the game
    pub owner: String,
    /// Whether the match itself has already begun
    #[serde(default)]
    pub started: bool,
    /// Seated players, keyed by username
    #[serde(default)]
    pub players: HashMap<String, PlayerEntry>,
    /// Spectators in join order
    #[serde(default)]
    pub spectators: Vec<Spectator>,
    /// Lobby chat transcript in arrival order
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl GameSummary {
    /// Number of seated players in this snapshot.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// A seated player within a [`GameSummary`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    /// Player username
    pub name: String,
    /// Opaque per-player JSON payload; may carry a `deck` field once the
    /// player has picked a deck
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
}

/// The structured form of [`PlayerEntry::custom_data`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCustomData {
    #[serde(default)]
    pub deck: Option<DeckSelection>,
}

/// A player's chosen deck, as embedded in their custom data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSelection {
    /// Id into the known-deck list
    pub id: String,
    /// Server-side validation verdict for the chosen deck
    #[serde(default)]
    pub validation_result: DeckValidation,
}

/// Validation status the server attaches to a deck selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckValidation {
    /// Not yet checked by the server
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

/// An entry of the known-deck lists the player can pick from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub name: String,
}

/// A spectator attached to a pending game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spectator {
    pub name: String,
}

/// One line of lobby chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Username of the sender
    pub user: String,
    /// Message body; card references appear as `{{Card Name}}`
    pub message: String,
    /// Unix timestamp in milliseconds, stamped by the server
    #[serde(default)]
    pub time: i64,
}

/// The authenticated user on whose behalf the client acts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_summary_deserializes_server_payload() {
        // Test: a camelCase server payload maps onto GameSummary
        // given:
        let payload = r#"{
            "id": "g1",
            "name": "Friendly match",
            "owner": "alice",
            "started": false,
            "players": {
                "alice": { "name": "alice", "customData": "{\"deck\":{\"id\":\"d1\",\"validationResult\":\"valid\"}}" },
                "bob": { "name": "bob" }
            },
            "spectators": [{ "name": "carol" }],
            "messages": [{ "user": "bob", "message": "hi", "time": 1672498800000 }]
        }"#;

        // when:
        let game: GameSummary = serde_json::from_str(payload).unwrap();

        // then:
        assert_eq!(game.id, "g1");
        assert_eq!(game.owner, "alice");
        assert_eq!(game.player_count(), 2);
        assert!(game.players["bob"].custom_data.is_none());
        assert_eq!(game.spectators.len(), 1);
        assert_eq!(game.messages[0].user, "bob");
    }

    #[test]
    fn test_custom_data_parses_deck_selection() {
        // Test: the opaque custom_data string carries a deck selection
        // given:
        let raw = r#"{"deck":{"id":"d1","validationResult":"invalid"}}"#;

        // when:
        let data: PlayerCustomData = serde_json::from_str(raw).unwrap();

        // then:
        let deck = data.deck.unwrap();
        assert_eq!(deck.id, "d1");
        assert_eq!(deck.validation_result, DeckValidation::Invalid);
    }

    #[test]
    fn test_custom_data_without_deck_field() {
        // Test: custom data with no deck field parses to deck = None
        // given:
        let raw = r#"{}"#;

        // when:
        let data: PlayerCustomData = serde_json::from_str(raw).unwrap();

        // then:
        assert!(data.deck.is_none());
    }

    #[test]
    fn test_validation_result_defaults_to_unvalidated() {
        // Test: a deck selection without validationResult is Unvalidated
        // given:
        let raw = r#"{"id":"d9"}"#;

        // when:
        let deck: DeckSelection = serde_json::from_str(raw).unwrap();

        // then:
        assert_eq!(deck.validation_result, DeckValidation::Unvalidated);
    }
}
