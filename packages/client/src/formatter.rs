//! Text rendering of the pending-game screen.
//!
//! Turns view-model output into display strings for the render harness.
//! The status strings are part of the screen's contract and must not be
//! reworded casually.

use muster_shared::{
    game::{ChatMessage, DeckValidation, Spectator},
    time::{Clock, timestamp_to_rfc3339},
};

use crate::{
    error::ClientError,
    pending::{self, DeckLabel, GameStatus, PlayerRow, UiState},
    store::LobbySnapshot,
};

const PANEL_RULE: &str = "============================================================";

/// Formatter for the pending-game screen
pub struct LobbyFormatter;

impl LobbyFormatter {
    /// Format the game-status line.
    pub fn format_game_status(status: &GameStatus) -> String {
        match status {
            GameStatus::Connecting { host } => {
                format!("Connecting to game server: {}", host)
            }
            GameStatus::WaitingForLobbyServer => "Waiting for lobby server...".to_string(),
            GameStatus::WaitingForPlayers => "Waiting for players...".to_string(),
            GameStatus::WaitingForDeckSelection => {
                "Waiting for players to select decks".to_string()
            }
            GameStatus::ReadyToStart => {
                "Ready to begin, click start to begin the game".to_string()
            }
            GameStatus::WaitingForOwner => {
                "Ready to begin, waiting for opponent to start the game".to_string()
            }
        }
    }

    /// Format one player's row in the players panel.
    pub fn format_player_row(row: &PlayerRow) -> String {
        let deck = match &row.deck {
            DeckLabel::Own(name) => name.as_str(),
            DeckLabel::Selected => "Deck Selected",
            DeckLabel::SelectPrompt => "Select deck...",
            DeckLabel::None => "No deck selected",
        };

        match row.validation {
            Some(validation) => format!(
                "{} - {} [{}]\n",
                row.name,
                deck,
                Self::format_deck_validation(validation)
            ),
            None => format!("{} - {}\n", row.name, deck),
        }
    }

    /// Format a deck-validation verdict.
    pub fn format_deck_validation(validation: DeckValidation) -> &'static str {
        match validation {
            DeckValidation::Unvalidated => "unvalidated",
            DeckValidation::Valid => "valid",
            DeckValidation::Invalid => "invalid",
        }
    }

    /// Format the players panel.
    pub fn format_players_panel(rows: &[PlayerRow]) -> String {
        let mut output = String::new();
        output.push_str(PANEL_RULE);
        output.push_str("\nPlayers:\n");

        if rows.is_empty() {
            output.push_str("(No players)\n");
        } else {
            for row in rows {
                output.push_str(&Self::format_player_row(row));
            }
        }

        output
    }

    /// Format the spectators panel with its count header.
    pub fn format_spectators_panel(spectators: &[Spectator]) -> String {
        let mut output = String::new();
        output.push_str(PANEL_RULE);
        output.push_str(&format!("\nSpectators({}):\n", spectators.len()));

        for spectator in spectators {
            output.push_str(&format!("{}\n", spectator.name));
        }

        output
    }

    /// Format one line of lobby chat.
    pub fn format_chat_message(message: &ChatMessage) -> String {
        format!(
            "@{}: {} (sent at {})\n",
            message.user,
            message.message,
            timestamp_to_rfc3339(message.time)
        )
    }

    /// Format the join-failure alert line, surfaced verbatim.
    pub fn format_join_fail(reason: &str) -> String {
        format!("ERROR: {}\n", reason)
    }

    /// Format the render-harness footer stamping when the screen was drawn.
    pub fn format_rendered_at(clock: &dyn Clock) -> String {
        format!("rendered at {}\n", timestamp_to_rfc3339(clock.now_millis()))
    }

    /// Format the whole pending-game screen.
    ///
    /// Fails only on a data-consistency breach between the seated players
    /// and the known-deck lists.
    pub fn format_lobby(snapshot: &LobbySnapshot, ui: &UiState) -> Result<String, ClientError> {
        let mut output = String::new();

        let name = snapshot
            .current_game
            .as_ref()
            .map(|g| g.name.as_str())
            .unwrap_or("Pending game");
        output.push_str(PANEL_RULE);
        output.push_str(&format!("\n{}\n", name));

        if let Some(reason) = snapshot.join_fail_reason.as_deref() {
            output.push_str(&Self::format_join_fail(reason));
        }

        let status = pending::game_status(snapshot, ui);
        output.push_str(&format!("{}\n", Self::format_game_status(&status)));

        let rows = pending::player_rows(snapshot)?;
        output.push_str(&Self::format_players_panel(&rows));

        if let Some(game) = snapshot.current_game.as_ref() {
            output.push_str(&Self::format_spectators_panel(&game.spectators));

            output.push_str(PANEL_RULE);
            output.push_str("\nChat:\n");
            for message in &game.messages {
                output.push_str(&Self::format_chat_message(message));
            }
        }

        output.push_str(PANEL_RULE);
        output.push('\n');

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_shared::game::{Deck, GameSummary, PlayerEntry, UserProfile};

    fn ready_snapshot() -> LobbySnapshot {
        let players = vec![
            PlayerEntry {
                name: "alice".to_string(),
                custom_data: Some(
                    r#"{"deck":{"id":"d1","validationResult":"valid"}}"#.to_string(),
                ),
            },
            PlayerEntry {
                name: "bob".to_string(),
                custom_data: Some(
                    r#"{"deck":{"id":"d2","validationResult":"invalid"}}"#.to_string(),
                ),
            },
        ];

        LobbySnapshot {
            current_game: Some(GameSummary {
                id: "g1".to_string(),
                name: "Friendly match".to_string(),
                owner: "alice".to_string(),
                players: players.into_iter().map(|p| (p.name.clone(), p)).collect(),
                spectators: vec![Spectator {
                    name: "carol".to_string(),
                }],
                messages: vec![ChatMessage {
                    user: "bob".to_string(),
                    message: "glhf".to_string(),
                    time: 1672498800000,
                }],
                ..Default::default()
            }),
            user: Some(UserProfile {
                username: "alice".to_string(),
            }),
            decks: vec![
                Deck {
                    id: "d1".to_string(),
                    name: "Wolves".to_string(),
                },
                Deck {
                    id: "d2".to_string(),
                    name: "Lions".to_string(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_game_status_strings() {
        // Test: every status maps to its contractual display string
        // given / when / then:
        assert_eq!(
            LobbyFormatter::format_game_status(&GameStatus::Connecting {
                host: "game1.example.net".to_string()
            }),
            "Connecting to game server: game1.example.net"
        );
        assert_eq!(
            LobbyFormatter::format_game_status(&GameStatus::WaitingForLobbyServer),
            "Waiting for lobby server..."
        );
        assert_eq!(
            LobbyFormatter::format_game_status(&GameStatus::WaitingForPlayers),
            "Waiting for players..."
        );
        assert_eq!(
            LobbyFormatter::format_game_status(&GameStatus::WaitingForDeckSelection),
            "Waiting for players to select decks"
        );
        assert_eq!(
            LobbyFormatter::format_game_status(&GameStatus::ReadyToStart),
            "Ready to begin, click start to begin the game"
        );
        assert_eq!(
            LobbyFormatter::format_game_status(&GameStatus::WaitingForOwner),
            "Ready to begin, waiting for opponent to start the game"
        );
    }

    #[test]
    fn test_format_player_row_variants() {
        // Test: each deck label renders its marker
        // given:
        let own = PlayerRow {
            name: "alice".to_string(),
            deck: DeckLabel::Own("Wolves".to_string()),
            validation: Some(DeckValidation::Valid),
        };
        let other = PlayerRow {
            name: "bob".to_string(),
            deck: DeckLabel::Selected,
            validation: Some(DeckValidation::Unvalidated),
        };
        let prompt = PlayerRow {
            name: "alice".to_string(),
            deck: DeckLabel::SelectPrompt,
            validation: None,
        };

        // when / then:
        assert_eq!(
            LobbyFormatter::format_player_row(&own),
            "alice - Wolves [valid]\n"
        );
        assert_eq!(
            LobbyFormatter::format_player_row(&other),
            "bob - Deck Selected [unvalidated]\n"
        );
        assert_eq!(
            LobbyFormatter::format_player_row(&prompt),
            "alice - Select deck...\n"
        );
    }

    #[test]
    fn test_format_chat_message() {
        // Test: a chat line carries sender, body, and RFC 3339 time
        // given:
        let message = ChatMessage {
            user: "bob".to_string(),
            message: "glhf".to_string(),
            time: 1672498800000,
        };

        // when:
        let result = LobbyFormatter::format_chat_message(&message);

        // then:
        assert!(result.contains("@bob: glhf"));
        assert!(result.contains("2022-12-31"));
    }

    #[test]
    fn test_format_lobby_full_screen() {
        // Test: the full screen carries name, status, players, spectators,
        // and the chat transcript
        // given:
        let snapshot = ready_snapshot();
        let ui = UiState::default();

        // when:
        let screen = LobbyFormatter::format_lobby(&snapshot, &ui).unwrap();

        // then:
        assert!(screen.contains("Friendly match"));
        assert!(screen.contains("Ready to begin, click start to begin the game"));
        assert!(screen.contains("alice - Wolves [valid]"));
        assert!(screen.contains("bob - Deck Selected [invalid]"));
        assert!(screen.contains("Spectators(1):"));
        assert!(screen.contains("carol"));
        assert!(screen.contains("@bob: glhf"));
    }

    #[test]
    fn test_format_rendered_at_with_fixed_clock() {
        // Test: the footer stamp follows the injected clock
        // given:
        let clock = muster_shared::time::FixedClock::new(1672498800000);

        // when:
        let result = LobbyFormatter::format_rendered_at(&clock);

        // then:
        assert_eq!(result, "rendered at 2022-12-31T15:00:00+00:00\n");
    }

    #[test]
    fn test_format_lobby_surfaces_join_failure() {
        // Test: joinFailReason appears verbatim as an alert line
        // given:
        let mut snapshot = ready_snapshot();
        snapshot.join_fail_reason = Some("Game is full".to_string());
        let ui = UiState::default();

        // when:
        let screen = LobbyFormatter::format_lobby(&snapshot, &ui).unwrap();

        // then:
        assert!(screen.contains("ERROR: Game is full"));
    }

    #[test]
    fn test_format_lobby_propagates_unknown_deck() {
        // Test: the consistency breach surfaces instead of rendering
        // given:
        let mut snapshot = ready_snapshot();
        snapshot.decks.clear();
        snapshot.standalone_decks.clear();
        let ui = UiState::default();

        // when:
        let result = LobbyFormatter::format_lobby(&snapshot, &ui);

        // then:
        assert_eq!(result, Err(ClientError::UnknownDeck("d1".to_string())));
    }
}
