//! Domain logic for the pending-game screen.
//!
//! This module contains pure functions that implement the readiness and
//! status rules without side effects, making them easy to test. Local UI
//! state goes in and comes back out reducer-style; nothing here touches
//! the store, the transport, or the rendering layer.

use muster_shared::{
    game::{DeckSelection, DeckValidation, GameSummary, PlayerCustomData, PlayerEntry},
    socket::OutboundMessage,
};

use crate::{error::ClientError, store::LobbySnapshot};

/// Local state owned exclusively by the pending-game screen.
///
/// `player_count` is a cached derived value, recomputed by
/// [`apply_snapshot`] on every update; it is never a source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Player count seen in the previous snapshot
    pub player_count: usize,
    /// Current contents of the chat input
    pub message: String,
    /// True between dispatching a start and the next reconnect attempt
    pub waiting: bool,
    /// True until the deck lists have loaded
    pub decks_loading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        // A freshly mounted screen has the local player seated already.
        Self {
            player_count: 1,
            message: String::new(),
            waiting: false,
            decks_loading: true,
        }
    }
}

/// Display status of the pending game, in strict priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// The transport is (re)connecting to the named game host
    Connecting { host: String },
    /// A start was dispatched and the lobby server has not answered yet
    WaitingForLobbyServer,
    /// Fewer than two players are seated
    WaitingForPlayers,
    /// At least one seated player has no resolved deck
    WaitingForDeckSelection,
    /// Everything is ready and the current user owns the game
    ReadyToStart,
    /// Everything is ready but only the owner may start
    WaitingForOwner,
}

/// Trigger for the "second player joined my game" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinAlert {
    /// Name of the seated player other than the current user, when present
    pub other_player: Option<String>,
}

/// How a player's deck cell should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckLabel {
    /// The current user's own deck, by name; clicking reopens selection
    Own(String),
    /// Another player has a deck; its identity is not disclosed
    Selected,
    /// The current user has not picked a deck yet
    SelectPrompt,
    /// Another player has not picked a deck yet
    None,
}

/// Per-player display data for the players panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub name: String,
    pub deck: DeckLabel,
    pub validation: Option<DeckValidation>,
}

/// Extract a player's deck selection from their opaque custom data.
///
/// Missing or unparseable custom data yields `None`; parse failures never
/// propagate.
pub fn player_deck(player: &PlayerEntry) -> Option<DeckSelection> {
    let raw = player.custom_data.as_deref()?;
    let data: PlayerCustomData = serde_json::from_str(raw).ok()?;
    data.deck
}

fn all_players_have_decks(game: &GameSummary) -> bool {
    game.players.values().all(|p| player_deck(p).is_some())
}

/// Whether the current user may start the game.
///
/// True iff a user is present, every seated player has a resolved deck,
/// and the user owns the game. Any missing piece yields false.
pub fn is_game_ready(snapshot: &LobbySnapshot) -> bool {
    let Some(username) = snapshot.username() else {
        return false;
    };
    let Some(game) = snapshot.current_game.as_ref() else {
        return false;
    };

    !game.players.is_empty() && all_players_have_decks(game) && game.owner == username
}

/// Derive the display status of the pending game.
///
/// The priority order is load-bearing: a game with two ready players must
/// still report [`GameStatus::Connecting`] while the transport is down.
pub fn game_status(snapshot: &LobbySnapshot, ui: &UiState) -> GameStatus {
    if snapshot.connecting {
        return GameStatus::Connecting {
            host: snapshot.host.clone(),
        };
    }

    if ui.waiting {
        return GameStatus::WaitingForLobbyServer;
    }

    let Some(game) = snapshot
        .current_game
        .as_ref()
        .filter(|g| g.player_count() >= 2)
    else {
        return GameStatus::WaitingForPlayers;
    };

    if !all_players_have_decks(game) {
        return GameStatus::WaitingForDeckSelection;
    }

    if snapshot.username() == Some(game.owner.as_str()) {
        return GameStatus::ReadyToStart;
    }

    GameStatus::WaitingForOwner
}

/// Fold a fresh snapshot into the local UI state.
///
/// Recomputes the cached player count, clears `waiting` when the transport
/// reports a reconnect attempt, and emits a [`JoinAlert`] exactly on the
/// "my game just got its second player" transition: previous count 1, new
/// count 2, and the snapshot's owner is the current user. No other count
/// transition fires the alert.
pub fn apply_snapshot(ui: UiState, snapshot: &LobbySnapshot) -> (UiState, Option<JoinAlert>) {
    let Some(username) = snapshot.username() else {
        // Without a user there is nothing to derive; leave state untouched.
        return (ui, None);
    };

    let game = snapshot.current_game.as_ref();
    let players = game.map(|g| g.player_count()).unwrap_or(0);

    let alert = match game {
        Some(game)
            if ui.player_count == 1 && players == 2 && game.owner == username =>
        {
            Some(JoinAlert {
                other_player: game
                    .players
                    .values()
                    .find(|p| p.name != username)
                    .map(|p| p.name.clone()),
            })
        }
        _ => None,
    };

    let mut next = ui;
    if snapshot.connecting {
        // A reconnect attempt cancels any pending start wait.
        next.waiting = false;
    }
    next.player_count = players;

    (next, alert)
}

/// Whether the start action must be withheld.
pub fn start_disabled(snapshot: &LobbySnapshot, ui: &UiState) -> bool {
    !is_game_ready(snapshot) || snapshot.connecting || ui.waiting
}

/// Turn the chat input into an outbound message.
///
/// An empty input is a no-op; otherwise the text is emitted as a chat
/// message and the input is cleared.
pub fn compose_chat(ui: UiState) -> (UiState, Option<OutboundMessage>) {
    if ui.message.is_empty() {
        return (ui, None);
    }

    let mut next = ui;
    let text = std::mem::take(&mut next.message);

    (next, Some(OutboundMessage::Chat { text }))
}

/// Build the display row for one seated player.
///
/// A deck id that is missing from both known-deck lists is a
/// data-consistency breach between the store's `players` and `decks`
/// collections and fails the render path.
pub fn player_row(player: &PlayerEntry, snapshot: &LobbySnapshot) -> Result<PlayerRow, ClientError> {
    let is_me = snapshot.username() == Some(player.name.as_str());

    let (deck, validation) = match player_deck(player) {
        Some(selection) => {
            let label = if is_me {
                let name = snapshot
                    .decks
                    .iter()
                    .chain(snapshot.standalone_decks.iter())
                    .find(|d| d.id == selection.id)
                    .map(|d| d.name.clone())
                    .ok_or_else(|| ClientError::UnknownDeck(selection.id.clone()))?;
                DeckLabel::Own(name)
            } else {
                DeckLabel::Selected
            };
            (label, Some(selection.validation_result))
        }
        None if is_me => (DeckLabel::SelectPrompt, None),
        None => (DeckLabel::None, None),
    };

    Ok(PlayerRow {
        name: player.name.clone(),
        deck,
        validation,
    })
}

/// Build display rows for every seated player, sorted by name for
/// consistent ordering.
pub fn player_rows(snapshot: &LobbySnapshot) -> Result<Vec<PlayerRow>, ClientError> {
    let Some(game) = snapshot.current_game.as_ref() else {
        return Ok(vec![]);
    };

    let mut players: Vec<&PlayerEntry> = game.players.values().collect();
    players.sort_by(|a, b| a.name.cmp(&b.name));

    players.iter().map(|p| player_row(p, snapshot)).collect()
}
