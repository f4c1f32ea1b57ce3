//! Store snapshot and intent types.
//!
//! The client never owns shared state: the store pushes an immutable
//! [`LobbySnapshot`] on every update, and the client answers with
//! [`Intent`]s dispatched through an [`IntentSink`].

use serde::{Deserialize, Serialize};

use muster_shared::{
    game::{Deck, GameSummary, UserProfile},
    socket::OutboundMessage,
};

/// Everything the store exposes to the pending-game screen for one update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbySnapshot {
    /// The pending game this client is seated in or spectating
    #[serde(default)]
    pub current_game: Option<GameSummary>,
    /// The authenticated user, if any
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// The user's own decks
    #[serde(default)]
    pub decks: Vec<Deck>,
    /// Prebuilt decks available to everyone
    #[serde(default)]
    pub standalone_decks: Vec<Deck>,
    /// True while the transport is (re)connecting to the game host
    #[serde(default)]
    pub connecting: bool,
    /// Address of the game host being connected to
    #[serde(default)]
    pub host: String,
    /// Server-supplied reason the last join attempt failed, surfaced verbatim
    #[serde(default)]
    pub join_fail_reason: Option<String>,
    /// Progress of the deck-list API request
    #[serde(default)]
    pub api: ApiStatus,
}

impl LobbySnapshot {
    /// Username of the authenticated user, if any.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// Progress of an in-flight API request, mirrored from the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: bool,
}

/// A named action dispatched toward the store/transport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Fetch the user's deck list
    LoadDecks,
    /// Fetch the standalone deck list
    LoadStandaloneDecks,
    /// Leave the pending game
    LeaveGame,
    /// Ask the lobby server to start the game with the given id
    StartGame(String),
    /// Push a message through the real-time transport
    SendSocketMessage(OutboundMessage),
    /// Show the zoomed view of a card referenced in chat
    ZoomCard(String),
    /// Redirect the browser to the given path
    Navigate(String),
}

/// Seam toward the store: accepts dispatched intents.
///
/// Dispatch is fire-and-forget; any asynchronous work behind it is the
/// store's business.
pub trait IntentSink {
    fn dispatch(&self, intent: Intent);
}
