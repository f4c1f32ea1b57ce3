//! Event glue for the pending-game screen.
//!
//! The controller owns the screen's [`UiState`], folds pushed snapshots
//! into it, and turns user events into [`Intent`]s. All derivation is
//! synchronous; anything asynchronous lives behind the sinks.

use std::sync::Arc;

use muster_shared::socket::OutboundMessage;

use crate::{
    notification::NotificationSink,
    pending::{self, JoinAlert, UiState},
    store::{Intent, IntentSink, LobbySnapshot},
};

/// Title used for desktop notifications.
const NOTIFICATION_TITLE: &str = "Muster";

/// Which screen the rendering layer should present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The match has started; the game board is loading
    GameInProgress,
    /// No authenticated user; a redirect has been dispatched
    RedirectingToLogin,
    /// The pending-game lobby itself
    Lobby,
}

/// Controller for the pending-game screen.
pub struct PendingGameController {
    ui: UiState,
    intents: Arc<dyn IntentSink>,
    notifications: Arc<dyn NotificationSink>,
}

impl PendingGameController {
    pub fn new(intents: Arc<dyn IntentSink>, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            ui: UiState::default(),
            intents,
            notifications,
        }
    }

    /// The screen's local state, for the rendering layer.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Kick off the deck-list loads. Called once when the screen mounts.
    pub fn mount(&self) {
        tracing::debug!("pending-game screen mounted, loading deck lists");
        self.intents.dispatch(Intent::LoadDecks);
        self.intents.dispatch(Intent::LoadStandaloneDecks);
    }

    /// Decide which screen to present for this snapshot.
    ///
    /// A started game short-circuits to the in-progress screen; a missing
    /// user dispatches a redirect to the login page instead of erroring.
    pub fn screen(&self, snapshot: &LobbySnapshot) -> Screen {
        if snapshot
            .current_game
            .as_ref()
            .is_some_and(|game| game.started)
        {
            return Screen::GameInProgress;
        }

        if snapshot.user.is_none() {
            self.intents.dispatch(Intent::Navigate("/".to_string()));
            return Screen::RedirectingToLogin;
        }

        Screen::Lobby
    }

    /// Fold a pushed snapshot into local state, raising the join alert
    /// when the domain logic calls for it.
    pub fn on_snapshot(&mut self, snapshot: &LobbySnapshot) {
        let (next, alert) = pending::apply_snapshot(self.ui.clone(), snapshot);
        self.ui = next;
        self.ui.decks_loading = snapshot.api.loading;

        if let Some(alert) = alert {
            self.notify_join(alert);
        }
    }

    fn notify_join(&self, alert: JoinAlert) {
        let body = match alert.other_player {
            Some(name) => format!("{} has joined your game", name),
            None => "A player has joined your game".to_string(),
        };

        tracing::info!("{}", body);
        self.notifications.play_join_sound();
        self.notifications.show(NOTIFICATION_TITLE, &body);
    }

    /// Start the game, unless the start action is currently withheld.
    pub fn on_start(&mut self, snapshot: &LobbySnapshot) {
        if pending::start_disabled(snapshot, &self.ui) {
            tracing::warn!("start requested while the start action is disabled");
            return;
        }

        let Some(game) = snapshot.current_game.as_ref() else {
            return;
        };

        self.ui.waiting = true;
        self.intents.dispatch(Intent::StartGame(game.id.clone()));
    }

    /// Leave the pending game.
    pub fn on_leave(&self) {
        self.intents.dispatch(Intent::LeaveGame);
    }

    /// Attach the chosen deck to the current user's seat.
    pub fn on_select_deck(&self, snapshot: &LobbySnapshot, deck_id: &str) {
        let Some(game) = snapshot.current_game.as_ref() else {
            return;
        };

        self.intents
            .dispatch(Intent::SendSocketMessage(OutboundMessage::SelectDeck {
                game_id: game.id.clone(),
                deck_id: deck_id.to_string(),
            }));
    }

    /// Replace the chat input with the given text.
    pub fn on_chat_input(&mut self, text: &str) {
        self.ui.message = text.to_string();
    }

    /// Submit the chat input; empty input is a no-op.
    pub fn on_chat_send(&mut self) {
        let (next, message) = pending::compose_chat(self.ui.clone());
        self.ui = next;

        if let Some(message) = message {
            self.intents.dispatch(Intent::SendSocketMessage(message));
        }
    }

    /// Show the zoomed view of a card hovered in chat.
    pub fn on_card_hover(&self, card: &str) {
        self.intents.dispatch(Intent::ZoomCard(card.to_string()));
    }
}
