//! Error types for the pending-game lobby client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// A player's selected deck id is missing from the known-deck list.
    ///
    /// This is a data-consistency breach between the `players` and `decks`
    /// collections of the store, not a recoverable display condition.
    #[error("Deck '{0}' is not in the loaded deck list")]
    UnknownDeck(String),
}
