//! Shared data model for the Muster lobby client.
//!
//! This library defines the game-state snapshot types pushed by the lobby
//! server, the outbound socket payloads, and small time/logging utilities
//! used by every package.

pub mod game;
pub mod logger;
pub mod socket;
pub mod time;
