//! Pending-game lobby client for Muster.
//!
//! Derives readiness, status, and notification triggers from game-state
//! snapshots pushed by the store, and dispatches player intents back
//! toward it. All derivation is pure and synchronous; side effects live
//! behind the [`store::IntentSink`] and [`notification::NotificationSink`]
//! seams.

pub mod controller;
pub mod error;
pub mod formatter;
pub mod notification;
pub mod pending;
pub mod store;
