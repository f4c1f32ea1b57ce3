//! Notification seam for join alerts.
//!
//! The decision to alert is made by pure domain logic; this trait is the
//! capability the rendering layer hands in to actually play the sound and
//! raise the desktop notification. Both calls are fire-and-forget.

/// Sink for the "a player joined your game" alert.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    /// Play the join sound effect
    fn play_join_sound(&self);

    /// Raise a desktop notification
    fn show(&self, title: &str, body: &str);
}

/// A sink that drops every notification, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotificationSink;

impl NotificationSink for NullNotificationSink {
    fn play_join_sound(&self) {}

    fn show(&self, _title: &str, _body: &str) {}
}
