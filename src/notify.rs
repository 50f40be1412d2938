/// Transient user-facing notifications
///
/// One banner at a time, auto-hidden after a fixed delay. The timer itself
/// runs as an async task owned by the UI loop; the notifier only tracks which
/// generation of message is current, so a timer that fires for a message that
/// has since been replaced does nothing. Showing a new message therefore
/// always gets its full three seconds on screen.

use std::time::Duration;

/// How long a notice stays visible before auto-hiding.
pub const AUTO_HIDE: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub struct Notifier {
    message: Option<String>,
    generation: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message and invalidate any pending auto-hide for earlier ones.
    ///
    /// Returns the generation the caller must hand back through [`expire`]
    /// when its timer fires.
    ///
    /// [`expire`]: Notifier::expire
    pub fn show(&mut self, message: String) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.generation
    }

    /// Hide the banner. Idempotent.
    pub fn hide(&mut self) {
        self.message = None;
    }

    /// Auto-hide callback: hides only while `generation` is still current.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.hide();
        }
    }

    /// The currently visible message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut notifier = Notifier::new();
        let generation = notifier.show("something went wrong".to_string());
        assert_eq!(notifier.message(), Some("something went wrong"));

        notifier.expire(generation);
        assert_eq!(notifier.message(), None);
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_message() {
        let mut notifier = Notifier::new();
        let first = notifier.show("first".to_string());
        let _second = notifier.show("second".to_string());

        // The first message's timer fires after the second was shown
        notifier.expire(first);
        assert_eq!(notifier.message(), Some("second"));
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut notifier = Notifier::new();
        notifier.show("oops".to_string());
        notifier.hide();
        notifier.hide();
        assert_eq!(notifier.message(), None);
    }

    #[test]
    fn test_expire_after_manual_hide_is_harmless() {
        let mut notifier = Notifier::new();
        let generation = notifier.show("oops".to_string());
        notifier.hide();
        notifier.expire(generation);
        assert_eq!(notifier.message(), None);
    }
}
