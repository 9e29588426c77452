//! One-shot introductory display timer.
//!
//! Lives beside the navigator, not inside it: the splash expires on its own
//! and never changes which day is selected.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Splash {
    started: Instant,
    duration: Duration,
}

impl Splash {
    /// Start the timer now.
    pub fn new(duration: Duration) -> Self {
        Self::starting_at(Instant::now(), duration)
    }

    pub fn starting_at(started: Instant, duration: Duration) -> Self {
        Self { started, duration }
    }

    pub fn from_millis(duration_ms: u64) -> Self {
        Self::new(Duration::from_millis(duration_ms))
    }

    /// A splash that is already over.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.started))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_until_duration_elapses() {
        let start = Instant::now();
        let splash = Splash::starting_at(start, Duration::from_millis(2000));

        assert!(splash.is_visible_at(start));
        assert!(splash.is_visible_at(start + Duration::from_millis(1999)));
        assert!(!splash.is_visible_at(start + Duration::from_millis(2000)));
        assert!(!splash.is_visible_at(start + Duration::from_secs(60)));
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let splash = Splash::starting_at(start, Duration::from_millis(2000));

        assert_eq!(
            splash.remaining_at(start + Duration::from_millis(500)),
            Duration::from_millis(1500)
        );
        assert_eq!(
            splash.remaining_at(start + Duration::from_secs(5)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_disabled_is_never_visible() {
        assert!(!Splash::disabled().is_visible());
        assert!(!Splash::from_millis(0).is_visible());
    }
}
