//! Debounce timer for database saves
//!
//! Pure state driven by the caller's clock, so it can be tested without
//! an event loop.

use chrono::{DateTime, Duration, Utc};

/// A single pending save deadline
#[derive(Debug, Clone)]
pub struct SaveTimer {
    delay: Duration,
    deadline: Option<DateTime<Utc>>,
}

impl SaveTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Delays too large to represent saturate at [`Duration::MAX`]
    pub fn from_millis(delay_ms: u64) -> Self {
        let delay = i64::try_from(delay_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX);
        Self::new(delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a save `delay` after `now`.
    ///
    /// Arming an already armed timer keeps the existing deadline, so
    /// changes made while a save is pending ride along with it. A deadline
    /// past the end of representable time is pinned there.
    pub fn arm(&mut self, now: DateTime<Utc>) {
        if self.deadline.is_none() {
            let deadline = now
                .checked_add_signed(self.delay)
                .unwrap_or(DateTime::<Utc>::MAX_UTC);
            self.deadline = Some(deadline);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Disarm and return true if the deadline has passed
    pub fn fire(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
