//! Transaction validity window

use crate::error::Precondition;
use serde::{Deserialize, Serialize};

/// `[min_time, max_time]` in Unix seconds. A `max_time` of zero leaves the
/// window open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeBounds {
    pub min_time: i64,
    pub max_time: i64,
}

impl TimeBounds {
    pub fn new(min_time: i64, max_time: i64) -> Self {
        Self { min_time, max_time }
    }

    /// Window starting at `now` and expiring `timeout` seconds later; a zero
    /// timeout yields an unbounded window.
    pub fn from_timeout(now: i64, timeout: i64) -> Self {
        Self {
            min_time: now,
            max_time: expiry(now, timeout),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_time == 0
    }

    /// Check the window against the clock reading taken at build time.
    pub fn validate(&self, now: i64) -> Result<(), Precondition> {
        if self.min_time < 0 || self.max_time < 0 {
            return Err(Precondition::NonIntegerTimeBounds);
        }
        if self.is_unbounded() {
            return Ok(());
        }
        if self.min_time > self.max_time {
            return Err(Precondition::InvertedTimeBounds);
        }
        if self.max_time < now {
            return Err(Precondition::ExpiredTimeBounds);
        }
        Ok(())
    }
}

/// `max_time` for a relative timeout read at `now`.
pub(crate) fn expiry(now: i64, timeout: i64) -> i64 {
    if timeout == 0 {
        0
    } else {
        now.saturating_add(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_unbounded_window_always_valid() {
        assert_eq!(TimeBounds::new(0, 0).validate(NOW), Ok(()));
        assert_eq!(TimeBounds::new(NOW + 500, 0).validate(NOW), Ok(()));
    }

    #[test]
    fn test_inverted_window() {
        let bounds = TimeBounds::new(NOW + 10, NOW + 5);
        assert_eq!(bounds.validate(NOW), Err(Precondition::InvertedTimeBounds));
    }

    #[test]
    fn test_expired_window() {
        let bounds = TimeBounds::new(0, NOW - 10);
        assert_eq!(bounds.validate(NOW), Err(Precondition::ExpiredTimeBounds));
        // expiring exactly now is still acceptable
        assert_eq!(TimeBounds::new(0, NOW).validate(NOW), Ok(()));
    }

    #[test]
    fn test_negative_bounds() {
        assert_eq!(
            TimeBounds::new(-1, 0).validate(NOW),
            Err(Precondition::NonIntegerTimeBounds)
        );
        assert_eq!(
            TimeBounds::new(0, -5).validate(NOW),
            Err(Precondition::NonIntegerTimeBounds)
        );
    }

    #[test]
    fn test_from_timeout() {
        assert_eq!(TimeBounds::from_timeout(NOW, 600), TimeBounds::new(NOW, NOW + 600));
        assert!(TimeBounds::from_timeout(NOW, 0).is_unbounded());
        assert_eq!(expiry(i64::MAX - 1, 10), i64::MAX);
    }
}
