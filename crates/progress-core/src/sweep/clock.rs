//! Fixed-offset day-boundary clock for the daily sweep reset.
//!
//! The reset day is anchored to UTC+9 regardless of the host timezone, so
//! two clients on opposite sides of the planet agree on when "today"
//! flips. The current time is always supplied by the caller; this type
//! only does the offset arithmetic.

use chrono::{DateTime, FixedOffset};

/// Day-stamp calculator with an explicit UTC offset.
#[derive(Clone, Copy, Debug)]
pub struct ResetClock {
    offset: FixedOffset,
}

impl ResetClock {
    /// Seconds east of UTC for the canonical reset timezone (UTC+9).
    pub const RESET_OFFSET_SECS: i32 = 9 * 3_600;

    /// Clock anchored to the canonical UTC+9 reset boundary.
    pub fn standard() -> Self {
        // The offset is a compile-time-valid constant.
        Self {
            offset: FixedOffset::east_opt(Self::RESET_OFFSET_SECS).unwrap(),
        }
    }

    /// Clock with a custom offset, for tests that simulate boundaries.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// `YYYY-MM-DD` stamp of the reset day containing `now_ms`.
    pub fn day_stamp(&self, now_ms: i64) -> String {
        let utc = DateTime::from_timestamp_millis(now_ms).unwrap_or(DateTime::UNIX_EPOCH);
        utc.with_timezone(&self.offset).format("%Y-%m-%d").to_string()
    }
}

impl Default for ResetClock {
    fn default() -> Self {
        Self::standard()
    }
}
