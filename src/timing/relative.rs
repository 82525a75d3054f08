use std::fmt;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bucket {
    SecondsAgo,
    MinutesAgo,
    HoursAgo,
    DaysAgo,
    MonthsAgo,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::SecondsAgo,
        Bucket::MinutesAgo,
        Bucket::HoursAgo,
        Bucket::DaysAgo,
        Bucket::MonthsAgo,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Bucket::SecondsAgo => "seconds_ago",
            Bucket::MinutesAgo => "minutes_ago",
            Bucket::HoursAgo => "hours_ago",
            Bucket::DaysAgo => "days_ago",
            Bucket::MonthsAgo => "months_ago",
        }
    }

    /// Catalog key for this bucket, e.g. `meta.timing.hours_ago`.
    pub fn translation_key(self) -> String {
        format!("meta.timing.{}", self.key())
    }

    fn unit(self) -> i64 {
        match self {
            Bucket::SecondsAgo => 1,
            Bucket::MinutesAgo => MINUTE,
            Bucket::HoursAgo => HOUR,
            Bucket::DaysAgo => DAY,
            Bucket::MonthsAgo => MONTH,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Elapsed time reduced to a phrase bucket and the number to show in it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RelativeTime {
    pub bucket: Bucket,
    pub magnitude: u64,
}

/// Bucket the time elapsed between `timestamp` and `now` (both Unix seconds).
///
/// A month is 30 days. Timestamps in the future are clamped to "0 seconds
/// ago" rather than producing a negative magnitude.
pub fn relative_time(timestamp: i64, now: i64) -> RelativeTime {
    let diff = now.saturating_sub(timestamp).max(0);

    let bucket = match diff {
        d if d < MINUTE => Bucket::SecondsAgo,
        d if d < HOUR => Bucket::MinutesAgo,
        d if d < DAY => Bucket::HoursAgo,
        d if d < MONTH => Bucket::DaysAgo,
        _ => Bucket::MonthsAgo,
    };

    RelativeTime {
        bucket,
        magnitude: (diff / bucket.unit()) as u64,
    }
}
