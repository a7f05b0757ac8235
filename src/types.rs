use std::{fmt, num::NonZeroU32};

use chrono::DateTime;
use time::{Duration, OffsetDateTime};

use crate::subgraph_client::{Error, Result};

/// Number of buckets a look-back window is split into for band calculation.
pub const BAND_BUCKETS: u32 = 20;

/// Look-back window in whole hours, strictly positive.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookbackHours(NonZeroU32);

impl LookbackHours {
    pub fn new(hours: NonZeroU32) -> Self {
        Self(hours)
    }

    pub fn from_u32(hours: u32) -> Option<Self> {
        NonZeroU32::new(hours).map(Self)
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Width of one resampling bucket, `H / 20` hours.
    pub fn interval_hours(self) -> f64 {
        f64::from(self.get()) / f64::from(BAND_BUCKETS)
    }

    /// Bucket width in seconds. Exact, since `3600 / 20` is integral.
    pub fn bucket_width_seconds(self) -> i64 {
        i64::from(self.get()) * (3600 / i64::from(BAND_BUCKETS))
    }

    /// Unix timestamp `H` hours before `now`.
    pub fn start_before(self, now: OffsetDateTime) -> i64 {
        (now - Duration::hours(i64::from(self.get()))).unix_timestamp()
    }
}

impl TryFrom<u32> for LookbackHours {
    type Error = &'static str;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        LookbackHours::from_u32(value).ok_or("look-back window must be non-zero")
    }
}

impl fmt::Display for LookbackHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.get())
    }
}

/// Renders unix seconds as a naive UTC ISO-8601 date-time, e.g. `2021-05-05T00:00:00`.
pub fn timestamp_to_date(timestamp: i64) -> Result<String> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string())
        .ok_or_else(|| Error::schema("timestamp", format!("{timestamp} is out of range")))
}
