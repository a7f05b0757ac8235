use std::{collections::BTreeSet, convert::TryFrom, fmt};

use serde_json::{Map, Value};

use super::errors::{Error, Result};

/// Largest `first` argument the hosted subgraph accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Number of records requested per page, validated to `1..=1000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageSize(u32);

impl PageSize {
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 || value > MAX_PAGE_SIZE {
            return Err(Error::InvalidConfig {
                field: "page_size",
                why: "must be within 1..=1000",
            });
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(MAX_PAGE_SIZE)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        PageSize::new(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lower bound of a swap-history walk, in positive unix seconds.
///
/// Seeds the timestamp watermark; each later page starts from the highest
/// swap timestamp seen so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(unix_seconds: i64) -> Result<Self> {
        if unix_seconds <= 0 {
            return Err(Error::InvalidConfig {
                field: "timestamp",
                why: "must be positive unix seconds",
            });
        }
        Ok(Self(unix_seconds))
    }

    /// Value sent as the first `timestamp_start` of the walk.
    pub fn into_unix(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Timestamp::new(value)
    }
}

/// Named GraphQL variables sent alongside a query template.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables(Map<String, Value>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.with("id", id)
    }

    pub fn first(self, page_size: PageSize) -> Self {
        self.with("first", page_size.get())
    }

    pub fn skip(self, skip: u64) -> Self {
        self.with("skip", skip)
    }

    pub fn date(self, date: i64) -> Self {
        self.with("date", date)
    }

    pub fn timestamp_start(self, timestamp: i64) -> Self {
        self.with("timestamp_start", timestamp)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn names(&self) -> BTreeSet<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
