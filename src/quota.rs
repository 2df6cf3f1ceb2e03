use crate::errors::StorageError;
use crate::models::QuotaRecord;
use crate::storage::KeyValueStore;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

pub const MAX_REQUESTS_PER_DAY: u32 = 5;
pub const QUOTA_KEY: &str = "requests";

/// Daily request counter persisted under [`QUOTA_KEY`].
///
/// Enforcement is local to whatever shares the store: two processes pointed at
/// the same file can each read a stale count and overshoot the cap.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn KeyValueStore>,
    max: u32,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            max: MAX_REQUESTS_PER_DAY,
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max
    }

    pub fn can_make_request(&self) -> bool {
        self.can_make_request_on(today())
    }

    pub fn can_make_request_on(&self, today: NaiveDate) -> bool {
        self.requests_used_on(today) < self.max
    }

    pub fn remaining_requests(&self) -> u32 {
        self.remaining_requests_on(today())
    }

    pub fn remaining_requests_on(&self, today: NaiveDate) -> u32 {
        self.max.saturating_sub(self.requests_used_on(today))
    }

    pub fn requests_used(&self) -> u32 {
        self.requests_used_on(today())
    }

    pub fn requests_used_on(&self, today: NaiveDate) -> u32 {
        match self.load() {
            Some(record) if record.date == date_key(today) => record.count,
            _ => 0,
        }
    }

    pub fn increment_request_count(&self) -> Result<u32, StorageError> {
        self.increment_request_count_on(today())
    }

    pub fn increment_request_count_on(&self, today: NaiveDate) -> Result<u32, StorageError> {
        let key = date_key(today);
        let mut record = match self.load() {
            Some(record) if record.date == key => record,
            _ => QuotaRecord { date: key, count: 0 },
        };
        record.count = record.count.saturating_add(1);

        self.store.set(QUOTA_KEY, serde_json::to_string(&record)?)?;
        Ok(record.count)
    }

    /// Missing or unparseable records read as no usage.
    fn load(&self) -> Option<QuotaRecord> {
        let raw = self.store.get(QUOTA_KEY)?;
        serde_json::from_str(&raw).ok()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
