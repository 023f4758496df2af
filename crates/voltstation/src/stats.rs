use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counters for assistant traffic.
#[derive(Debug)]
pub struct Stats {
    since: DateTime<Utc>,
    ai_requests: AtomicU64,
    answered: AtomicU64,
    unavailable: AtomicU64,
    failed: AtomicU64,
}

/// Point-in-time copy of [`Stats`], suitable for a status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub since: DateTime<Utc>,
    pub ai_requests: u64,
    pub answered: u64,
    pub unavailable: u64,
    pub failed: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            since: Utc::now(),
            ai_requests: AtomicU64::new(0),
            answered: AtomicU64::new(0),
            unavailable: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    pub fn record_request(&self) {
        self.ai_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_answered(&self) {
        self.answered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unavailable(&self) {
        self.unavailable.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            since: self.since,
            ai_requests: self.ai_requests.load(Ordering::Relaxed),
            answered: self.answered.load(Ordering::Relaxed),
            unavailable: self.unavailable.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
