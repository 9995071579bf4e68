use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::quota::ledger::{LedgerError, QuotaLedger, QuotaRecord};

#[derive(Debug, Error)]
pub enum QuotaError {
    #[error("daily search quota of {limit} reached")]
    Exhausted { limit: usize },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("quota task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Today's quota usage.
#[derive(Debug, Clone, Serialize)]
pub struct QuotaUsage {
    pub date: NaiveDate,
    pub used: usize,
    pub limit: usize,
    pub remaining: usize,
}

/// Enforces the daily search limit against a ledger.
///
/// Check-then-append runs under one mutex, so two requests in this process can
/// never both take the last slot. Other processes sharing the file are not covered.
pub struct QuotaGuard {
    ledger: Arc<dyn QuotaLedger>,
    daily_limit: usize,
    admit_lock: Mutex<()>,
}

impl QuotaGuard {
    pub fn new(ledger: Arc<dyn QuotaLedger>, daily_limit: usize) -> Self {
        Self {
            ledger,
            daily_limit,
            admit_lock: Mutex::new(()),
        }
    }

    /// Records a search if today's count is below the limit.
    /// Returns the number of searches today including this one.
    pub fn admit(
        &self,
        keyword: &str,
        location: &str,
        now: DateTime<Utc>,
    ) -> Result<usize, QuotaError> {
        let _held = self.admit_lock.lock().map_err(|_| LedgerError::Poisoned)?;

        let used = self.ledger.count(now.date_naive())?;
        if used >= self.daily_limit {
            warn!(used, limit = self.daily_limit, "Daily search quota exhausted");
            return Err(QuotaError::Exhausted {
                limit: self.daily_limit,
            });
        }

        self.ledger
            .append(&QuotaRecord::new(now, keyword, location))?;
        info!(
            "Search {}/{} today: keyword={keyword:?} location={location:?}",
            used + 1,
            self.daily_limit
        );
        Ok(used + 1)
    }

    /// `admit` on the blocking pool, so ledger I/O never stalls a runtime worker.
    pub async fn admit_blocking(
        self: Arc<Self>,
        keyword: String,
        location: String,
        now: DateTime<Utc>,
    ) -> Result<usize, QuotaError> {
        tokio::task::spawn_blocking(move || self.admit(&keyword, &location, now)).await?
    }

    /// `usage` on the blocking pool.
    pub async fn usage_blocking(
        self: Arc<Self>,
        today: NaiveDate,
    ) -> Result<QuotaUsage, QuotaError> {
        tokio::task::spawn_blocking(move || self.usage(today)).await?
    }

    pub fn usage(&self, today: NaiveDate) -> Result<QuotaUsage, QuotaError> {
        let used = self.ledger.count(today)?;
        Ok(QuotaUsage {
            date: today,
            used,
            limit: self.daily_limit,
            remaining: self.daily_limit.saturating_sub(used),
        })
    }
}
