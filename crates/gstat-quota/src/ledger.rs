use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use gstat_types::QuotaStatus;
use tokio::sync::Mutex;

use crate::counts::DailyCounts;

/// Current UTC calendar date, the key the ledger counts under.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[derive(Debug, thiserror::Error)]
pub enum QuotaError {
    #[error("daily request budget exhausted ({used}/{limit})")]
    Exhausted { used: u32, limit: u32 },

    #[error("failed to persist quota ledger: {0}")]
    Io(#[from] std::io::Error),

    #[error("quota ledger file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Proof that one call was counted; hand it back to [`QuotaLedger::release`]
/// if the call never reached the provider.
#[derive(Debug)]
pub struct Reservation {
    date: NaiveDate,
}

impl Reservation {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Process-wide daily request budget, file-backed.
///
/// Policy is check-then-reserve-then-call: a call slot is taken (and the
/// file rewritten) before the request goes out, and released only when the
/// request never completed. Responses the provider did receive, including
/// errors and empty data, stay counted. The single lock removes the
/// read-modify-write race a bare counter file would have.
pub struct QuotaLedger {
    path: PathBuf,
    limit: u32,
    counts: Mutex<DailyCounts>,
}

impl QuotaLedger {
    /// Read the ledger file if it exists, otherwise start empty. The parent
    /// directory is created so the first persist cannot fail on a missing
    /// path.
    pub async fn load(path: PathBuf, limit: u32) -> Result<Self, QuotaError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let counts = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DailyCounts::default(),
            Err(e) => return Err(e.into()),
        };

        if !counts.is_empty() {
            tracing::debug!(
                "loaded quota ledger from {} ({} dates)",
                path.display(),
                counts.dates().count()
            );
        }

        Ok(Self {
            path,
            limit,
            counts: Mutex::new(counts),
        })
    }

    /// Take one call slot for today, persisting immediately.
    pub async fn reserve(&self) -> Result<Reservation, QuotaError> {
        self.reserve_on(today_utc()).await
    }

    pub async fn reserve_on(&self, date: NaiveDate) -> Result<Reservation, QuotaError> {
        let mut counts = self.counts.lock().await;

        let used = counts.count_on(date);
        if used >= self.limit {
            return Err(QuotaError::Exhausted {
                used,
                limit: self.limit,
            });
        }

        counts.increment(date);
        if let Err(e) = self.persist(&counts).await {
            counts.decrement(date);
            return Err(e);
        }

        Ok(Reservation { date })
    }

    /// Refund a reservation whose request never completed.
    pub async fn release(&self, reservation: Reservation) -> Result<(), QuotaError> {
        let mut counts = self.counts.lock().await;
        counts.decrement(reservation.date);
        self.persist(&counts).await
    }

    pub async fn status(&self) -> QuotaStatus {
        self.status_on(today_utc()).await
    }

    pub async fn status_on(&self, date: NaiveDate) -> QuotaStatus {
        let counts = self.counts.lock().await;
        QuotaStatus {
            used: counts.count_on(date),
            limit: self.limit,
        }
    }

    async fn persist(&self, counts: &DailyCounts) -> Result<(), QuotaError> {
        let json = serde_json::to_string_pretty(counts)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
