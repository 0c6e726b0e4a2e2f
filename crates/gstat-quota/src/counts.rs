use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-date call counts, the on-disk shape of the ledger file: a JSON
/// object mapping UTC `YYYY-MM-DD` keys to the calls made that day.
/// One entry per date; a date not present counts as zero. Old dates are
/// kept as they are.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyCounts(BTreeMap<NaiveDate, u32>);

impl DailyCounts {
    pub fn count_on(&self, date: NaiveDate) -> u32 {
        self.0.get(&date).copied().unwrap_or(0)
    }

    /// Returns the new count for `date`.
    pub fn increment(&mut self, date: NaiveDate) -> u32 {
        let count = self.0.entry(date).or_insert(0);
        *count += 1;
        *count
    }

    /// Refund one call on `date`. Saturates at zero.
    pub fn decrement(&mut self, date: NaiveDate) {
        if let Some(count) = self.0.get_mut(&date) {
            *count = count.saturating_sub(1);
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
