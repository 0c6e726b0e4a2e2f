mod counts;
mod ledger;

pub use counts::DailyCounts;
pub use ledger::{QuotaError, QuotaLedger, Reservation, today_utc};
