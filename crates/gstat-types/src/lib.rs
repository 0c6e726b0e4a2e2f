mod types;

pub use types::{PlayerCard, QuotaStatus, SeasonId};
