use serde::{Deserialize, Serialize};

/// League season identified by its starting year, e.g. 2023 for 2023/24.
pub type SeasonId = u16;

/// One player's statistics for a single season, as shown on the card.
///
/// Every field except the name can be missing from the provider's data;
/// the renderer substitutes a placeholder for `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
    pub appearances: Option<u32>,
    pub goals: Option<u32>,
    pub rating: Option<String>,
    pub season: SeasonId,
}

/// Snapshot of the daily request budget, rendered in the page footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatus {
    pub used: u32,
    pub limit: u32,
}

impl QuotaStatus {
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    pub fn exhausted(&self) -> bool {
        self.used >= self.limit
    }
}
