mod client;
mod model;

pub use client::ApiFootballClient;
pub use model::PlayerHit;

use async_trait::async_trait;
use gstat_types::{PlayerCard, SeasonId};

/// Sports statistics provider interface.
///
/// Both operations are one outbound HTTP call each; the caller is expected
/// to hold a quota reservation for every invocation.
#[async_trait]
pub trait PlayerStatsApi: Send + Sync {
    /// Search a league season's players by (normalized) name.
    async fn search_players(
        &self,
        name: &str,
        league: u32,
        season: SeasonId,
    ) -> Result<Vec<PlayerHit>, ApiError>;

    /// One player's statistics for one league season. `Ok(None)` when the
    /// provider has no entries for that season.
    async fn season_statistics(
        &self,
        player_id: u64,
        league: u32,
        season: SeasonId,
    ) -> Result<Option<PlayerCard>, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("provider rate limit exceeded")]
    RateLimited,

    #[error("authentication rejected")]
    Auth,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl ApiError {
    /// True when the request never completed, meaning the reserved quota
    /// slot should be refunded. Anything the provider answered, even with
    /// an error status or undecodable body, stays counted.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
