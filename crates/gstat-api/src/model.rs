use gstat_types::{PlayerCard, SeasonId};
use serde::Deserialize;

/// One row from the player search, enough to resolve a name to an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHit {
    pub id: u64,
    pub name: String,
}

/// Provider envelope; every `/players` answer wraps a `response` array.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub response: Vec<PlayerEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerEntry {
    pub player: PlayerInfo,
    #[serde(default)]
    pub statistics: Vec<StatisticsBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerInfo {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatisticsBlock {
    pub team: Option<TeamInfo>,
    pub games: Option<GamesInfo>,
    pub goals: Option<GoalsInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamInfo {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GamesInfo {
    pub position: Option<String>,
    /// The provider spells it this way on the wire
    #[serde(rename = "appearences")]
    pub appearances: Option<u32>,
    pub rating: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoalsInfo {
    pub total: Option<u32>,
}

impl PlayerEntry {
    pub(crate) fn hit(&self) -> PlayerHit {
        PlayerHit {
            id: self.player.id,
            name: self.player.name.clone(),
        }
    }

    /// Extract the card from the first statistics block. `None` when the
    /// provider sent no statistics for the requested season.
    pub(crate) fn into_card(self, season: SeasonId) -> Option<PlayerCard> {
        let stats = self.statistics.into_iter().next()?;
        let games = stats.games.unwrap_or_default();

        Some(PlayerCard {
            name: self.player.name,
            team: stats.team.and_then(|t| t.name),
            position: games.position,
            appearances: games.appearances,
            goals: stats.goals.and_then(|g| g.total),
            rating: games.rating,
            season,
        })
    }
}
