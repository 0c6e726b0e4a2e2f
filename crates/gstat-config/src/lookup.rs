use gstat_types::SeasonId;
use serde::{Deserialize, Serialize};

fn default_league() -> u32 {
    39 // Premier League
}

fn default_seasons() -> Vec<SeasonId> {
    vec![2023, 2022, 2021]
}

fn default_min_score() -> f64 {
    0.5
}

/// Player lookup settings: which league to search and which seasons to try.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_league")]
    pub league: u32,
    /// Season candidates, tried newest first until one yields statistics
    #[serde(default = "default_seasons")]
    pub seasons: Vec<SeasonId>,
    /// Candidates ranked below this are treated as no match
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            league: default_league(),
            seasons: default_seasons(),
            min_score: default_min_score(),
        }
    }
}
