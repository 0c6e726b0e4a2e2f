use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_daily_limit() -> u32 {
    100
}

fn default_file() -> PathBuf {
    PathBuf::from("data/quota.json")
}

/// Daily request budget and where its ledger lives on disk.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct QuotaConfig {
    #[serde(default = "default_daily_limit")]
    pub daily_limit: u32,
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            daily_limit: default_daily_limit(),
            file: default_file(),
        }
    }
}
