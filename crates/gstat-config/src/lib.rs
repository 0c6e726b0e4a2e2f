use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::lookup::LookupConfig;
use self::quota::QuotaConfig;

pub mod api;
pub mod lookup;
pub mod quota;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub lookup: LookupConfig,
    pub quota: QuotaConfig,
}

impl Config {
    /// Load the config file named by `GSTAT_CONFIG` (defaults otherwise),
    /// then apply env overrides on top.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match env::var("GSTAT_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Env vars win over file values. The API key has no file default;
    /// `GSTAT_API_KEY` is the expected way to supply it.
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var("GSTAT_API_KEY") {
            self.api.key = key;
        }
        if let Ok(host) = env::var("GSTAT_API_HOST") {
            self.api.host = host;
        }
        if let Ok(file) = env::var("GSTAT_QUOTA_FILE") {
            self.quota.file = file.into();
        }
        if let Some(limit) = env::var("GSTAT_DAILY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.quota.daily_limit = limit;
        }
        if let Some(league) = env::var("GSTAT_LEAGUE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.lookup.league = league;
        }
        if let Ok(seasons) = env::var("GSTAT_SEASONS") {
            let parsed: Vec<_> = seasons
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if !parsed.is_empty() {
                self.lookup.seasons = parsed;
            }
        }
    }
}
