use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "api-football-v1.p.rapidapi.com".to_string()
}

fn default_base_url() -> String {
    "https://api-football-v1.p.rapidapi.com/v3".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// API-Football (RapidAPI) connection settings.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// RapidAPI key, usually supplied via `GSTAT_API_KEY`
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fixed per-call HTTP timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            host: default_host(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
