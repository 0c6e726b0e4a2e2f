use std::sync::Arc;

use gstat_api::PlayerStatsApi;
use gstat_config::Config;
use gstat_quota::QuotaLedger;

/// Everything a request handler needs, shared behind one `Arc`.
pub struct AppState {
    pub config: Config,
    pub api: Arc<dyn PlayerStatsApi>,
    pub quota: QuotaLedger,
}

impl AppState {
    pub fn new(config: Config, api: Arc<dyn PlayerStatsApi>, quota: QuotaLedger) -> Self {
        Self { config, api, quota }
    }
}
