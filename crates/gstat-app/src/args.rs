use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gstat", version, about = "Single-page football player statistics")]
pub struct Args {
    /// Port the page is served on
    #[arg(long, env = "GSTAT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Quota ledger file, overriding the configured path
    #[arg(long)]
    pub quota_file: Option<PathBuf>,
}
