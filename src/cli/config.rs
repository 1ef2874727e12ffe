use std::time::Duration;

use clap::Parser;

/// Flask's default bind address, where the assistant service runs locally.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Parser)]
#[command(name = "jugaad", about = "Chat with the JUGAAD shopping assistant from a terminal")]
pub struct Cli {
    /// Base URL of the assistant service.
    #[arg(long, env = "JUGAAD_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Give up on a request after this many seconds. Unset or 0 waits forever.
    #[arg(long = "timeout-secs", env = "JUGAAD_REQUEST_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Skip the greeting request at start-up.
    #[arg(long)]
    pub no_greeting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub request_timeout: Option<Duration>,
    pub greet: bool,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            api_base: cli.api_base.trim().trim_end_matches('/').to_string(),
            request_timeout: cli.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
            greet: !cli.no_greeting,
        }
    }
}
