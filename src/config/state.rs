// Application state module
// Shared, read-only state handed to every connection

use super::types::Config;
use crate::handler::StaticAssets;

/// Application state
///
/// Built once at startup and never mutated afterwards, so connections share
/// it through an `Arc` without locking.
pub struct AppState {
    pub config: Config,
    pub assets: StaticAssets,
}

impl AppState {
    pub const fn new(config: Config, assets: StaticAssets) -> Self {
        Self { config, assets }
    }

    /// Whether access log lines should be written
    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
