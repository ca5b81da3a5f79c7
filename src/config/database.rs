use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Time and log every data-access operation at INFO level.
    /// Must stay `false` in production.
    #[serde(default = "default_log_queries")]
    pub log_queries: bool,
}

impl DatabaseConfig {
    /// Never fails. Enabling query logging in a release build only warns.
    pub fn validate(&self) -> Result<()> {
        if self.log_queries && !cfg!(debug_assertions) {
            warn!("log_queries is enabled in a release build, every query will be timed and logged");
        }
        Ok(())
    }
}

fn default_log_queries() -> bool {
    false
}
