//! Optional TOML configuration of the command line tool

use std::path::Path;

use busnet_core::RoutingSettings;
use serde::Deserialize;

use crate::AppError;

const DEFAULT_LOG_FILTER: &str = "info";

/// Contents of the config file
///
/// ```toml
/// log_filter = "busnet=debug"
///
/// [routing]
/// bus_wait_time = 6
/// bus_velocity = 40
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Used when the input document has no `routing_settings`
    pub routing: Option<RoutingSettings>,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Reads and parses a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config '{}': {}", path.display(), e),
            )
        })?;
        Ok(toml::from_str(&text)?)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
