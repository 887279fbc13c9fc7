//! Configuration loader for Concierge.
//!
//! Reads `config.toml` from the data directory (`~/.concierge/` by default)
//! or an explicit path and deserializes it into [`ConciergeConfig`]. Falls
//! back to defaults when the file is missing or malformed.

use std::path::Path;
use std::time::Duration;

use concierge_types::config::ConciergeConfig;

/// Shortest request timeout accepted from configuration.
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Load configuration from `{data_dir}/config.toml`.
pub async fn load_config(data_dir: &Path) -> ConciergeConfig {
    load_config_file(&data_dir.join("config.toml")).await
}

/// Load configuration from an explicit file.
///
/// - If the file does not exist, returns [`ConciergeConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config_file(config_path: &Path) -> ConciergeConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return ConciergeConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ConciergeConfig::default();
        }
    };

    match toml::from_str::<ConciergeConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ConciergeConfig::default()
        }
    }
}

/// Per-request timeout with a floor of one second.
pub fn request_timeout(config: &ConciergeConfig) -> Duration {
    Duration::from_secs(config.request_timeout_secs.max(MIN_REQUEST_TIMEOUT_SECS))
}
