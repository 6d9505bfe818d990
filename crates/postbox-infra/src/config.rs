//! Configuration loader.
//!
//! Reads `config.toml` from the given directory and deserializes it into
//! [`ServiceConfig`], falling back to defaults when the file is missing or
//! malformed. Environment variables override the store settings afterward,
//! so deployments can point at a different store without editing the file.

use std::path::Path;

use postbox_types::config::ServiceConfig;

/// Env var overriding the store connection URI.
pub const ENV_STORE_URI: &str = "POSTBOX_STORE_URI";

/// Env var overriding the store database name.
pub const ENV_STORE_DB: &str = "POSTBOX_STORE_DB";

/// Load configuration from `{config_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
/// - Afterward, `POSTBOX_STORE_URI` / `POSTBOX_STORE_DB` override the
///   store section when set.
pub async fn load_config(config_dir: &Path) -> ServiceConfig {
    let config_path = config_dir.join("config.toml");

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => match toml::from_str::<ServiceConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    "Failed to parse {}: {err}, using defaults",
                    config_path.display()
                );
                ServiceConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    };

    if let Ok(uri) = std::env::var(ENV_STORE_URI) {
        config.store.uri = uri;
    }
    if let Ok(database) = std::env::var(ENV_STORE_DB) {
        config.store.database = database;
    }

    config
}
