//! Configuration loader for Lingo.
//!
//! Reads `config.toml` from the data directory (`~/.lingo/` by default) and
//! deserializes it into [`ClientConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use lingo_types::config::ClientConfig;

/// Resolve the data directory.
///
/// `LINGO_DATA_DIR` wins, then `~/.lingo`, then `./.lingo`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LINGO_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".lingo");
    }

    PathBuf::from(".lingo")
}

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`ClientConfig::default()`].
/// - Unreadable or unparsable file: a warning, then the default.
/// - Parsed values go through [`sanitize`].
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let path = data_dir.join("config.toml");

    let parsed = match tokio::fs::read_to_string(&path).await {
        Ok(content) => toml::from_str::<ClientConfig>(&content)
            .map_err(|err| format!("parse error: {err}")),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No client config, using defaults");
            return ClientConfig::default();
        }
        Err(err) => Err(format!("read error: {err}")),
    };

    match parsed {
        Ok(config) => sanitize(config),
        Err(reason) => {
            tracing::warn!(path = %path.display(), %reason, "Ignoring client config");
            ClientConfig::default()
        }
    }
}

/// Replace values the client cannot work with by their defaults.
///
/// A zero timeout would fail every request immediately, and empty URLs or
/// usernames mean "not set".
pub fn sanitize(mut config: ClientConfig) -> ClientConfig {
    let defaults = ClientConfig::default();

    if config.timeout_secs == 0 {
        tracing::warn!(default = defaults.timeout_secs, "timeout_secs must be positive");
        config.timeout_secs = defaults.timeout_secs;
    }
    if config.base_url.trim().is_empty() {
        config.base_url = defaults.base_url;
    }
    if config.dictionary_url.trim().is_empty() {
        config.dictionary_url = defaults.dictionary_url;
    }
    if config.username.as_deref().is_some_and(|name| name.trim().is_empty()) {
        config.username = None;
    }
    config
}

/// Pick the account name: the command-line value, else the configured one.
pub fn resolve_username(config: &ClientConfig, cli_username: Option<String>) -> Option<String> {
    cli_username.or_else(|| config.username.clone())
}
