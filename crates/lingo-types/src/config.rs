//! Client configuration types.
//!
//! `ClientConfig` represents the optional `config.toml` in the data
//! directory. Every field has a default, so an empty file is valid.

use serde::{Deserialize, Serialize};

/// Connection settings for the learning platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Site root; every endpoint except the dictionary hangs off it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Root of the dictionary hints API.
    #[serde(default = "default_dictionary_url")]
    pub dictionary_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout applied by the HTTP transport.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Account used when none is passed on the command line.
    #[serde(default)]
    pub username: Option<String>,
}

fn default_base_url() -> String {
    "https://www.duolingo.com".to_string()
}

fn default_dictionary_url() -> String {
    "https://d2.duolingo.com/api/1/dictionary/hints".to_string()
}

fn default_user_agent() -> String {
    format!("lingo/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            dictionary_url: default_dictionary_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            username: None,
        }
    }
}
