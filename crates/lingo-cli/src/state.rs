//! Client wiring for the CLI.
//!
//! Pins the generic [`LingoClient`] to the reqwest-backed session and
//! resolves username, password, and configuration before connecting.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use secrecy::SecretString;

use lingo_core::client::LingoClient;
use lingo_core::endpoints::Endpoints;
use lingo_infra::config::{load_client_config, resolve_data_dir, resolve_username};
use lingo_infra::credentials::{PASSWORD_ENV, password_from_env};
use lingo_infra::http::ReqwestSession;

/// Concrete client type used by every command.
pub type ConcreteClient = LingoClient<ReqwestSession>;

pub struct AppState {
    pub client: ConcreteClient,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load configuration, build the session, and fetch the profile.
    pub async fn init(user: Option<String>, login: bool) -> Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_client_config(&data_dir).await;

        let Some(username) = resolve_username(&config, user) else {
            bail!("no account given: pass --user or set `username` in {}/config.toml", data_dir.display());
        };

        let password = if login { Some(resolve_password()?) } else { None };

        let session = ReqwestSession::new(&config).context("Failed to build HTTP session")?;
        let client = LingoClient::connect(
            session,
            Endpoints::from_config(&config),
            username.clone(),
            password.as_ref(),
        )
        .await
        .with_context(|| format!("Failed to load profile for '{username}'"))?;

        Ok(Self { client, data_dir })
    }
}

/// `LINGO_PASSWORD`, else an interactive prompt.
fn resolve_password() -> Result<SecretString> {
    if let Some(password) = password_from_env(PASSWORD_ENV) {
        return Ok(password);
    }

    let entered = dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .context("Failed to read password")?;
    Ok(SecretString::from(entered))
}
