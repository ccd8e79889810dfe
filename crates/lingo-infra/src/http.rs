//! ReqwestSession -- concrete [`SessionClient`] backed by `reqwest`.
//!
//! Keeps a cookie store so the session cookie set by `/login` is replayed on
//! every later request. Bodies are fully buffered; the platform's documents
//! are small.

use std::time::Duration;

use tracing::debug;

use lingo_core::session::SessionClient;
use lingo_types::config::ClientConfig;
use lingo_types::error::SessionError;
use lingo_types::session::HttpResponse;

pub struct ReqwestSession {
    client: reqwest::Client,
}

impl ReqwestSession {
    /// Build a session from the configured user agent and timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, SessionError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SessionError::Request {
                url: config.base_url.clone(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }

    async fn buffer(url: &str, response: reqwest::Response) -> Result<HttpResponse, SessionError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| SessionError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!(url, status, bytes = body.len(), "HTTP response");
        Ok(HttpResponse { status, body })
    }
}

fn request_error(url: &str, err: reqwest::Error) -> SessionError {
    SessionError::Request {
        url: url.to_string(),
        message: err.to_string(),
    }
}

impl SessionClient for ReqwestSession {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, SessionError> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;

        Self::buffer(url, response).await
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, SessionError> {
        // Field values may hold the password; only the URL is logged.
        debug!(url, "POST form");
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;

        Self::buffer(url, response).await
    }
}
