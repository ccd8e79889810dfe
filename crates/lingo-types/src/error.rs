use thiserror::Error;

/// Errors surfaced by the Lingo client.
///
/// Every variant is returned to the caller as soon as it occurs. The client
/// never retries or masks an upstream failure.
#[derive(Debug, Error)]
pub enum LingoError {
    #[error("login failed")]
    AuthenticationFailed,

    #[error("could not fetch {0}")]
    FetchFailed(String),

    #[error("failed to switch language to '{0}'")]
    SwitchFailed(String),

    #[error("homepage layout changed: {0}")]
    ParseFailed(String),

    #[error("purchase rejected: {0}")]
    PurchaseFailed(String),

    #[error("language '{0}' not found")]
    LanguageNotFound(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from the HTTP session port (implemented in lingo-infra).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("could not read response body from {url}: {message}")]
    Body { url: String, message: String },
}

impl From<SessionError> for LingoError {
    fn from(err: SessionError) -> Self {
        LingoError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lingo_error_display() {
        let err = LingoError::SwitchFailed("fr".to_string());
        assert_eq!(err.to_string(), "failed to switch language to 'fr'");
    }

    #[test]
    fn test_parse_failed_is_distinct_from_transport() {
        let parse = LingoError::ParseFailed("voice table missing".to_string());
        let transport: LingoError = SessionError::Request {
            url: "https://example.test".to_string(),
            message: "connection refused".to_string(),
        }
        .into();

        assert!(matches!(parse, LingoError::ParseFailed(_)));
        assert!(matches!(transport, LingoError::Transport(_)));
        assert!(transport.to_string().contains("connection refused"));
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::Body {
            url: "https://example.test/users/kartik".to_string(),
            message: "eof".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not read response body from https://example.test/users/kartik: eof"
        );
    }
}
