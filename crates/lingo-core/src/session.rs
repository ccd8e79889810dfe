//! HTTP session port.

use lingo_types::error::SessionError;
use lingo_types::session::HttpResponse;

/// Authenticated HTTP session with cookie persistence.
///
/// Implementations live in lingo-infra (e.g., `ReqwestSession`). Cookies set
/// by one call (notably login) must be sent on every later call.
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait SessionClient: Send + Sync {
    /// GET `url` with the given query pairs appended.
    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> impl std::future::Future<Output = Result<HttpResponse, SessionError>> + Send;

    /// POST `fields` as an `application/x-www-form-urlencoded` body.
    fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> impl std::future::Future<Output = Result<HttpResponse, SessionError>> + Send;
}
