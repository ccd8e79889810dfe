//! Raw HTTP exchange types shared by the session port and its implementations.

use serde::de::DeserializeOwned;

/// A fully buffered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[test]
    fn json_decodes_body() {
        let resp = HttpResponse::new(200, r#"{"response": "OK"}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["response"], "OK");
    }

    #[test]
    fn json_rejects_html() {
        let resp = HttpResponse::new(200, "<html></html>");
        assert!(resp.json::<serde_json::Value>().is_err());
    }
}
