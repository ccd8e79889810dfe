//! URL construction for every remote endpoint the client touches.

use lingo_types::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    dictionary_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>, dictionary_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            dictionary_url: dictionary_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url, &config.dictionary_url)
    }

    pub fn homepage(&self) -> &str {
        &self.base_url
    }

    pub fn login(&self) -> String {
        format!("{}/login", self.base_url)
    }

    pub fn user(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, username)
    }

    pub fn activity(&self, user_id: u64) -> String {
        format!("{}/activity/{}", self.base_url, user_id)
    }

    /// Paged activity stream; the `before` cursor goes in the query.
    pub fn stream(&self, user_id: u64) -> String {
        format!("{}/stream/{}", self.base_url, user_id)
    }

    pub fn switch_language(&self) -> String {
        format!("{}/switch_language", self.base_url)
    }

    pub fn store_purchase(&self) -> String {
        format!("{}/store/purchase_item", self.base_url)
    }

    pub fn vocabulary_overview(&self) -> String {
        format!("{}/vocabulary/overview", self.base_url)
    }

    /// Hints translating words of `target` (the learned language) into
    /// `source` (the UI language).
    pub fn dictionary_hints(&self, target: &str, source: &str) -> String {
        format!("{}/{}/{}", self.dictionary_url, target, source)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_point_at_platform() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.login(), "https://www.duolingo.com/login");
        assert_eq!(
            endpoints.user("kartik"),
            "https://www.duolingo.com/users/kartik"
        );
        assert_eq!(
            endpoints.dictionary_hints("fr", "en"),
            "https://d2.duolingo.com/api/1/dictionary/hints/fr/en"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let endpoints = Endpoints::new("http://localhost:9000/", "http://localhost:9001/hints/");
        assert_eq!(endpoints.homepage(), "http://localhost:9000");
        assert_eq!(endpoints.activity(7), "http://localhost:9000/activity/7");
        assert_eq!(endpoints.stream(7), "http://localhost:9000/stream/7");
        assert_eq!(
            endpoints.dictionary_hints("de", "en"),
            "http://localhost:9001/hints/de/en"
        );
    }
}
