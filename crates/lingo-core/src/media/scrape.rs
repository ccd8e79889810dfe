//! Pattern extraction from the platform's homepage HTML.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use lingo_types::error::LingoError;

/// Voice names per language code, e.g. `{"fr": ["fr", "fr/female2"]}`.
pub type VoiceTable = BTreeMap<String, Vec<String>>;

static MEDIA_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[A-Za-z0-9.-]+\.cloudfront\.net").expect("valid media host pattern"));

static VOICE_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"duo\.tts_multi_voices = \{.+\};").expect("valid voice table pattern"));

/// The TTS content-delivery host, as an `https:` URL without trailing slash.
pub fn extract_media_host(html: &str) -> Result<String, LingoError> {
    let found = MEDIA_HOST
        .find(html)
        .ok_or_else(|| LingoError::ParseFailed("no cloudfront host in homepage".to_string()))?;

    Ok(format!("https:{}", found.as_str()))
}

/// The `duo.tts_multi_voices` object embedded in an inline script.
///
/// The object spans from the first `{` to the first `}` of the matched
/// statement; voice lists never contain braces.
pub fn extract_voice_table(html: &str) -> Result<VoiceTable, LingoError> {
    let statement = VOICE_TABLE
        .find(html)
        .ok_or_else(|| LingoError::ParseFailed("no tts voice table in homepage".to_string()))?
        .as_str();

    let object = match (statement.find('{'), statement.find('}')) {
        (Some(start), Some(end)) if start < end => &statement[start..=end],
        _ => {
            return Err(LingoError::ParseFailed(
                "malformed tts voice table".to_string(),
            ));
        }
    };

    serde_json::from_str(object)
        .map_err(|e| LingoError::ParseFailed(format!("undecodable tts voice table: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOMEPAGE: &str = r#"<html><head>
<link rel="preconnect" href="//d7mj4aqfscim2.cloudfront.net">
<script>
duo.version = "3.1"; duo.tts_multi_voices = {"fr": ["fr", "fr/female2"], "de": ["de/male1", "de"]};duo.other = {"a": 1};
</script>
</head></html>"#;

    #[test]
    fn media_host_is_extracted() {
        assert_eq!(
            extract_media_host(HOMEPAGE).unwrap(),
            "https://d7mj4aqfscim2.cloudfront.net"
        );
    }

    #[test]
    fn voice_table_is_extracted() {
        let table = extract_voice_table(HOMEPAGE).unwrap();
        assert_eq!(table["fr"], vec!["fr", "fr/female2"]);
        assert_eq!(table["de"], vec!["de/male1", "de"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_host_is_parse_failure() {
        let err = extract_media_host("<html>nothing here</html>").unwrap_err();
        assert!(matches!(err, LingoError::ParseFailed(_)));
    }

    #[test]
    fn missing_voice_table_is_parse_failure() {
        let err = extract_voice_table("<script>duo.version = 1;</script>").unwrap_err();
        assert!(matches!(err, LingoError::ParseFailed(_)));
    }

    #[test]
    fn undecodable_voice_table_is_parse_failure() {
        let html = "duo.tts_multi_voices = {fr: [fr]};";
        let err = extract_voice_table(html).unwrap_err();
        assert!(matches!(err, LingoError::ParseFailed(msg) if msg.contains("undecodable")));
    }
}
