//! Vocabulary overview document (`/vocabulary/overview`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyOverview {
    pub language_string: Option<String>,
    pub learning_language: Option<String>,
    pub from_language: Option<String>,
    #[serde(default)]
    pub vocab_overview: Vec<VocabEntry>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A single lexeme the user has met.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub lexeme_id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub word_string: String,
    #[serde(default)]
    pub normalized_string: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub skill: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub pos: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub strength_bars: Option<u8>,
    /// Lexeme ids of inflections and other forms of the same word.
    #[serde(default)]
    pub related_lexemes: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_deserialize() {
        let json = r#"{
            "language_string": "French",
            "learning_language": "fr",
            "from_language": "en",
            "vocab_overview": [
                {
                    "lexeme_id": "l1",
                    "word_string": "Mange",
                    "normalized_string": "mange",
                    "skill": "Food",
                    "strength_bars": 4,
                    "related_lexemes": ["l2"],
                    "gender": "Masculine"
                },
                {"lexeme_id": "l2", "normalized_string": "manger"}
            ]
        }"#;

        let overview: VocabularyOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.vocab_overview.len(), 2);
        assert_eq!(overview.vocab_overview[0].related_lexemes, vec!["l2"]);
        assert_eq!(overview.vocab_overview[0].extra["gender"], "Masculine");
        assert!(overview.vocab_overview[1].related_lexemes.is_empty());
    }
}
