//! Skill records as they appear in a language's progress data.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// One skill (course unit) of a language tree.
///
/// Only the fields the client reasons about are typed; everything else the
/// platform sends is kept in `extra` so a skill round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,

    /// Names of the skills this one depends on. Empty for roots.
    #[serde(default)]
    pub dependencies_name: Vec<String>,

    #[serde(default)]
    pub learned: bool,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub words: Vec<String>,

    /// Position in the learning order. Skills sharing a dependency set share
    /// a value; `None` until assigned or when the skill is unreachable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_order: Option<u32>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Skill {
    /// Grouping key for the dependency walk: the first dependency name, or
    /// the empty string for roots.
    pub fn dependency_key(&self) -> &str {
        self.dependencies_name
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }
}
