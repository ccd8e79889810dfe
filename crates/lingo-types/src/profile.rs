//! User profile document and the views projected from it.
//!
//! The profile is fetched from `/users/<username>` and replaced as a whole on
//! login and language switch. Field access is best-effort: absent, `null` or
//! mistyped fields default, unknown fields are preserved in `extra`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;
use crate::skill::Skill;

// ---------------------------------------------------------------------------
// Profile document
// ---------------------------------------------------------------------------

/// The user-data document returned by the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub fullname: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created: Option<String>,
    pub cohort: Option<Value>,
    pub gplus_id: Option<Value>,
    pub twitter_id: Option<Value>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub admin: Option<bool>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub invites_left: Option<i64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub contribution_points: Option<i64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub num_following: Option<u64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub num_followers: Option<u64>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ui_language: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub learning_language: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub learning_language_string: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub languages: Vec<LanguageEntry>,
    /// Progress per language code. Normally holds only the current language.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language_data: BTreeMap<String, LanguageData>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub calendar: Vec<CalendarEvent>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub certificates: Vec<Certificate>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub notify_comment: Option<bool>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub deactivated: Option<bool>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_follower_by: Option<bool>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_following: Option<bool>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub daily_goal: Option<u32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub site_streak: Option<u32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub streak_extended_today: Option<bool>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// An entry of the profile's `languages` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language code, e.g. `fr`.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language: String,
    /// Display name, e.g. `French`.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language_string: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub learning: bool,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Per-language progress object from `language_data`.
///
/// Point and level counters are floats: the platform sends fractional
/// values for some of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageData {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub calendar: Vec<CalendarEvent>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub points_ranking_data: Vec<RankingEntry>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub streak: Option<u32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language_string: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub level: Option<u32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub level_progress: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub level_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub level_points: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub level_left: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub next_level: Option<u32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub num_skills_learned: Option<u32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub points_rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub fluency_score: Option<f64>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A single practice event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub skill_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub improvement: Option<i64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub event_type: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub datetime: Option<i64>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language_string: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub datetime: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One row of a language's points leaderboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub points_data: PointsData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointsData {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub languages: Vec<RankedLanguage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankedLanguage {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language_string: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub points: Option<i64>,
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub notify_comment: Option<bool>,
    pub deactivated: Option<bool>,
    pub is_follower_by: Option<bool>,
    pub is_following: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub bio: Option<String>,
    pub id: u64,
    pub num_following: Option<u64>,
    pub cohort: Option<Value>,
    pub language_data: BTreeMap<String, LanguageData>,
    pub num_followers: Option<u64>,
    pub learning_language_string: Option<String>,
    pub created: Option<String>,
    pub contribution_points: Option<i64>,
    pub gplus_id: Option<Value>,
    pub twitter_id: Option<Value>,
    pub admin: Option<bool>,
    pub invites_left: Option<i64>,
    pub location: Option<String>,
    pub fullname: Option<String>,
    pub avatar: Option<String>,
    pub ui_language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub daily_goal: Option<u32>,
    pub site_streak: Option<u32>,
    pub streak_extended_today: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageProgress {
    pub streak: Option<u32>,
    pub language_string: Option<String>,
    pub level_progress: Option<f64>,
    pub num_skills_learned: Option<u32>,
    pub level_percent: Option<f64>,
    pub level_points: Option<f64>,
    pub points_rank: Option<u32>,
    pub next_level: Option<u32>,
    pub level_left: Option<f64>,
    pub language: Option<String>,
    pub points: Option<f64>,
    pub fluency_score: Option<f64>,
    pub level: Option<u32>,
}

/// A leaderboard entry reduced to what a friends list shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub username: String,
    pub points: i64,
    pub languages: Vec<String>,
}
