//! Field projections over a [`UserProfile`] snapshot.
//!
//! Pure functions; none of them touch the network. Accessors that may need a
//! language switch first live on [`LingoClient`](crate::client::LingoClient).

use std::collections::BTreeSet;

use lingo_types::profile::{
    Certificate, Friend, LanguageData, LanguageEntry, LanguageProgress, Settings, StreakInfo,
    UserInfo, UserProfile,
};
use lingo_types::skill::Skill;

pub fn settings(profile: &UserProfile) -> Settings {
    Settings {
        notify_comment: profile.notify_comment,
        deactivated: profile.deactivated,
        is_follower_by: profile.is_follower_by,
        is_following: profile.is_following,
    }
}

pub fn user_info(profile: &UserProfile) -> UserInfo {
    UserInfo {
        username: profile.username.clone(),
        bio: profile.bio.clone(),
        id: profile.id,
        num_following: profile.num_following,
        cohort: profile.cohort.clone(),
        language_data: profile.language_data.clone(),
        num_followers: profile.num_followers,
        learning_language_string: profile.learning_language_string.clone(),
        created: profile.created.clone(),
        contribution_points: profile.contribution_points,
        gplus_id: profile.gplus_id.clone(),
        twitter_id: profile.twitter_id.clone(),
        admin: profile.admin,
        invites_left: profile.invites_left,
        location: profile.location.clone(),
        fullname: profile.fullname.clone(),
        avatar: profile.avatar.clone(),
        ui_language: profile.ui_language.clone(),
    }
}

pub fn streak_info(profile: &UserProfile) -> StreakInfo {
    StreakInfo {
        daily_goal: profile.daily_goal,
        site_streak: profile.site_streak,
        streak_extended_today: profile.streak_extended_today,
    }
}

/// Languages currently being learned, as codes or display names.
pub fn languages(profile: &UserProfile, abbreviations: bool) -> Vec<String> {
    profile
        .languages
        .iter()
        .filter(|lang| lang.learning)
        .map(|lang| {
            if abbreviations {
                lang.language.clone()
            } else {
                lang.language_string.clone()
            }
        })
        .collect()
}

/// Display name for a language code.
pub fn language_from_abbr<'a>(profile: &'a UserProfile, abbr: &str) -> Option<&'a str> {
    profile
        .languages
        .iter()
        .find(|lang| lang.language == abbr)
        .map(|lang| lang.language_string.as_str())
}

/// Language code for a display name.
pub fn abbreviation_of<'a>(profile: &'a UserProfile, name: &str) -> Option<&'a str> {
    profile
        .languages
        .iter()
        .find(|lang| lang.language_string == name)
        .map(|lang| lang.language.as_str())
}

/// The profile's entry for a language, looked up by display name.
pub fn language_details<'a>(profile: &'a UserProfile, name: &str) -> Option<&'a LanguageEntry> {
    profile
        .languages
        .iter()
        .find(|lang| lang.language_string == name)
}

/// Certificates with surrounding whitespace stripped from `datetime`.
pub fn certificates(profile: &UserProfile) -> Vec<Certificate> {
    profile
        .certificates
        .iter()
        .cloned()
        .map(|mut cert| {
            cert.datetime = cert.datetime.trim().to_string();
            cert
        })
        .collect()
}

pub fn language_progress(data: &LanguageData) -> LanguageProgress {
    LanguageProgress {
        streak: data.streak,
        language_string: data.language_string.clone(),
        level_progress: data.level_progress,
        num_skills_learned: data.num_skills_learned,
        level_percent: data.level_percent,
        level_points: data.level_points,
        points_rank: data.points_rank,
        next_level: data.next_level,
        level_left: data.level_left,
        language: data.language.clone(),
        points: data.points,
        fluency_score: data.fluency_score,
        level: data.level,
    }
}

/// The language used when a caller does not name one: the profile's current
/// learning language, else the first language with progress data.
pub fn default_language(profile: &UserProfile) -> Option<&str> {
    profile
        .learning_language
        .as_deref()
        .filter(|code| profile.language_data.contains_key(*code))
        .or_else(|| profile.language_data.keys().next().map(String::as_str))
}

/// Leaderboard of the default language.
pub fn friends(profile: &UserProfile) -> Vec<Friend> {
    let Some(data) = default_language(profile).and_then(|code| profile.language_data.get(code))
    else {
        return Vec::new();
    };

    data.points_ranking_data
        .iter()
        .map(|entry| Friend {
            username: entry.username.clone(),
            points: entry.points_data.total,
            languages: entry
                .points_data
                .languages
                .iter()
                .map(|lang| lang.language_string.clone())
                .collect(),
        })
        .collect()
}

/// Every word taught by a learned skill, deduplicated and sorted.
pub fn known_words(skills: &[Skill]) -> BTreeSet<String> {
    skills
        .iter()
        .filter(|skill| skill.learned)
        .flat_map(|skill| skill.words.iter().cloned())
        .collect()
}

/// Titles of learned skills, in input order.
pub fn known_topics(skills: &[Skill]) -> Vec<String> {
    skills
        .iter()
        .filter(|skill| skill.learned)
        .map(|skill| skill.title.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "id": 42,
            "username": "kartik",
            "bio": "polyglot in training",
            "ui_language": "en",
            "learning_language": "fr",
            "notify_comment": true,
            "is_following": false,
            "daily_goal": 30,
            "site_streak": 101,
            "streak_extended_today": true,
            "languages": [
                {"language": "fr", "language_string": "French", "learning": true},
                {"language": "es", "language_string": "Spanish", "learning": true},
                {"language": "de", "language_string": "German", "learning": false}
            ],
            "language_data": {
                "fr": {
                    "language": "fr",
                    "language_string": "French",
                    "level": 10,
                    "points": 2100,
                    "streak": 101,
                    "fluency_score": 0.5,
                    "points_ranking_data": [
                        {"username": "kartik", "points_data": {"total": 2100, "languages": [
                            {"language_string": "French"}, {"language_string": "Spanish"}
                        ]}},
                        {"username": "ana", "points_data": {"total": 50, "languages": []}}
                    ]
                }
            },
            "certificates": [{"language_string": "French", "datetime": "  3 months ago\n"}]
        }))
        .unwrap()
    }

    fn skill(title: &str, learned: bool, words: &[&str]) -> Skill {
        Skill {
            name: title.to_string(),
            title: title.to_string(),
            learned,
            words: words.iter().map(|w| w.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_settings_projection() {
        let settings = settings(&profile());
        assert_eq!(settings.notify_comment, Some(true));
        assert_eq!(settings.is_following, Some(false));
        assert_eq!(settings.deactivated, None);
    }

    #[test]
    fn test_user_info_projection() {
        let info = user_info(&profile());
        assert_eq!(info.username, "kartik");
        assert_eq!(info.id, 42);
        assert_eq!(info.bio.as_deref(), Some("polyglot in training"));
        assert!(info.language_data.contains_key("fr"));
        assert_eq!(info.ui_language, "en");
    }

    #[test]
    fn test_streak_info_projection() {
        let streak = streak_info(&profile());
        assert_eq!(
            streak,
            StreakInfo {
                daily_goal: Some(30),
                site_streak: Some(101),
                streak_extended_today: Some(true),
            }
        );
    }

    #[test]
    fn test_languages_only_learning() {
        let profile = profile();
        assert_eq!(languages(&profile, false), vec!["French", "Spanish"]);
        assert_eq!(languages(&profile, true), vec!["fr", "es"]);
    }

    #[test]
    fn test_language_lookups() {
        let profile = profile();
        assert_eq!(language_from_abbr(&profile, "de"), Some("German"));
        assert_eq!(language_from_abbr(&profile, "it"), None);
        assert_eq!(abbreviation_of(&profile, "Spanish"), Some("es"));
        assert_eq!(abbreviation_of(&profile, "Italian"), None);
        assert_eq!(
            language_details(&profile, "French").map(|l| l.language.as_str()),
            Some("fr")
        );
        assert!(language_details(&profile, "Klingon").is_none());
    }

    #[test]
    fn test_certificates_trimmed() {
        let certs = certificates(&profile());
        assert_eq!(certs[0].datetime, "3 months ago");
    }

    #[test]
    fn test_language_progress_projection() {
        let profile = profile();
        let progress = language_progress(&profile.language_data["fr"]);
        assert_eq!(progress.level, Some(10));
        assert_eq!(progress.points, Some(2100.0));
        assert_eq!(progress.language.as_deref(), Some("fr"));
        assert_eq!(progress.level_left, None);
    }

    #[test]
    fn test_default_language_prefers_learning_language() {
        let mut profile = profile();
        assert_eq!(default_language(&profile), Some("fr"));

        profile.learning_language = Some("it".to_string());
        assert_eq!(default_language(&profile), Some("fr"));

        profile.language_data.clear();
        assert_eq!(default_language(&profile), None);
    }

    #[test]
    fn test_friends_from_ranking() {
        let friends = friends(&profile());
        assert_eq!(friends.len(), 2);
        assert_eq!(friends[0].username, "kartik");
        assert_eq!(friends[0].points, 2100);
        assert_eq!(friends[0].languages, vec!["French", "Spanish"]);
        assert!(friends[1].languages.is_empty());
    }

    #[test]
    fn test_friends_empty_without_language_data() {
        assert!(friends(&UserProfile::default()).is_empty());
    }

    #[test]
    fn test_known_words_and_topics() {
        let skills = vec![
            skill("Basics", true, &["le", "la", "chat"]),
            skill("Food", false, &["pain"]),
            skill("Animals", true, &["chat", "chien"]),
        ];

        let words: Vec<String> = known_words(&skills).into_iter().collect();
        assert_eq!(words, vec!["chat", "chien", "la", "le"]);
        assert_eq!(known_topics(&skills), vec!["Basics", "Animals"]);
    }
}
