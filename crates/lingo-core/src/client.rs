//! The profile-backed client.
//!
//! [`LingoClient`] owns a session, the most recently fetched profile, and
//! the lazily built media state. Every method awaits at most one remote
//! exchange at a time. Methods that can replace the profile (language
//! switch) or fill the media cache take `&mut self`; callers sharing a client
//! across tasks must synchronize externally.

use std::collections::{BTreeMap, BTreeSet};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use lingo_types::error::LingoError;
use lingo_types::profile::{
    CalendarEvent, Certificate, Friend, LanguageData, LanguageEntry, LanguageProgress, Settings,
    StreakInfo, UserInfo, UserProfile,
};
use lingo_types::skill::Skill;
use lingo_types::vocabulary::{VocabEntry, VocabularyOverview};

use crate::endpoints::Endpoints;
use crate::media::MediaResolver;
use crate::profile::projection;
use crate::session::SessionClient;
use crate::skill::resolver;

/// Reply to `POST /login`.
#[derive(Debug, Deserialize)]
struct LoginReply {
    response: Option<String>,
}

/// Reply to `POST /switch_language`.
#[derive(Debug, Deserialize)]
struct SwitchReply {
    tracking_properties: TrackingProperties,
}

#[derive(Debug, Deserialize)]
struct TrackingProperties {
    learning_language: String,
}

/// Word → translation hints, as returned by the dictionary API.
pub type Translations = BTreeMap<String, Vec<String>>;

pub struct LingoClient<S: SessionClient> {
    session: S,
    endpoints: Endpoints,
    username: String,
    profile: UserProfile,
    media: MediaResolver,
}

impl<S: SessionClient> LingoClient<S> {
    /// Log in (when a password is given) and fetch the user's profile.
    ///
    /// Without a password only the public profile is available.
    pub async fn connect(
        session: S,
        endpoints: Endpoints,
        username: impl Into<String>,
        password: Option<&SecretString>,
    ) -> Result<Self, LingoError> {
        let mut client = Self {
            session,
            endpoints,
            username: username.into(),
            profile: UserProfile::default(),
            media: MediaResolver::new(),
        };

        if let Some(password) = password {
            let username = client.username.clone();
            client.login(&username, password).await?;
        }
        client.fetch_profile().await?;

        Ok(client)
    }

    /// Replace the media resolver (tests pin its random generator).
    pub fn with_media(mut self, media: MediaResolver) -> Self {
        self.media = media;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The current profile snapshot.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Authenticate the session. The session keeps the cookies.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), LingoError> {
        let url = self.endpoints.login();
        debug!(username, "Logging in");

        let response = self
            .session
            .post_form(
                &url,
                &[("login", username), ("password", password.expose_secret())],
            )
            .await?;

        let reply: LoginReply = response.json().map_err(|e| {
            warn!(error = %e, status = response.status, "Undecodable login reply");
            LingoError::AuthenticationFailed
        })?;

        if reply.response.as_deref() == Some("OK") {
            info!(username, "Logged in");
            Ok(())
        } else {
            Err(LingoError::AuthenticationFailed)
        }
    }

    /// Fetch the profile and replace the snapshot.
    pub async fn fetch_profile(&mut self) -> Result<&UserProfile, LingoError> {
        let url = self.endpoints.user(&self.username);
        debug!(url = %url, "Fetching user profile");

        let response = self.session.get(&url, &[]).await?;
        if !response.is_success() {
            return Err(LingoError::FetchFailed(format!(
                "user profile (HTTP {})",
                response.status
            )));
        }

        self.profile = response
            .json()
            .map_err(|e| LingoError::FetchFailed(format!("user profile: {e}")))?;

        debug!(
            languages = self.profile.language_data.len(),
            "Profile snapshot replaced"
        );
        Ok(&self.profile)
    }

    /// Switch the account's learning language and refetch the profile.
    ///
    /// Succeeds only when the reply echoes the requested code.
    pub async fn switch_language(&mut self, language: &str) -> Result<(), LingoError> {
        let url = self.endpoints.switch_language();
        info!(language, "Switching learning language");

        let response = self
            .session
            .post_form(&url, &[("learning_language", language)])
            .await?;

        let reply: SwitchReply = response
            .json()
            .map_err(|_| LingoError::SwitchFailed(language.to_string()))?;

        if reply.tracking_properties.learning_language != language {
            return Err(LingoError::SwitchFailed(language.to_string()));
        }

        self.fetch_profile().await?;
        Ok(())
    }

    /// True when the snapshot already holds progress data for `language`.
    pub fn is_current_language(&self, language: &str) -> bool {
        self.profile.language_data.contains_key(language)
    }

    async fn ensure_language(&mut self, language: &str) -> Result<(), LingoError> {
        if !self.is_current_language(language) {
            self.switch_language(language).await?;
        }
        Ok(())
    }

    fn language_data(&self, language: &str) -> Result<&LanguageData, LingoError> {
        self.profile
            .language_data
            .get(language)
            .ok_or_else(|| LingoError::LanguageNotFound(language.to_string()))
    }

    fn resolve_language(&self, language: Option<&str>) -> Result<String, LingoError> {
        language
            .or_else(|| projection::default_language(&self.profile))
            .map(str::to_string)
            .ok_or_else(|| LingoError::LanguageNotFound("<none>".to_string()))
    }

    // -----------------------------------------------------------------------
    // Remote accessors
    // -----------------------------------------------------------------------

    /// Recent activity, or the page of the stream before `before`
    /// (e.g. `2015-07-06 05:42:24`).
    pub async fn activity_stream(&self, before: Option<&str>) -> Result<Value, LingoError> {
        let response = match before {
            Some(before) => {
                let url = self.endpoints.stream(self.profile.id);
                self.session.get(&url, &[("before", before)]).await?
            }
            None => {
                let url = self.endpoints.activity(self.profile.id);
                self.session.get(&url, &[]).await?
            }
        };

        response
            .json()
            .map_err(|e| LingoError::FetchFailed(format!("activity stream: {e}")))
    }

    pub async fn buy_streak_freeze(&self, language: &str) -> Result<(), LingoError> {
        let url = self.endpoints.store_purchase();
        info!(language, "Buying streak freeze");

        let response = self
            .session
            .post_form(
                &url,
                &[("item_name", "streak_freeze"), ("learning_language", language)],
            )
            .await?;

        if !response.is_success() {
            return Err(LingoError::PurchaseFailed(format!(
                "streak freeze for '{language}' (HTTP {}); it may already be equipped",
                response.status
            )));
        }
        Ok(())
    }

    /// Translation hints for `words`.
    ///
    /// `source` defaults to the UI language, `target` to the current
    /// learning language.
    pub async fn translations(
        &self,
        words: &[String],
        source: Option<&str>,
        target: Option<&str>,
    ) -> Result<Translations, LingoError> {
        let source = source.unwrap_or(self.profile.ui_language.as_str()).to_string();
        let target = self.resolve_language(target)?;

        let tokens = serde_json::to_string(words)
            .map_err(|e| LingoError::FetchFailed(format!("translations: {e}")))?;
        let url = self.endpoints.dictionary_hints(&target, &source);

        let response = self.session.get(&url, &[("tokens", tokens.as_str())]).await?;
        response
            .json()
            .map_err(|e| LingoError::FetchFailed(format!("translations: {e}")))
    }

    /// Vocabulary overview, switching language first when needed.
    pub async fn vocabulary(
        &mut self,
        language: Option<&str>,
    ) -> Result<VocabularyOverview, LingoError> {
        if let Some(language) = language {
            self.ensure_language(language).await?;
        }

        let url = self.endpoints.vocabulary_overview();
        let response = self.session.get(&url, &[]).await?;
        response
            .json()
            .map_err(|e| LingoError::FetchFailed(format!("vocabulary overview: {e}")))
    }

    /// Vocabulary entries related to `word` (other forms of the same lexeme).
    ///
    /// Empty when the word is not part of the user's vocabulary.
    pub async fn related_words(
        &mut self,
        word: &str,
        language: Option<&str>,
    ) -> Result<Vec<VocabEntry>, LingoError> {
        let overview = self.vocabulary(language).await?;

        let Some(entry) = overview
            .vocab_overview
            .iter()
            .find(|entry| entry.normalized_string == word)
        else {
            return Ok(Vec::new());
        };

        let related: BTreeSet<&str> = entry.related_lexemes.iter().map(String::as_str).collect();
        Ok(overview
            .vocab_overview
            .iter()
            .filter(|candidate| related.contains(candidate.lexeme_id.as_str()))
            .cloned()
            .collect())
    }

    pub async fn language_voices(
        &mut self,
        language: Option<&str>,
    ) -> Result<Vec<String>, LingoError> {
        let language = self.resolve_language(language)?;
        self.media
            .language_voices(&self.session, &self.endpoints, &language)
            .await
    }

    /// TTS URL for `word`. See [`MediaResolver::select_voice`] for how the
    /// voice is chosen.
    pub async fn audio_url(
        &mut self,
        word: &str,
        language: Option<&str>,
        random: bool,
        voice: Option<&str>,
    ) -> Result<String, LingoError> {
        let language = self.resolve_language(language)?;
        self.media
            .audio_url(&self.session, &self.endpoints, word, &language, random, voice)
            .await
    }

    // -----------------------------------------------------------------------
    // Snapshot views
    // -----------------------------------------------------------------------

    pub fn settings(&self) -> Settings {
        projection::settings(&self.profile)
    }

    pub fn user_info(&self) -> UserInfo {
        projection::user_info(&self.profile)
    }

    pub fn streak_info(&self) -> StreakInfo {
        projection::streak_info(&self.profile)
    }

    pub fn languages(&self, abbreviations: bool) -> Vec<String> {
        projection::languages(&self.profile, abbreviations)
    }

    pub fn language_from_abbr(&self, abbr: &str) -> Option<&str> {
        projection::language_from_abbr(&self.profile, abbr)
    }

    pub fn abbreviation_of(&self, name: &str) -> Option<&str> {
        projection::abbreviation_of(&self.profile, name)
    }

    pub fn language_details(&self, name: &str) -> Option<&LanguageEntry> {
        projection::language_details(&self.profile, name)
    }

    pub fn certificates(&self) -> Vec<Certificate> {
        projection::certificates(&self.profile)
    }

    pub fn friends(&self) -> Vec<Friend> {
        projection::friends(&self.profile)
    }

    /// Practice events: the profile-wide list, or one language's list after
    /// switching to it when it is not current.
    pub async fn calendar(
        &mut self,
        language: Option<&str>,
    ) -> Result<Vec<CalendarEvent>, LingoError> {
        match language {
            Some(language) => {
                self.ensure_language(language).await?;
                Ok(self.language_data(language)?.calendar.clone())
            }
            None => Ok(self.profile.calendar.clone()),
        }
    }

    pub async fn language_progress(&mut self, language: &str) -> Result<LanguageProgress, LingoError> {
        self.ensure_language(language).await?;
        Ok(projection::language_progress(self.language_data(language)?))
    }

    pub fn known_words(&self, language: &str) -> Result<BTreeSet<String>, LingoError> {
        Ok(projection::known_words(&self.language_data(language)?.skills))
    }

    pub fn known_topics(&self, language: &str) -> Result<Vec<String>, LingoError> {
        Ok(projection::known_topics(&self.language_data(language)?.skills))
    }

    /// Learned skills in the order they were learned.
    pub fn learned_skills(&self, language: &str) -> Result<Vec<Skill>, LingoError> {
        Ok(resolver::learned_skills(&self.language_data(language)?.skills))
    }
}
