//! Lazy text-to-speech media lookup.
//!
//! The homepage is fetched once per resolver and both the media host and the
//! voice table are scraped from it on first use, then cached for the
//! resolver's lifetime.

pub mod scrape;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use tracing::debug;

use lingo_types::error::LingoError;

use crate::endpoints::Endpoints;
use crate::session::SessionClient;

pub use scrape::{VoiceTable, extract_media_host, extract_voice_table};

/// Voice name accepted for "the language's own default voice".
pub const DEFAULT_VOICE: &str = "default";

pub struct MediaResolver {
    homepage: Option<String>,
    host: Option<String>,
    voices: Option<VoiceTable>,
    rng: SmallRng,
}

impl MediaResolver {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Use a caller-supplied generator (seeded in tests).
    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            homepage: None,
            host: None,
            voices: None,
            rng,
        }
    }

    async fn homepage<S: SessionClient>(
        &mut self,
        session: &S,
        endpoints: &Endpoints,
    ) -> Result<&str, LingoError> {
        if self.homepage.is_none() {
            let url = endpoints.homepage();
            debug!(url, "Fetching homepage for media lookup");

            let response = session.get(url, &[]).await?;
            if !response.is_success() {
                return Err(LingoError::FetchFailed(format!(
                    "homepage (HTTP {})",
                    response.status
                )));
            }
            self.homepage = Some(response.body);
        }

        Ok(self.homepage.as_deref().unwrap_or_default())
    }

    /// Base URL of the TTS host, e.g. `https://d7mj4aqfscim2.cloudfront.net`.
    pub async fn media_host<S: SessionClient>(
        &mut self,
        session: &S,
        endpoints: &Endpoints,
    ) -> Result<String, LingoError> {
        if let Some(host) = &self.host {
            return Ok(host.clone());
        }

        let host = extract_media_host(self.homepage(session, endpoints).await?)?;
        debug!(host = %host, "Resolved TTS media host");
        self.host = Some(host.clone());
        Ok(host)
    }

    pub async fn voice_table<S: SessionClient>(
        &mut self,
        session: &S,
        endpoints: &Endpoints,
    ) -> Result<&VoiceTable, LingoError> {
        if self.voices.is_none() {
            let table = extract_voice_table(self.homepage(session, endpoints).await?)?;
            debug!(languages = table.len(), "Parsed TTS voice table");
            self.voices = Some(table);
        }

        match &self.voices {
            Some(table) => Ok(table),
            None => Err(LingoError::ParseFailed("tts voice table unavailable".to_string())),
        }
    }

    /// Voices available for a language, with the bare language voice shown
    /// as `default` and the `<lang>/` prefix stripped from the rest.
    pub async fn language_voices<S: SessionClient>(
        &mut self,
        session: &S,
        endpoints: &Endpoints,
        language: &str,
    ) -> Result<Vec<String>, LingoError> {
        let table = self.voice_table(session, endpoints).await?;
        let voices = table
            .get(language)
            .ok_or_else(|| LingoError::LanguageNotFound(language.to_string()))?;

        let prefix = format!("{language}/");
        Ok(voices
            .iter()
            .map(|voice| {
                if voice == language {
                    DEFAULT_VOICE.to_string()
                } else {
                    voice.strip_prefix(&prefix).unwrap_or(voice).to_string()
                }
            })
            .collect())
    }

    /// Pick the voice path used in a TTS URL.
    ///
    /// An explicit voice other than `default` wins. Otherwise a random entry
    /// of the language's list when `random` is set, else its first entry.
    pub async fn select_voice<S: SessionClient>(
        &mut self,
        session: &S,
        endpoints: &Endpoints,
        language: &str,
        random: bool,
        voice: Option<&str>,
    ) -> Result<String, LingoError> {
        self.voice_table(session, endpoints).await?;

        if let Some(voice) = voice.filter(|v| *v != DEFAULT_VOICE) {
            return Ok(format!("{language}/{voice}"));
        }

        let voices = self
            .voices
            .as_ref()
            .and_then(|table| table.get(language))
            .ok_or_else(|| LingoError::LanguageNotFound(language.to_string()))?;

        let picked = if random {
            voices.choose(&mut self.rng)
        } else {
            voices.first()
        };

        picked
            .cloned()
            .ok_or_else(|| LingoError::LanguageNotFound(language.to_string()))
    }

    /// Playable URL for `word` spoken in `language`.
    pub async fn audio_url<S: SessionClient>(
        &mut self,
        session: &S,
        endpoints: &Endpoints,
        word: &str,
        language: &str,
        random: bool,
        voice: Option<&str>,
    ) -> Result<String, LingoError> {
        let voice = self
            .select_voice(session, endpoints, language, random, voice)
            .await?;
        let host = self.media_host(session, endpoints).await?;

        Ok(format!("{host}/tts/{voice}/token/{word}"))
    }
}

impl Default for MediaResolver {
    fn default() -> Self {
        Self::new()
    }
}
