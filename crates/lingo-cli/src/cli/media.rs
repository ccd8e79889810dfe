//! Text-to-speech commands: voices, audio.

use anyhow::Result;
use console::style;

use super::output::{heading, print_json};
use crate::state::AppState;

pub async fn voices(state: &mut AppState, language: Option<&str>, json: bool) -> Result<()> {
    let voices = state.client.language_voices(language).await?;
    if json {
        return print_json(&voices);
    }

    heading("Voices");
    for voice in &voices {
        println!("  • {}", style(voice).cyan());
    }
    println!();
    Ok(())
}

pub async fn audio(
    state: &mut AppState,
    word: &str,
    language: Option<&str>,
    random: bool,
    voice: Option<&str>,
    json: bool,
) -> Result<()> {
    let url = state.client.audio_url(word, language, random, voice).await?;
    if json {
        return print_json(&serde_json::json!({ "word": word, "url": url }));
    }

    println!("{url}");
    Ok(())
}
