//! Account actions: switch, buy-streak-freeze, activity.

use anyhow::{Context, Result};
use console::style;

use super::output::print_json;
use crate::state::AppState;

pub async fn switch(state: &mut AppState, language: &str, json: bool) -> Result<()> {
    state
        .client
        .switch_language(language)
        .await
        .with_context(|| format!("Could not switch to '{language}' (did you pass --login?)"))?;

    if json {
        return print_json(&serde_json::json!({ "learning_language": language }));
    }

    let name = state
        .client
        .language_from_abbr(language)
        .unwrap_or(language)
        .to_string();
    println!();
    println!("  {} Now learning {}", style("✓").green().bold(), style(name).cyan());
    println!();
    Ok(())
}

pub async fn buy_streak_freeze(state: &AppState, language: &str, json: bool) -> Result<()> {
    state.client.buy_streak_freeze(language).await?;

    if json {
        return print_json(&serde_json::json!({ "purchased": "streak_freeze", "language": language }));
    }

    println!();
    println!("  {} Streak freeze equipped", style("✓").green().bold());
    println!();
    Ok(())
}

/// The activity stream is an opaque document; it is always printed as JSON.
pub async fn activity(state: &AppState, before: Option<&str>) -> Result<()> {
    let stream = state.client.activity_stream(before).await?;
    print_json(&stream)
}
