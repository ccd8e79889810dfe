//! Vocabulary commands: vocab, related, translate.

use anyhow::Result;
use comfy_table::{Cell, Color};
use console::style;

use lingo_types::vocabulary::VocabEntry;

use super::output::{empty, heading, print_json, table};
use crate::state::AppState;

fn vocab_table(entries: &[VocabEntry]) -> comfy_table::Table {
    let mut table = table(&["Word", "Skill", "Part of speech", "Strength"]);
    for entry in entries {
        let bars = entry
            .strength_bars
            .map(|n| "▮".repeat(n as usize))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&entry.word_string).fg(Color::Cyan),
            Cell::new(entry.skill.as_deref().unwrap_or("-")),
            Cell::new(entry.pos.as_deref().unwrap_or("-")).fg(Color::DarkGrey),
            Cell::new(bars).fg(Color::Green),
        ]);
    }
    table
}

pub async fn vocabulary(state: &mut AppState, language: Option<&str>, json: bool) -> Result<()> {
    let overview = state.client.vocabulary(language).await?;
    if json {
        return print_json(&overview);
    }

    if overview.vocab_overview.is_empty() {
        empty("Vocabulary is empty.");
        return Ok(());
    }

    println!("{}", vocab_table(&overview.vocab_overview));
    Ok(())
}

pub async fn related(
    state: &mut AppState,
    word: &str,
    language: Option<&str>,
    json: bool,
) -> Result<()> {
    let related = state.client.related_words(word, language).await?;
    if json {
        return print_json(&related);
    }

    if related.is_empty() {
        empty(&format!("No related words for '{word}'."));
        return Ok(());
    }

    println!("{}", vocab_table(&related));
    Ok(())
}

pub async fn translate(
    state: &AppState,
    words: &[String],
    source: Option<&str>,
    target: Option<&str>,
    json: bool,
) -> Result<()> {
    let hints = state.client.translations(words, source, target).await?;
    if json {
        return print_json(&hints);
    }

    heading("Translations");
    for word in words {
        match hints.get(word) {
            Some(options) if !options.is_empty() => {
                println!("  {} → {}", style(word).cyan().bold(), options.join(", "));
            }
            _ => println!("  {} → {}", style(word).cyan().bold(), style("no hints").dim()),
        }
    }
    println!();
    Ok(())
}
