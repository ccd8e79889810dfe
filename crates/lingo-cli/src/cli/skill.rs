//! Skill tree commands: skills, words, topics.

use anyhow::Result;
use comfy_table::{Cell, Color};
use console::style;

use super::output::{empty, heading, print_json, table};
use crate::state::AppState;

/// Learned skills in the order they were learned.
pub fn skills(state: &AppState, language: &str, json: bool) -> Result<()> {
    let skills = state.client.learned_skills(language)?;
    if json {
        return print_json(&skills);
    }

    if skills.is_empty() {
        empty(&format!("No learned skills in '{language}'."));
        return Ok(());
    }

    let mut table = table(&["#", "Skill", "Depends on", "Words"]);
    for skill in &skills {
        let order = skill
            .dependency_order
            .map(|o| o.to_string())
            .unwrap_or_else(|| "?".to_string());
        table.add_row(vec![
            Cell::new(order).fg(Color::DarkGrey),
            Cell::new(&skill.title).fg(Color::Cyan),
            Cell::new(skill.dependencies_name.join(", ")),
            Cell::new(skill.words.len()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn words(state: &AppState, language: &str, json: bool) -> Result<()> {
    let words = state.client.known_words(language)?;
    if json {
        return print_json(&words);
    }

    if words.is_empty() {
        empty(&format!("No known words in '{language}'."));
        return Ok(());
    }

    heading(&format!("{} words", words.len()));
    let joined: Vec<&str> = words.iter().map(String::as_str).collect();
    println!("  {}", joined.join(", "));
    println!();
    Ok(())
}

pub fn topics(state: &AppState, language: &str, json: bool) -> Result<()> {
    let topics = state.client.known_topics(language)?;
    if json {
        return print_json(&topics);
    }

    if topics.is_empty() {
        empty(&format!("No learned topics in '{language}'."));
        return Ok(());
    }

    heading("Topics");
    for topic in &topics {
        println!("  • {}", style(topic).cyan());
    }
    println!();
    Ok(())
}
