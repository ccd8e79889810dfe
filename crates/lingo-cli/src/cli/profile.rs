//! Profile snapshot commands: info, settings, streak, languages, progress,
//! calendar, certificates, friends.

use anyhow::Result;
use comfy_table::{Cell, Color};
use console::style;

use super::output::{empty, field, format_epoch_ms, heading, print_json, table};
use crate::state::AppState;

pub fn info(state: &AppState, json: bool) -> Result<()> {
    let info = state.client.user_info();
    if json {
        return print_json(&info);
    }

    println!();
    println!(
        "  {} {}",
        style(&info.username).cyan().bold(),
        style(format!("#{}", info.id)).dim()
    );
    if let Some(bio) = &info.bio {
        println!("  {}", style(bio).italic());
    }

    heading("Profile");
    field("Name", info.fullname.as_deref());
    field("Location", info.location.as_deref());
    field("Joined", info.created.as_deref());
    field("UI language", Some(&info.ui_language));
    field("Learning", info.learning_language_string.as_deref());
    field("Followers", info.num_followers);
    field("Following", info.num_following);
    field("Contributed", info.contribution_points);
    println!();
    Ok(())
}

pub fn settings(state: &AppState, json: bool) -> Result<()> {
    let settings = state.client.settings();
    if json {
        return print_json(&settings);
    }

    heading("Settings");
    field("Notify", settings.notify_comment);
    field("Deactivated", settings.deactivated);
    field("Follows you", settings.is_follower_by);
    field("Following", settings.is_following);
    println!();
    Ok(())
}

pub fn streak(state: &AppState, json: bool) -> Result<()> {
    let streak = state.client.streak_info();
    if json {
        return print_json(&streak);
    }

    heading("Streak");
    field("Days", streak.site_streak);
    field("Daily goal", streak.daily_goal);
    let extended = streak.streak_extended_today.map(|done| {
        if done {
            style("✓ yes").green().to_string()
        } else {
            style("✗ not yet").yellow().to_string()
        }
    });
    field("Today", extended);
    println!();
    Ok(())
}

pub fn languages(state: &AppState, codes: bool, json: bool) -> Result<()> {
    let languages = state.client.languages(codes);
    if json {
        return print_json(&languages);
    }

    if languages.is_empty() {
        empty("Not learning any language.");
        return Ok(());
    }

    heading("Learning");
    for language in &languages {
        println!("  • {}", style(language).cyan());
    }
    println!();
    Ok(())
}

pub async fn progress(state: &mut AppState, language: &str, json: bool) -> Result<()> {
    let progress = state.client.language_progress(language).await?;
    if json {
        return print_json(&progress);
    }

    heading(progress.language_string.as_deref().unwrap_or(language));
    field("Level", progress.level);
    field("Points", progress.points);
    field("To next level", progress.level_left);
    field("Level percent", progress.level_percent.map(|p| format!("{p}%")));
    field("Skills learned", progress.num_skills_learned);
    field("Streak", progress.streak);
    field("Rank", progress.points_rank);
    field(
        "Fluency",
        progress.fluency_score.map(|f| format!("{:.0}%", f * 100.0)),
    );
    println!();
    Ok(())
}

pub async fn calendar(state: &mut AppState, language: Option<&str>, json: bool) -> Result<()> {
    let events = state.client.calendar(language).await?;
    if json {
        return print_json(&events);
    }

    if events.is_empty() {
        empty("No practice recorded.");
        return Ok(());
    }

    let mut table = table(&["When (UTC)", "Skill", "XP"]);
    for event in &events {
        table.add_row(vec![
            Cell::new(event.datetime.map(format_epoch_ms).unwrap_or_default()).fg(Color::DarkGrey),
            Cell::new(event.skill_id.as_deref().unwrap_or("-")),
            Cell::new(event.improvement.unwrap_or(0)).fg(Color::Green),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn certificates(state: &AppState, json: bool) -> Result<()> {
    let certificates = state.client.certificates();
    if json {
        return print_json(&certificates);
    }

    if certificates.is_empty() {
        empty("No certificates yet.");
        return Ok(());
    }

    let mut table = table(&["Language", "Score", "When"]);
    for cert in &certificates {
        table.add_row(vec![
            Cell::new(cert.language_string.as_deref().unwrap_or("-")).fg(Color::Cyan),
            Cell::new(cert.score.map(|s| format!("{s:.1}")).unwrap_or_default()),
            Cell::new(&cert.datetime).fg(Color::DarkGrey),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn friends(state: &AppState, json: bool) -> Result<()> {
    let friends = state.client.friends();
    if json {
        return print_json(&friends);
    }

    if friends.is_empty() {
        empty("No friends on the leaderboard.");
        return Ok(());
    }

    let mut table = table(&["User", "Points", "Languages"]);
    for friend in &friends {
        table.add_row(vec![
            Cell::new(&friend.username).fg(Color::Cyan),
            Cell::new(friend.points),
            Cell::new(friend.languages.join(", ")).fg(Color::DarkGrey),
        ]);
    }
    println!("{table}");
    Ok(())
}
