//! Lingo CLI entry point.
//!
//! Binary name: `lingo`
//!
//! Parses CLI arguments, sets up tracing, connects the client (logging in
//! when asked), then dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use lingo_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel) {
        eprintln!("Warning: tracing setup failed: {e}");
    }

    // Shell completions don't need a connected client
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "lingo", &mut std::io::stdout());
        return Ok(());
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

/// Connect and run the selected command.
///
/// Every failure, including a failed connect, comes back to `main` so the
/// tracer provider is flushed before the process exits.
async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut state = AppState::init(cli.user.clone(), cli.login).await?;
    tracing::debug!(
        data_dir = %state.data_dir.display(),
        user = state.client.username(),
        "Client connected"
    );

    let json = cli.json;
    match cli.command {
        Commands::Info => cli::profile::info(&state, json),
        Commands::Settings => cli::profile::settings(&state, json),
        Commands::Streak => cli::profile::streak(&state, json),
        Commands::Languages { codes } => cli::profile::languages(&state, codes, json),
        Commands::Progress { language } => {
            cli::profile::progress(&mut state, &language, json).await
        }
        Commands::Calendar { language } => {
            cli::profile::calendar(&mut state, language.as_deref(), json).await
        }
        Commands::Certificates => cli::profile::certificates(&state, json),
        Commands::Friends => cli::profile::friends(&state, json),

        Commands::Skills { language } => cli::skill::skills(&state, &language, json),
        Commands::Words { language } => cli::skill::words(&state, &language, json),
        Commands::Topics { language } => cli::skill::topics(&state, &language, json),

        Commands::Activity { before } => cli::account::activity(&state, before.as_deref()).await,
        Commands::Switch { language } => cli::account::switch(&mut state, &language, json).await,
        Commands::BuyStreakFreeze { language } => {
            cli::account::buy_streak_freeze(&state, &language, json).await
        }

        Commands::Translate {
            words,
            source,
            target,
        } => {
            cli::vocab::translate(&state, &words, source.as_deref(), target.as_deref(), json)
                .await
        }
        Commands::Vocab { language } => {
            cli::vocab::vocabulary(&mut state, language.as_deref(), json).await
        }
        Commands::Related { word, language } => {
            cli::vocab::related(&mut state, &word, language.as_deref(), json).await
        }

        Commands::Voices { language } => {
            cli::media::voices(&mut state, language.as_deref(), json).await
        }
        Commands::Audio {
            word,
            language,
            voice,
            no_random,
        } => {
            cli::media::audio(
                &mut state,
                &word,
                language.as_deref(),
                !no_random,
                voice.as_deref(),
                json,
            )
            .await
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_returns_connect_errors_to_main() {
        let tmp = tempfile::TempDir::new().unwrap();
        // SAFETY: no other test in this binary reads these variables.
        unsafe {
            std::env::set_var("LINGO_DATA_DIR", tmp.path());
            std::env::remove_var("LINGO_USER");
        }

        let cli = Cli::try_parse_from(["lingo", "info"]).unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(err.to_string().contains("no account given"));

        // Safe to call after a failed run, with or without a provider.
        shutdown_tracing();
    }
}
