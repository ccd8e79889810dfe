//! CLI command definitions for the `lingo` binary.
//!
//! Uses clap derive macros for argument parsing. Each subcommand maps to one
//! accessor of the client.

pub mod account;
pub mod media;
pub mod output;
pub mod profile;
pub mod skill;
pub mod vocab;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Inspect your language-learning profile from the terminal.
#[derive(Parser)]
#[command(name = "lingo", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Account to query (defaults to `username` in config.toml).
    #[arg(short, long, global = true, env = "LINGO_USER")]
    pub user: Option<String>,

    /// Log in before fetching. Reads LINGO_PASSWORD or prompts.
    #[arg(long, global = true)]
    pub login: bool,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors. Command output is still printed.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile summary.
    Info,

    /// Notification and follow settings.
    Settings,

    /// Daily goal and streak.
    Streak,

    /// Languages being learned.
    Languages {
        /// Print language codes instead of names.
        #[arg(long)]
        codes: bool,
    },

    /// Progress in one language.
    Progress {
        /// Language code (e.g. `fr`).
        language: String,
    },

    /// Practice calendar, overall or for one language.
    Calendar {
        /// Language code.
        language: Option<String>,
    },

    /// Earned certificates.
    Certificates,

    /// Friends leaderboard for the current language.
    Friends,

    /// Learned skills in the order they were learned.
    Skills {
        /// Language code.
        language: String,
    },

    /// Every word from learned skills.
    Words {
        /// Language code.
        language: String,
    },

    /// Titles of learned skills.
    Topics {
        /// Language code.
        language: String,
    },

    /// Recent activity, or the page before a timestamp.
    Activity {
        /// Timestamp like `2015-07-06 05:42:24`.
        #[arg(long)]
        before: Option<String>,
    },

    /// Translation hints for words.
    Translate {
        /// Words to translate.
        #[arg(required = true)]
        words: Vec<String>,

        /// Language to translate into (defaults to the UI language).
        #[arg(long)]
        source: Option<String>,

        /// Language of the words (defaults to the current learning language).
        #[arg(long)]
        target: Option<String>,
    },

    /// Vocabulary overview (requires --login).
    #[command(alias = "vocabulary")]
    Vocab {
        /// Language code; switches to it when not current.
        language: Option<String>,
    },

    /// Other forms of a word from your vocabulary (requires --login).
    Related {
        /// Normalized word.
        word: String,

        /// Language code.
        #[arg(long)]
        language: Option<String>,
    },

    /// Text-to-speech voices available for a language.
    Voices {
        /// Language code.
        language: Option<String>,
    },

    /// Text-to-speech URL for a word.
    Audio {
        /// Word to speak.
        word: String,

        /// Language code.
        #[arg(long)]
        language: Option<String>,

        /// Voice name (see `lingo voices`).
        #[arg(long)]
        voice: Option<String>,

        /// Always use the language's first voice instead of a random one.
        #[arg(long)]
        no_random: bool,
    },

    /// Switch the learning language (requires --login).
    Switch {
        /// Language code.
        language: String,
    },

    /// Buy a streak freeze (requires --login).
    #[command(name = "buy-streak-freeze")]
    BuyStreakFreeze {
        /// Language code.
        language: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn quiet_only_affects_logging() {
        let cmd = Cli::command();
        let quiet = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "quiet")
            .unwrap();
        let help = quiet.get_help().unwrap().to_string();
        assert!(help.starts_with("Only log errors"));

        let cli = Cli::try_parse_from(["lingo", "--quiet", "info"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn parses_audio_flags() {
        let cli = Cli::try_parse_from([
            "lingo", "--user", "kartik", "audio", "chat", "--language", "fr", "--no-random",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("kartik"));
        match cli.command {
            Commands::Audio {
                word,
                language,
                voice,
                no_random,
            } => {
                assert_eq!(word, "chat");
                assert_eq!(language.as_deref(), Some("fr"));
                assert!(voice.is_none());
                assert!(no_random);
            }
            _ => panic!("expected audio command"),
        }
    }

    #[test]
    fn translate_requires_words() {
        assert!(Cli::try_parse_from(["lingo", "translate"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lingo", "skills", "fr", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Skills { language } if language == "fr"));
    }
}
