//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments and routes to the interactive
//! UI or to one of the one-shot commands.

pub mod analyze;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::analyze::run_analyze;
use crate::cli::settings::{run_set, run_unset};
use crate::core::app::App;
use crate::core::config::{resolve_base_url, Config, BASE_URL_ENV};
use crate::core::samples::SAMPLE_TEXTS;
use crate::ui::event_loop::run_ui;
use crate::ui::theme::Theme;
use crate::utils::logging::{init_file_logging, init_stderr_logging};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "emotion-ai")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Classify the emotion in a piece of text using a remote XLNet model")]
#[command(
    long_about = "emotion-ai sends text to an emotion-classification service and shows \
how confident the model is in each of anger, fear, joy, and sadness.\n\n\
Environment Variables:\n\
  EMOTION_AI_API_URL  Base URL of the service (overridden by --base-url)\n\
  EMOTION_AI_LOG      Log filter for diagnostics (default: info)\n\n\
Controls:\n\
  Type              Enter the text to analyze\n\
  Enter             Analyze the text\n\
  Alt+Enter         Insert a new line\n\
  F1-F4             Load an example text\n\
  Ctrl+L            Clear the input\n\
  Esc / Ctrl+C      Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the inference service
    #[arg(short = 'u', long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write diagnostic logs to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Color theme (dark, light, monochrome)
    #[arg(short = 't', long, global = true, value_name = "THEME")]
    pub theme: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive interface (default)
    Ui,
    /// Analyze text once and print the scores
    Analyze {
        /// Print the sorted results as JSON
        #[arg(long)]
        json: bool,
        /// Text to analyze (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// List the built-in example texts
    Samples,
    /// Show the current configuration
    Config,
    /// Set configuration values
    Set {
        /// Configuration key to set (base-url, theme)
        key: String,
        /// Value to set for the key
        value: Option<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset (base-url, theme)
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Ui);
    let interactive = matches!(command, Commands::Ui);

    match &args.log {
        Some(path) => init_file_logging(path)?,
        None if !interactive => init_stderr_logging(),
        None => {}
    }

    match command {
        Commands::Ui => {
            let config = Config::load()?;
            let base_url = base_url_for(args.base_url.as_deref(), &config);
            let theme = theme_for(args.theme.as_deref(), &config);
            let app = App::new(reqwest::Client::new(), base_url, theme);
            run_ui(app).await
        }
        Commands::Analyze { json, text } => {
            let config = Config::load()?;
            let base_url = base_url_for(args.base_url.as_deref(), &config);
            run_analyze(text.join(" "), base_url, json).await
        }
        Commands::Samples => {
            for (index, text) in SAMPLE_TEXTS.iter().enumerate() {
                println!("{}. {text}", index + 1);
            }
            Ok(())
        }
        Commands::Config => {
            Config::load()?.print_all();
            Ok(())
        }
        Commands::Set { key, value } => run_set(&key, value),
        Commands::Unset { key } => run_unset(&key),
    }
}

fn base_url_for(cli_override: Option<&str>, config: &Config) -> String {
    let base_url = resolve_base_url(cli_override, std::env::var(BASE_URL_ENV).ok(), config);
    debug!(%base_url, "Resolved service base URL");
    base_url
}

/// Flag first, then config file; unknown names fall back to the dark theme.
fn theme_for(cli_theme: Option<&str>, config: &Config) -> Theme {
    cli_theme
        .or(config.theme.as_deref())
        .map(Theme::from_name)
        .unwrap_or_else(Theme::dark_default)
}

#[cfg(test)]
mod tests;
