use std::path::PathBuf;

use clap::builder::{Styles, styling};
use clap::{ArgAction, Parser, ValueEnum};

use color_eyre::Result;
use color_eyre::eyre::{Context as _, eyre};
use regex::Regex;
use tracing::Level;

const CLAP_STYLING: Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Blue.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

pub struct Config {
    pub dictionary: PathBuf,
    pub output_format: OutputFormat,
    pub separators: String,
    pub limit: Option<usize>,
    pub select: Option<usize>,
    pub progress: bool,
    pub verbosity: u8,
    pub text: Vec<String>,
}

/// Completes the last typed word from a dictionary of words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, styles = CLAP_STYLING)]
struct Args {
    /// Newline-delimited word list to complete from.
    #[arg(short, long)]
    dictionary: PathBuf,
    /// Output format. (default: plain)
    #[arg(short, long, default_value = "plain")]
    format: OutputFormat,
    /// Characters that separate words in the typed text.
    #[arg(short, long, default_value = " \t")]
    separators: String,
    /// Maximum number of suggestions shown.
    #[arg(short, long)]
    limit: Option<usize>,
    /// Applies the given suggestion (starting at 1) to the typed text.
    #[arg(long)]
    select: Option<usize>,
    /// Shows progress while indexing the dictionary.
    #[arg(short, long)]
    progress: bool,
    /// Increases log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Text to complete. Reads one text per line from stdin when omitted.
    #[arg(value_name = "TEXT")]
    text: Vec<String>,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        if args.select == Some(0) {
            return Err(eyre!("--select counts suggestions from 1"));
        }

        let config = Self {
            dictionary: args.dictionary,
            output_format: args.format,
            separators: args.separators,
            limit: args.limit,
            select: args.select,
            progress: args.progress,
            verbosity: args.verbose,
            text: args.text,
        };

        config
            .separators_regex()
            .wrap_err("invalid --separators")?;

        Ok(config)
    }

    pub fn separators_regex(&self) -> Result<Regex> {
        if self.separators.is_empty() {
            return Err(eyre!("no separators given"));
        }

        let pattern = format!("[{}]+", regex::escape(&self.separators));
        Regex::new(&pattern).wrap_err_with(|| format!("compiling separators ({})", pattern))
    }

    /// Positional text arguments joined by the first separator, so each
    /// argument stays its own token.
    pub fn joined_text(&self) -> String {
        let separator = self.separators.chars().next().unwrap_or(' ');
        self.text.join(&separator.to_string())
    }

    pub fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        dictionary: PathBuf::from("words.txt"),
        output_format: OutputFormat::Plain,
        separators: " \t".to_string(),
        limit: None,
        select: None,
        progress: false,
        verbosity: 0,
        text: Vec::new(),
    }
}
