//! Command line argument parsing for the FastSpell CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::config::DictionaryConfig;
use crate::util::levenshtein::EditMetric;

/// FastSpell - fuzzy dictionary lookups within a bounded edit distance
#[derive(Parser, Debug, Clone)]
#[command(name = "fastspell")]
#[command(about = "Find the closest dictionary words within a bounded edit distance")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FastSpellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FastSpellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the best match of each word
    #[command(name = "match")]
    Match(MatchArgs),

    /// Tell whether each word has a match within the distance
    Check(MatchArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// How the dictionary is built from the word list.
#[derive(Args, Debug, Clone)]
pub struct DictionaryArgs {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Dictionary configuration file (JSON); flags below override it
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum edit distance the dictionary supports
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Maximum word length, in characters
    #[arg(long)]
    pub max_word_length: Option<usize>,

    /// Count adjacent transpositions as a single edit
    #[arg(long)]
    pub transpositions: bool,

    /// Lowercase words before matching
    #[arg(long)]
    pub lowercase: bool,

    /// Strip accents before matching
    #[arg(long)]
    pub fold_accents: bool,
}

impl DictionaryArgs {
    /// Build the dictionary configuration from the config file and flags.
    pub fn to_config(&self) -> Result<DictionaryConfig> {
        let mut config = match &self.config {
            Some(path) => DictionaryConfig::from_json_file(path)?,
            None => DictionaryConfig::default(),
        };
        if let Some(max_distance) = self.max_distance {
            config.max_distance = max_distance;
        }
        if let Some(max_word_length) = self.max_word_length {
            config.max_word_length = max_word_length;
        }
        if self.transpositions {
            config.metric = EditMetric::OptimalStringAlignment;
        }
        Ok(config)
    }
}

/// Arguments for `match` and `check`
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Maximum edit distance of the lookup (default: the dictionary maximum)
    #[arg(short, long)]
    pub distance: Option<usize>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
