//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{FastSpellArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::DictionaryMatch;

/// Best match of one looked-up word.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchReport {
    pub query: String,
    pub result: Option<DictionaryMatch>,
}

/// Existence check of one looked-up word.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub query: String,
    pub found: bool,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsReport {
    pub words: usize,
    pub variants: usize,
    pub postings: usize,
    pub max_distance: usize,
    pub max_word_length: usize,
    pub metric: String,
    pub normalizer: String,
    pub build_ms: u64,
}

/// Render a value in the requested output format.
pub trait HumanOutput {
    fn human(&self) -> String;
}

impl HumanOutput for Vec<MatchReport> {
    fn human(&self) -> String {
        self.iter()
            .map(|report| match &report.result {
                Some(m) => format!("{}\t{}\td={}\tc={}", report.query, m.word, m.distance, m.count),
                None => format!("{}\t-", report.query),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for Vec<CheckReport> {
    fn human(&self) -> String {
        self.iter()
            .map(|report| {
                let status = if report.found { "yes" } else { "no" };
                format!("{}\t{status}", report.query)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for StatsReport {
    fn human(&self) -> String {
        [
            format!("Words:           {}", self.words),
            format!("Variants:        {}", self.variants),
            format!("Postings:        {}", self.postings),
            format!("Max distance:    {}", self.max_distance),
            format!("Max word length: {}", self.max_word_length),
            format!("Metric:          {}", self.metric),
            format!("Normalizer:      {}", self.normalizer),
            format!("Build time:      {} ms", self.build_ms),
        ]
        .join("\n")
    }
}

/// Format a result according to the CLI output options.
pub fn format_output<T>(value: &T, cli_args: &FastSpellArgs) -> Result<String>
where
    T: Serialize + HumanOutput,
{
    match cli_args.output_format {
        OutputFormat::Human => Ok(value.human()),
        OutputFormat::Json if cli_args.pretty => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
    }
}

/// Print a result according to the CLI output options.
pub fn output_result<T>(value: &T, cli_args: &FastSpellArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    println!("{}", format_output(value, cli_args)?);
    Ok(())
}
