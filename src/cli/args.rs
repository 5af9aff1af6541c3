//! Command line argument parsing for the mwe-detector CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::annotation::pos::PartOfSpeech;
use crate::filter::FilterId;

/// mwe-detector - Lexicon-based multi-word expression detection
#[derive(Parser, Debug, Clone)]
#[command(name = "mwe-detector")]
#[command(about = "Train and apply a lexicon of multi-word expressions over annotated corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MweArgs {
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

impl MweArgs {
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
    /// Train a lexicon from a gold-labelled CUPT corpus
    Train(TrainArgs),

    /// Label the expressions of a CUPT corpus
    Detect(DetectArgs),

    /// Show what a trained lexicon contains
    Inspect(InspectArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Gold-labelled CUPT corpus
    #[arg(short, long, value_name = "CUPT_FILE")]
    pub corpus: PathBuf,

    /// Language code the lexicon is stored under
    #[arg(short, long)]
    pub lang: String,

    /// Directory holding per-language lexicons
    #[arg(short, long, value_name = "DIR", default_value = "models")]
    pub model_dir: PathBuf,

    /// JSON rank table used to order component lemmas
    #[arg(short, long, value_name = "RANK_FILE")]
    pub rank: Option<PathBuf>,

    /// Name of the label column in '# global.columns'
    #[arg(long)]
    pub label_column: Option<String>,

    /// Filters for one part of speech, e.g. NOUN=f1,f7 (repeatable)
    #[arg(long = "filters", value_name = "POS=IDS", value_parser = parse_filter_assignment)]
    pub filters: Vec<FilterAssignment>,

    /// Continue training the stored lexicon instead of starting over
    #[arg(long)]
    pub update: bool,

    /// Apply the language's built-in lemma normalizer
    #[arg(long)]
    pub normalize: bool,
}

/// Arguments for detection
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// CUPT corpus to label
    #[arg(short, long, value_name = "CUPT_FILE")]
    pub corpus: PathBuf,

    /// Language code of the lexicon
    #[arg(short, long)]
    pub lang: String,

    /// Directory holding per-language lexicons
    #[arg(short, long, value_name = "DIR", default_value = "models")]
    pub model_dir: PathBuf,

    /// Name of the label column in '# global.columns'
    #[arg(long)]
    pub label_column: Option<String>,

    /// Apply the language's built-in lemma normalizer
    #[arg(long)]
    pub normalize: bool,
}

/// Arguments for inspecting a lexicon
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Language code of the lexicon
    #[arg(short, long)]
    pub lang: String,

    /// Directory holding per-language lexicons
    #[arg(short, long, value_name = "DIR", default_value = "models")]
    pub model_dir: PathBuf,

    /// List every entry
    #[arg(long)]
    pub entries: bool,
}

/// Filters selected for one part of speech on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterAssignment {
    pub pos: PartOfSpeech,
    pub filters: Vec<FilterId>,
}

/// Parse `POS=f1,f2`. An empty list disables every filter for the tag.
pub fn parse_filter_assignment(value: &str) -> std::result::Result<FilterAssignment, String> {
    let (pos, ids) = value
        .split_once('=')
        .ok_or_else(|| format!("expected POS=IDS, got '{value}'"))?;
    let pos = pos.trim().parse::<PartOfSpeech>().map_err(|e| e.to_string())?;
    let filters = ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| id.parse::<FilterId>().map_err(|e| e.to_string()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(FilterAssignment { pos, filters })
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
