use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::scripts::ScriptLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "adinsight",
    about = "Analyze pasted ad-performance reports for winning themes, formats and keywords",
    version,
    long_about = None
)]
pub struct Args {
    /// Report files to analyze ("-" or nothing reads stdin)
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to custom theme pattern file
    #[arg(short = 't', long)]
    pub themes: Option<PathBuf>,

    /// Topic to generate ad script concepts for
    #[arg(long)]
    pub topic: Option<String>,

    /// Print the full script prompt for concept N (1-based, needs --topic)
    #[arg(long, value_name = "N")]
    pub expand: Option<usize>,

    /// Language of the full script prompt
    #[arg(short, long, value_enum, default_value_t = ScriptLanguage::English)]
    pub language: ScriptLanguage,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Initialize theme_patterns.txt with default themes
    #[arg(long)]
    pub init: bool,
}
