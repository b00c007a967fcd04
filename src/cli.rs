use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "clause-checkr",
    about = "Scan terms-of-service and privacy-policy documents and flag risky clauses",
    version
)]
pub struct Cli {
    /// Directory of raw .txt documents to scan
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Directory for the cleaned copy of each document (created if absent)
    #[arg(long, value_name = "DIR", default_value = "cleaned")]
    pub cleaned_dir: PathBuf,

    /// Directory for per-document categorized reports (created if absent)
    #[arg(long, value_name = "DIR", default_value = "categorized")]
    pub reports_dir: PathBuf,

    /// Output path for the corpus-wide labeled dataset
    #[arg(long, value_name = "FILE", default_value = "dataset.csv")]
    pub dataset: PathBuf,

    /// Lexicon file [default: ./.clause-checkr/lexicon.toml, fallback ~/.config/clause-checkr/lexicon.toml]
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Run only the cleaning stage, skip classification and outputs
    #[arg(long)]
    pub clean_only: bool,

    /// Abort on the first unreadable document instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Show a per-document breakdown in the terminal report
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
