//! `clause-checkr` — scan terms-of-service documents and flag risky clauses.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the lexicon config ([`config::load_config`]) and build the ordered
//!    lexicon ([`risk::lexicon`]).
//! 3. List `.txt` documents in lexicographic order ([`corpus::list_documents`]).
//! 4. Clean each document and persist it to the cleaned directory ([`cleaner`]).
//! 5. Re-read each cleaned document; segment, filter, and classify its
//!    sentences ([`segment`], [`risk::classifier`]); aggregate corpus-wide with
//!    duplicate suppression ([`corpus::CorpusAggregator`]).
//! 6. Emit the labeled dataset ([`report::dataset`]) and per-document reports
//!    ([`report::document`]); render the requested summary ([`report`]).
//! 7. Exit `0` (clean) or `1` (at least one skipped document).

mod cleaner;
mod cli;
mod config;
mod corpus;
mod models;
mod report;
mod risk;
mod segment;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, ReportFormat};
use config::load_config;
use corpus::{analyze_text, list_documents, CorpusAggregator};
use models::Failure;
use risk::lexicon::Lexicon;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.lexicon.as_deref())?;
    let lexicon = Lexicon::from_config(&config.lexicon);

    // Degenerate-lexicon check: an empty category can never match.
    for category in lexicon.empty_categories() {
        eprintln!(
            "{} lexicon has no phrases for {}; it will never match",
            "warning:".yellow().bold(),
            category
        );
    }

    let raw_docs = list_documents(&cli.input)
        .with_context(|| format!("reading input directory {}", cli.input.display()))?;

    if raw_docs.is_empty() {
        eprintln!("No .txt documents found in {}", cli.input.display());
        std::process::exit(1);
    }

    let mut failures: Vec<Failure> = Vec::new();

    // Cleaning stage: raw corpus → cleaned corpus directory on disk. The
    // analysis stage reads the cleaned files back rather than reusing the
    // in-memory strings, so the intermediate artifact round-trips.
    std::fs::create_dir_all(&cli.cleaned_dir)
        .with_context(|| format!("creating {}", cli.cleaned_dir.display()))?;

    let mut cleaned_count = 0usize;
    for path in &raw_docs {
        let name = document_name(path);
        let result = std::fs::read_to_string(path).and_then(|raw| {
            std::fs::write(cli.cleaned_dir.join(&name), cleaner::clean(&raw))
        });

        match result {
            Ok(()) => cleaned_count += 1,
            Err(err) if cli.strict => {
                return Err(err).with_context(|| format!("cleaning {}", path.display()));
            }
            Err(err) => failures.push(Failure {
                name,
                reason: err.to_string(),
            }),
        }
    }

    if !cli.quiet {
        eprintln!(
            "  {} cleaned {} of {} documents into {}",
            "→".cyan(),
            cleaned_count,
            raw_docs.len(),
            cli.cleaned_dir.display()
        );
    }

    if cli.clean_only {
        if !failures.is_empty() {
            for failure in &failures {
                eprintln!("  {} {} — {}", "✗".red(), failure.name, failure.reason);
            }
            std::process::exit(1);
        }
        return Ok(());
    }

    // Analysis stage, in the same lexicographic order as cleaning.
    let cleaned_docs = list_documents(&cli.cleaned_dir)
        .with_context(|| format!("reading cleaned directory {}", cli.cleaned_dir.display()))?;

    let pb = if !cli.quiet {
        let pb = ProgressBar::new(cleaned_docs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut aggregator = CorpusAggregator::new();
    for path in &cleaned_docs {
        let name = document_name(path);
        match std::fs::read_to_string(path) {
            Ok(text) => aggregator.add_document(name, analyze_text(&lexicon, &text)),
            Err(err) if cli.strict => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
            Err(err) => failures.push(Failure {
                name,
                reason: err.to_string(),
            }),
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    report::dataset::write_csv(aggregator.dataset(), &cli.dataset)
        .with_context(|| format!("writing dataset {}", cli.dataset.display()))?;

    let reports_written = report::document::write_reports(aggregator.documents(), &cli.reports_dir)
        .with_context(|| format!("writing reports to {}", cli.reports_dir.display()))?;

    if !cli.quiet {
        eprintln!(
            "  {} wrote {} dataset rows to {}",
            "→".cyan(),
            aggregator.dataset().len(),
            cli.dataset.display()
        );
        eprintln!(
            "  {} wrote {} per-document reports to {}",
            "→".cyan(),
            reports_written,
            cli.reports_dir.display()
        );
    }

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(
            aggregator.documents(),
            aggregator.dataset(),
            &failures,
            &cli.input,
            cli.verbose,
            cli.quiet,
        )?,
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(aggregator.dataset())?);
        }
    }

    // Exit code: 1 if any document was skipped
    if !failures.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
