use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::models::{Category, ClassifiedSentence, DocumentAnalysis, Failure};

/// Render a colored terminal summary of one run.
pub fn render(
    documents: &[DocumentAnalysis],
    dataset: &[ClassifiedSentence],
    failures: &[Failure],
    input: &Path,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let high_count = count(dataset, Category::HighRisk);
    let low_count = count(dataset, Category::LowRisk);
    let positive_count = count(dataset, Category::PositivePoint);

    if quiet {
        println!(
            "Documents: {}  Rows: {}  High: {}  Low: {}  Positive: {}  Failed: {}",
            documents.len(),
            dataset.len(),
            high_count.to_string().red(),
            low_count.to_string().yellow(),
            positive_count.to_string().green(),
            failures.len(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "clause-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", input.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Documents scanned  : {}", documents.len())
    );
    println!(
        " │  {:<48} │",
        format!("Unique dataset rows: {}", dataset.len())
    );
    println!(
        " │  {:<48} │",
        format!("{}  High Risk       : {:>4}", "✗".red(), high_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Low Risk        : {:>4}", "⚠".yellow(), low_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Positive Point  : {:>4}", "✓".green(), positive_count)
    );
    println!(
        " │  {:<48} │",
        format!("Failed documents   : {}", failures.len())
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if !failures.is_empty() {
        println!(" {} Documents skipped:\n", "[ERROR]".red().bold());
        for failure in failures {
            println!("   {} — {}", failure.name, failure.reason);
        }
        println!();
    }

    if verbose && !documents.is_empty() {
        println!(" {} Per-document breakdown:\n", "[DOCS]".cyan().bold());
        render_table(documents);
        println!();
    }

    Ok(())
}

fn render_table(documents: &[DocumentAnalysis]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Document").add_attribute(Attribute::Bold),
            Cell::new("High Risk").add_attribute(Attribute::Bold),
            Cell::new("Low Risk").add_attribute(Attribute::Bold),
            Cell::new("Positive Point").add_attribute(Attribute::Bold),
            Cell::new("Total").add_attribute(Attribute::Bold),
        ]);

    for doc in documents {
        table.add_row(vec![
            Cell::new(&doc.name),
            Cell::new(doc.in_category(Category::HighRisk).count())
                .set_alignment(CellAlignment::Right),
            Cell::new(doc.in_category(Category::LowRisk).count())
                .set_alignment(CellAlignment::Right),
            Cell::new(doc.in_category(Category::PositivePoint).count())
                .set_alignment(CellAlignment::Right),
            Cell::new(doc.sentences.len()).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

fn count(dataset: &[ClassifiedSentence], category: Category) -> usize {
    dataset.iter().filter(|s| s.category == category).count()
}
