//! Corpus-wide analysis driving and aggregation.
//!
//! The run-scoped state — the seen-sentence set and the deduplicated dataset
//! accumulator — lives on [`CorpusAggregator`], constructed per run and never
//! held in module-level statics.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::{ClassifiedSentence, DocumentAnalysis};
use crate::risk::classifier::classify;
use crate::risk::lexicon::Lexicon;
use crate::segment;

/// List `.txt` documents directly under `dir`, sorted lexicographically by
/// file name. Directory listing order is platform-dependent; the sort makes
/// the processing order — and therefore which document wins a cross-document
/// duplicate — deterministic.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map(|ext| ext == "txt").unwrap_or(false)
        })
        .collect();

    paths.sort();
    Ok(paths)
}

/// Segment, filter, and classify one cleaned document. Unclassified
/// sentences are dropped; order of appearance is preserved.
pub fn analyze_text(lexicon: &Lexicon, text: &str) -> Vec<ClassifiedSentence> {
    segment::sentences(text)
        .filter_map(|sentence| {
            classify(lexicon, sentence).map(|category| ClassifiedSentence {
                text: sentence.to_string(),
                category,
            })
        })
        .collect()
}

/// Merges per-document results into the corpus-wide views.
///
/// The dataset keeps the first occurrence of each exact sentence text
/// (case-sensitive, trimmed) across all documents added so far; per-document
/// results are kept as-is, without cross-document deduplication.
pub struct CorpusAggregator {
    seen: HashSet<String>,
    dataset: Vec<ClassifiedSentence>,
    documents: Vec<DocumentAnalysis>,
}

impl CorpusAggregator {
    pub fn new() -> Self {
        CorpusAggregator {
            seen: HashSet::new(),
            dataset: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Record one document's classified sentences. Documents must be added in
    /// the chosen processing order; the first document to contribute a
    /// sentence text owns its dataset row.
    pub fn add_document(&mut self, name: impl Into<String>, sentences: Vec<ClassifiedSentence>) {
        for sentence in &sentences {
            if !self.seen.contains(&sentence.text) {
                self.seen.insert(sentence.text.clone());
                self.dataset.push(sentence.clone());
            }
        }

        self.documents.push(DocumentAnalysis {
            name: name.into(),
            sentences,
        });
    }

    /// Corpus-wide deduplicated dataset, in discovery order.
    pub fn dataset(&self) -> &[ClassifiedSentence] {
        &self.dataset
    }

    /// Per-document results, in processing order.
    pub fn documents(&self) -> &[DocumentAnalysis] {
        &self.documents
    }
}

impl Default for CorpusAggregator {
    fn default() -> Self {
        Self::new()
    }
}
