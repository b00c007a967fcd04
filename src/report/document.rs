use std::path::Path;

use anyhow::Result;

use crate::models::{Category, DocumentAnalysis};

/// Render one document's report: a section per category in display order
/// (High Risk, Low Risk, Positive Point), one bulleted line per sentence,
/// a blank line after each section. Empty buckets keep their header.
pub fn render(doc: &DocumentAnalysis) -> String {
    let mut out = String::new();

    for category in Category::DISPLAY_ORDER {
        out.push_str(&format!("{}:\n", category));
        for sentence in doc.in_category(category) {
            out.push_str(&format!("  - {}\n", sentence));
        }
        out.push('\n');
    }

    out
}

/// Write one report file per document with at least one classified sentence,
/// named after the source document, into `out_dir` (created if absent).
/// Documents with nothing classified are skipped. Returns the number of
/// reports written.
pub fn write_reports(documents: &[DocumentAnalysis], out_dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(out_dir)?;

    let mut written = 0;
    for doc in documents {
        if doc.is_empty() {
            continue;
        }
        std::fs::write(out_dir.join(&doc.name), render(doc))?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassifiedSentence;

    fn sample_doc() -> DocumentAnalysis {
        DocumentAnalysis {
            name: "acme_tos.txt".to_string(),
            sentences: vec![
                ClassifiedSentence {
                    text: "We respect your privacy at all times.".to_string(),
                    category: Category::PositivePoint,
                },
                ClassifiedSentence {
                    text: "We may share with third parties.".to_string(),
                    category: Category::HighRisk,
                },
            ],
        }
    }

    #[test]
    fn test_render_section_order_and_bullets() {
        let rendered = render(&sample_doc());
        assert_eq!(
            rendered,
            "High Risk:\n  - We may share with third parties.\n\nLow Risk:\n\nPositive Point:\n  - We respect your privacy at all times.\n\n"
        );
    }

    #[test]
    fn test_empty_bucket_keeps_header() {
        let rendered = render(&sample_doc());
        assert!(rendered.contains("Low Risk:\n\n"));
    }

    #[test]
    fn test_write_reports_skips_empty_documents() {
        let dir = tempfile::tempdir().unwrap();
        let docs = vec![
            sample_doc(),
            DocumentAnalysis {
                name: "empty.txt".to_string(),
                sentences: Vec::new(),
            },
        ];

        let written = write_reports(&docs, dir.path()).unwrap();
        assert_eq!(written, 1);
        assert!(dir.path().join("acme_tos.txt").exists());
        assert!(!dir.path().join("empty.txt").exists());
    }

    #[test]
    fn test_write_reports_creates_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports").join("out");
        let written = write_reports(&[sample_doc()], &nested).unwrap();
        assert_eq!(written, 1);
        assert!(nested.join("acme_tos.txt").exists());
    }
}
