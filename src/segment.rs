//! Sentence segmentation over cleaned text.
//!
//! Boundary detection is delegated to UAX#29 segmentation
//! (`unicode-segmentation`); this module adds the noise filter that keeps
//! headers and fragments misread as sentences out of every downstream output.

use unicode_segmentation::UnicodeSegmentation;

/// Sentences with fewer whitespace-delimited tokens than this are discarded.
pub const MIN_TOKENS: usize = 3;

/// Segment cleaned text into trimmed sentences, dropping fragments below
/// [`MIN_TOKENS`]. Lazy and restartable — call again on the same text for a
/// fresh pass.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| s.split_whitespace().count() >= MIN_TOKENS)
}
