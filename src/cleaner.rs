//! Per-document text cleaning.
//!
//! Strips navigational boilerplate, HTML markup, and stray symbols, collapses
//! whitespace, and drops duplicate lines within the document. Pure and
//! idempotent; cross-document deduplication happens later at the sentence
//! level in [`corpus`](crate::corpus).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Navigational markers: the match point and the rest of the line are deleted.
static BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Subscribe|Sign In|Navigation|Menu|Home|Create an Account|FAQs).*").unwrap()
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&[a-z]+;").unwrap());
static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[^\w\s.,?!@'"-]"#).unwrap());
/// Whitespace runs without a newline collapse to one space; runs containing
/// one collapse to a single newline, preserving line structure for the
/// deduplication step.
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]+").unwrap());
static NEWLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\n\s*").unwrap());

/// Clean one raw document. Empty input yields an empty string.
pub fn clean(text: &str) -> String {
    let text = BOILERPLATE_RE.replace_all(text, "");
    let text = TAG_RE.replace_all(&text, " ");
    let text = ENTITY_RE.replace_all(&text, " ");
    let text = SYMBOL_RE.replace_all(&text, " ");
    let text = SPACE_RE.replace_all(&text, " ");
    let text = NEWLINE_RE.replace_all(&text, "\n");

    // Keep the first case-insensitive occurrence of each line.
    let mut seen: HashSet<String> = HashSet::new();
    let mut lines: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if seen.insert(line.to_lowercase()) {
            lines.push(line);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boilerplate_deletes_to_end_of_line() {
        let cleaned = clean("Your data is safe. Subscribe to our newsletter!\nSecond line here.");
        assert_eq!(cleaned, "Your data is safe.\nSecond line here.");
    }

    #[test]
    fn test_boilerplate_is_case_insensitive() {
        let cleaned = clean("please SIGN IN to continue\nReal content stays.");
        assert_eq!(cleaned, "please\nReal content stays.");
    }

    #[test]
    fn test_markup_stripped() {
        let cleaned = clean("<div class=\"x\">We value privacy</div> &amp; security.");
        assert_eq!(cleaned, "We value privacy security.");
    }

    #[test]
    fn test_symbols_filtered_common_punctuation_kept() {
        let cleaned = clean("Data* is #safe, isn't it? Yes! Email: a@b.com \"quoted\" -dash");
        assert_eq!(cleaned, "Data is safe, isn't it? Yes! Email a@b.com \"quoted\" -dash");
    }

    #[test]
    fn test_whitespace_collapsed_within_lines() {
        let cleaned = clean("too   many\t\tspaces here\nnext    line now");
        assert_eq!(cleaned, "too many spaces here\nnext line now");
    }

    #[test]
    fn test_duplicate_lines_dropped_case_insensitively() {
        let cleaned = clean("We may share data.\nWE MAY SHARE DATA.\nSomething else entirely.");
        assert_eq!(cleaned, "We may share data.\nSomething else entirely.");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let cleaned = clean("first line kept\n\n\n   \nsecond line kept");
        assert_eq!(cleaned, "first line kept\nsecond line kept");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t\n"), "");
    }

    #[test]
    fn test_idempotent() {
        let raw = "Terms of <b>Service</b>\nSubscribe now!\nWe may share data &amp; more.\nwe may share data & more.\nYour   rights* here.";
        let once = clean(raw);
        assert_eq!(clean(&once), once);
    }
}
