use crate::models::Category;
use crate::risk::lexicon::Lexicon;

/// Classify one sentence into at most one category.
///
/// The sentence is lowercased once, then the lexicon entries are tried in
/// their fixed order — Positive Point, High Risk, Low Risk — and the first
/// category with any phrase occurring as a literal substring wins. A sentence
/// containing both a reassuring phrase and a risk phrase is therefore
/// reported as positive, never as risky. `None` means no signal, not an
/// error; unclassified sentences are excluded from every output.
pub fn classify(lexicon: &Lexicon, sentence: &str) -> Option<Category> {
    let lowered = sentence.to_lowercase();

    lexicon
        .entries()
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| lowered.contains(p.as_str())))
        .map(|(category, _)| *category)
}
