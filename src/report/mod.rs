//! Emitters for the aggregated analysis results.
//!
//! - [`dataset`] — corpus-wide labeled CSV (`Sentence,Label`), one row per
//!   unique classified sentence.
//! - [`document`] — one categorized text report per document.
//! - [`terminal`] — colored summary; respects `--verbose` / `--quiet`.

pub mod dataset;
pub mod document;
pub mod terminal;
