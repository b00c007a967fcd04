//! Keyword-based risk classification.
//!
//! - [`lexicon`] — ordered (category, phrase-set) pairs; the order is the
//!   match priority.
//! - [`classifier`] — entry point mapping one sentence to at most one
//!   [`Category`](crate::models::Category).

pub mod classifier;
pub mod lexicon;
