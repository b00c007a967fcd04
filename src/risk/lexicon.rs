use crate::config::LexiconConfig;
use crate::models::Category;

/// Trigger phrases per category, held in classification-priority order:
/// Positive Point, then High Risk, then Low Risk. Phrases are lowercased once
/// here; matching is case-insensitive substring lookup.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<(Category, Vec<String>)>,
}

impl Lexicon {
    pub fn from_config(config: &LexiconConfig) -> Self {
        let lowered =
            |phrases: &[String]| phrases.iter().map(|p| p.to_lowercase()).collect::<Vec<_>>();

        Lexicon {
            entries: vec![
                (Category::PositivePoint, lowered(&config.positive_point)),
                (Category::HighRisk, lowered(&config.high_risk)),
                (Category::LowRisk, lowered(&config.low_risk)),
            ],
        }
    }

    /// Entries in match-priority order.
    pub fn entries(&self) -> &[(Category, Vec<String>)] {
        &self.entries
    }

    /// Categories with no phrases — they can never match.
    pub fn empty_categories(&self) -> Vec<Category> {
        self.entries
            .iter()
            .filter(|(_, phrases)| phrases.is_empty())
            .map(|(category, _)| *category)
            .collect()
    }
}
