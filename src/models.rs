use serde::{Deserialize, Serialize};

/// Risk category assignable to a sentence.
///
/// Two orders matter and they differ on purpose:
/// - [`Category::MATCH_ORDER`] — classification priority (first match wins),
/// - [`Category::DISPLAY_ORDER`] — section order in per-document reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Positive Point")]
    PositivePoint,
    #[serde(rename = "High Risk")]
    HighRisk,
    #[serde(rename = "Low Risk")]
    LowRisk,
}

impl Category {
    /// Classification priority: a sentence matching a reassuring phrase is
    /// reported as positive even if it also contains a risk phrase.
    pub const MATCH_ORDER: [Category; 3] =
        [Category::PositivePoint, Category::HighRisk, Category::LowRisk];

    /// Section order in per-document reports.
    pub const DISPLAY_ORDER: [Category; 3] =
        [Category::HighRisk, Category::LowRisk, Category::PositivePoint];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::PositivePoint => write!(f, "Positive Point"),
            Category::HighRisk => write!(f, "High Risk"),
            Category::LowRisk => write!(f, "Low Risk"),
        }
    }
}

/// A sentence paired with the single category it matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedSentence {
    pub text: String,
    pub category: Category,
}

/// One document's classified sentences, in document-appearance order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// File name of the source document; reused as the report file name.
    pub name: String,
    pub sentences: Vec<ClassifiedSentence>,
}

impl DocumentAnalysis {
    /// Sentences in `category`, preserving appearance order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &str> {
        self.sentences
            .iter()
            .filter(move |s| s.category == category)
            .map(|s| s.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A document that could not be read or written during the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Failure {
    pub name: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(Category::PositivePoint.to_string(), "Positive Point");
        assert_eq!(Category::HighRisk.to_string(), "High Risk");
        assert_eq!(Category::LowRisk.to_string(), "Low Risk");
    }

    #[test]
    fn test_orders_differ() {
        assert_eq!(Category::MATCH_ORDER[0], Category::PositivePoint);
        assert_eq!(Category::DISPLAY_ORDER[0], Category::HighRisk);
    }

    #[test]
    fn test_json_uses_canonical_labels() {
        let row = ClassifiedSentence {
            text: "We do not sell your data.".to_string(),
            category: Category::PositivePoint,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"Positive Point\""));
    }

    #[test]
    fn test_in_category_preserves_order() {
        let doc = DocumentAnalysis {
            name: "a.txt".to_string(),
            sentences: vec![
                ClassifiedSentence {
                    text: "first".to_string(),
                    category: Category::HighRisk,
                },
                ClassifiedSentence {
                    text: "other".to_string(),
                    category: Category::LowRisk,
                },
                ClassifiedSentence {
                    text: "second".to_string(),
                    category: Category::HighRisk,
                },
            ],
        };
        let high: Vec<&str> = doc.in_category(Category::HighRisk).collect();
        assert_eq!(high, vec!["first", "second"]);
    }
}
