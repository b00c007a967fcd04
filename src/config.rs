use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.clause-checkr/lexicon.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Trigger phrases per risk category.
    pub lexicon: LexiconConfig,
}

/// Phrase lists keyed by category. A missing key is an empty list; an empty
/// category never matches and is flagged at startup.
#[derive(Debug, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub positive_point: Vec<String>,
    #[serde(default)]
    pub high_risk: Vec<String>,
    #[serde(default)]
    pub low_risk: Vec<String>,
}

impl Default for Config {
    /// Built-in lexicon used when no config file is found.
    fn default() -> Self {
        let positive_point = [
            "we will not",
            "encrypt user data",
            "we do not sell your data",
            "data anonymization practices",
            "user control over data",
            "right to access your data",
            "complies with gdpr",
            "allows data deletion upon request",
            "data breach notifications",
            "transparent data processing policies",
            "we respect your privacy",
            "opt-in required for marketing",
            "offer secure communication",
            "protect your data with ssl",
            "third-party access is limited",
            "no sharing without user consent",
            "provide data portability options",
            "store data within secure facilities",
            "audit and compliance standards",
        ];
        let high_risk = [
            "share with third parties",
            "sell your data",
            "retain indefinitely",
            "no liability",
            "collect personal information",
            "may disclose your data",
            "at your own risk",
            "we are not responsible",
            "waive your rights",
            "binding arbitration",
            "unilateral termination",
            "subject to change without notice",
            "you agree to indemnify",
            "third-party advertising",
            "may use your data for marketing",
            "without your consent",
            "tracking your activity",
            "location tracking without permission",
            "no refunds",
            "transfer your data",
            "access your data for any purpose",
            "perpetual license",
            "automatic renewal of subscription",
            "user responsibility for data breaches",
        ];
        let low_risk = [
            "may collect anonymized data",
            "use cookies to track",
            "may use your data",
            "data retention policy",
            "requires opt-out",
            "store usage data",
            "contact us for data deletion",
            "share with affiliates",
            "may use analytics tools",
            "aggregated data may be shared",
            "data processed outside your country",
            "may send promotional emails",
            "retain data for compliance",
            "user-generated content",
            "data used for improving services",
            "your responsibility to review updates",
            "service disruptions",
            "no guarantees of service availability",
        ];

        let to_vec = |phrases: &[&str]| phrases.iter().map(|p| p.to_string()).collect();

        Config {
            lexicon: LexiconConfig {
                positive_point: to_vec(&positive_point),
                high_risk: to_vec(&high_risk),
                low_risk: to_vec(&low_risk),
            },
        }
    }
}

/// Load the lexicon configuration, searching in order:
///
/// 1. `config_override` — path passed via `--lexicon`
/// 2. `./.clause-checkr/lexicon.toml`
/// 3. `~/.config/clause-checkr/lexicon.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".clause-checkr").join("lexicon.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("clause-checkr")
            .join("lexicon.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_lexicon_is_populated() {
        let cfg = Config::default();
        assert!(!cfg.lexicon.positive_point.is_empty());
        assert!(!cfg.lexicon.high_risk.is_empty());
        assert!(!cfg.lexicon.low_risk.is_empty());
        assert!(cfg
            .lexicon
            .positive_point
            .contains(&"we do not sell your data".to_string()));
    }

    #[test]
    fn test_load_override_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[lexicon]").unwrap();
        writeln!(f, "positive_point = [\"we keep you safe\"]").unwrap();
        writeln!(f, "high_risk = [\"sell your data\"]").unwrap();

        let cfg = load_config(Some(f.path())).unwrap();
        assert_eq!(cfg.lexicon.positive_point, vec!["we keep you safe"]);
        assert_eq!(cfg.lexicon.high_risk, vec!["sell your data"]);
        // Missing key defaults to empty
        assert!(cfg.lexicon.low_risk.is_empty());
    }

    #[test]
    fn test_missing_override_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/lexicon.toml"))).is_err());
    }
}
