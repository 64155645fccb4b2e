use crate::utils::error::{MergeError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};

/// Extra corpus-specific rules loaded from a TOML file:
///
/// ```toml
/// [[rule]]
/// name = "music-cue"
/// pattern = "♪"
/// applies_to = "both"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesFile {
    #[serde(default)]
    pub rule: Vec<CustomRuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRuleConfig {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub applies_to: RuleSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleSide {
    Source,
    Target,
    #[default]
    Both,
}

impl RulesFile {
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MergeError::InputNotFound {
                    path: path.to_string(),
                }
            } else {
                MergeError::IoError(e)
            }
        })?;

        let parsed: RulesFile = toml::from_str(&raw).map_err(|e| MergeError::ConfigError {
            message: format!("failed to parse rules file {}: {}", path, e),
        })?;

        for rule in &parsed.rule {
            validate_non_empty_string("rule.name", &rule.name)?;
            validate_non_empty_string("rule.pattern", &rule.pattern)?;
        }

        Ok(parsed)
    }
}
