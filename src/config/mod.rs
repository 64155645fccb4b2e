pub mod rules_file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Direction of the optional Chinese script conversion applied to clean pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScriptConversion {
    Off,
    /// Convert Traditional characters to Simplified.
    Simplified,
    /// Convert Simplified characters to Traditional.
    Traditional,
}

/// Which side of the pair the conversion is applied to. Corpus-direction
/// dependent, so it is explicit configuration rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConvertSide {
    Source,
    Target,
    Both,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "merge-bilingual")]
#[command(about = "Merge line-aligned bilingual text files into a filtered CSV corpus")]
pub struct CliConfig {
    #[arg(long, help = "Path to the source-text file, one segment per line")]
    pub st: String,

    #[arg(long, help = "Path to the target-text file, line-aligned with --st")]
    pub tt: String,

    #[arg(long, help = "Path for the clean merged CSV (source,target)")]
    pub output: String,

    #[arg(
        long,
        help = "Path for filtered-out pairs (source,target,reason); when omitted, dirty pairs are dropped"
    )]
    pub dirty: Option<String>,

    #[arg(
        long,
        value_enum,
        default_value = "off",
        help = "Chinese script conversion applied to clean pairs"
    )]
    pub convert: ScriptConversion,

    #[arg(
        long,
        value_enum,
        default_value = "target",
        help = "Which side of the pair the conversion applies to"
    )]
    pub convert_side: ConvertSide,

    #[arg(long, help = "Use the idiom-aware conversion dictionaries")]
    pub convert_idiom: bool,

    #[arg(long, help = "Also filter lines carrying {\\...} ASS styling tags")]
    pub filter_ass_tags: bool,

    #[arg(long, help = "Also filter pairs whose target equals the source")]
    pub filter_duplicates: bool,

    #[arg(
        long,
        help = "Also filter pairs whose target ends with the source text (untranslated bilingual content)"
    )]
    pub filter_bilingual: bool,

    #[arg(long, help = "TOML file with additional corpus-specific rules")]
    pub rules: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn st_path(&self) -> &str {
        &self.st
    }

    fn tt_path(&self) -> &str {
        &self.tt
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn dirty_path(&self) -> Option<&str> {
        self.dirty.as_deref()
    }

    fn conversion(&self) -> ScriptConversion {
        self.convert
    }

    fn convert_side(&self) -> ConvertSide {
        self.convert_side
    }

    fn convert_idiom(&self) -> bool {
        self.convert_idiom
    }

    fn filter_ass_tags(&self) -> bool {
        self.filter_ass_tags
    }

    fn filter_duplicates(&self) -> bool {
        self.filter_duplicates
    }

    fn filter_bilingual(&self) -> bool {
        self.filter_bilingual
    }

    fn rules_path(&self) -> Option<&str> {
        self.rules.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("st", &self.st)?;
        validate_path("tt", &self.tt)?;
        validate_path("output", &self.output)?;
        validate_distinct_paths("output", &self.output, &[&self.st, &self.tt])?;

        if let Some(dirty) = &self.dirty {
            validate_path("dirty", dirty)?;
            validate_distinct_paths("dirty", dirty, &[&self.st, &self.tt, &self.output])?;
        }

        if let Some(rules) = &self.rules {
            validate_path("rules", rules)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            st: "st.txt".to_string(),
            tt: "tt.txt".to_string(),
            output: "clean.csv".to_string(),
            dirty: Some("dirty.csv".to_string()),
            convert: ScriptConversion::Off,
            convert_side: ConvertSide::Target,
            convert_idiom: false,
            filter_ass_tags: false,
            filter_duplicates: false,
            filter_bilingual: false,
            rules: None,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_output_must_not_overwrite_input() {
        let mut cfg = config();
        cfg.output = cfg.st.clone();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_dirty_must_not_overwrite_output() {
        let mut cfg = config();
        cfg.dirty = Some(cfg.output.clone());
        assert!(cfg.validate().is_err());
    }
}
