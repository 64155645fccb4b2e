use crate::config::{ConvertSide, ScriptConversion};
use crate::domain::model::LinePair;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MergeError, Result};
use ferrous_opencc::config::BuiltinConfig;
use ferrous_opencc::OpenCC;

/// Optional Chinese script conversion stage. The OpenCC dictionaries are
/// loaded once at construction; `apply` itself is total and idempotent.
pub struct ScriptNormalizer {
    converter: Option<OpenCC>,
    side: ConvertSide,
}

impl std::fmt::Debug for ScriptNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptNormalizer")
            .field("converter", &self.converter.is_some())
            .field("side", &self.side)
            .finish()
    }
}

impl ScriptNormalizer {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        // Standard OpenCC config names; the idiom variants also localize
        // region-specific phrasing.
        let converter = match config.conversion() {
            ScriptConversion::Off => None,
            ScriptConversion::Simplified => Some(load_converter(if config.convert_idiom() {
                "tw2sp.json"
            } else {
                "t2s.json"
            })?),
            ScriptConversion::Traditional => Some(load_converter(if config.convert_idiom() {
                "s2twp.json"
            } else {
                "s2t.json"
            })?),
        };

        Ok(Self {
            converter,
            side: config.convert_side(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.converter.is_some()
    }

    pub fn apply(&self, pair: &mut LinePair) {
        let Some(converter) = &self.converter else {
            return;
        };

        match self.side {
            ConvertSide::Source => pair.source = converter.convert(&pair.source),
            ConvertSide::Target => pair.target = converter.convert(&pair.target),
            ConvertSide::Both => {
                pair.source = converter.convert(&pair.source);
                pair.target = converter.convert(&pair.target);
            }
        }
    }
}

fn load_converter(config_name: &str) -> Result<OpenCC> {
    let builtin =
        BuiltinConfig::from_filename(config_name).map_err(|e| MergeError::ConversionError {
            message: format!("failed to load OpenCC config {}: {}", config_name, e),
        })?;
    OpenCC::from_config(builtin).map_err(|e| MergeError::ConversionError {
        message: format!("failed to load OpenCC config {}: {}", config_name, e),
    })
}
