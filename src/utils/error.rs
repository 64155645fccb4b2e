use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Input files are misaligned: {st_path} has {st_lines} lines, {tt_path} has {tt_lines} lines")]
    MisalignedInput {
        st_path: String,
        st_lines: usize,
        tt_path: String,
        tt_lines: usize,
    },

    #[error("Invalid UTF-8 in {path} at line {line}")]
    EncodingError { path: String, line: usize },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Script conversion error: {message}")]
    ConversionError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, MergeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MergeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MergeError::ConfigError { .. }
            | MergeError::InvalidConfigValueError { .. }
            | MergeError::MissingConfigError { .. }
            | MergeError::ConversionError { .. } => ErrorCategory::Configuration,
            MergeError::InputNotFound { .. } | MergeError::MisalignedInput { .. } => {
                ErrorCategory::Input
            }
            MergeError::EncodingError { .. } => ErrorCategory::Processing,
            MergeError::CsvError(_) | MergeError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MergeError::InputNotFound { path } => {
                format!("Cannot find the input file '{}'", path)
            }
            MergeError::MisalignedInput {
                st_path,
                st_lines,
                tt_path,
                tt_lines,
            } => format!(
                "The inputs are not line-aligned: '{}' has {} lines but '{}' has {}",
                st_path, st_lines, tt_path, tt_lines
            ),
            MergeError::EncodingError { path, line } => {
                format!("'{}' is not valid UTF-8 at line {}", path, line)
            }
            MergeError::ConversionError { message } => {
                format!("Script conversion is unavailable: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MergeError::InputNotFound { .. } => {
                "Check the --st and --tt paths and that the files are readable"
            }
            MergeError::MisalignedInput { .. } => {
                "Re-export the corpus so both files carry one segment per line, or trim the longer file"
            }
            MergeError::EncodingError { .. } => {
                "Re-encode the input as UTF-8 (e.g. iconv -t UTF-8) and retry"
            }
            MergeError::ConversionError { .. } => {
                "Check the --convert/--convert-idiom combination"
            }
            MergeError::ConfigError { .. }
            | MergeError::InvalidConfigValueError { .. }
            | MergeError::MissingConfigError { .. } => {
                "Run with --help to review the expected arguments"
            }
            MergeError::CsvError(_) | MergeError::IoError(_) => {
                "Check disk space and write permissions for the output paths"
            }
        }
    }
}
