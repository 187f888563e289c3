use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Malformed record in {source_name} at line {line}: {reason}")]
    MalformedRecord {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    System,
    Matching,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl MatchError {
    pub fn malformed(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        MatchError::MalformedRecord {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::MalformedRecord { .. } | MatchError::SerializationError(_) => {
                ErrorCategory::Input
            }
            MatchError::IoError(_) => ErrorCategory::System,
            MatchError::Pattern(_) => ErrorCategory::Matching,
            MatchError::ConfigValidationError { .. } | MatchError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 沒有可重試的錯誤：所有錯誤都會終止整個批次
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MatchError::MalformedRecord { source_name, line, .. } => format!(
                "Fix line {} of '{}': every line must be one JSON object with the required string fields",
                line, source_name
            ),
            MatchError::IoError(_) => {
                "Check that the input files exist and the output location is writable".to_string()
            }
            MatchError::SerializationError(_) => {
                "Check that listing records contain only JSON-encodable values".to_string()
            }
            MatchError::Pattern(_) => {
                "A product model is too long to compile into a pattern; shorten or remove it"
                    .to_string()
            }
            MatchError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            MatchError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::MalformedRecord { source_name, line, reason } => {
                format!("Could not read '{}' (line {}): {}", source_name, line, reason)
            }
            MatchError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
