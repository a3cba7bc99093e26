use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Source file not found: {path}")]
    SourceNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Transform error: {message}")]
    TransformError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration key: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Transform,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl From<csv::Error> for EtlError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return EtlError::ParseError {
                message: err.to_string(),
            };
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => EtlError::IoError(io),
            other => EtlError::ParseError {
                message: format!("{:?}", other),
            },
        }
    }
}

impl EtlError {
    pub fn parse(message: impl Into<String>) -> Self {
        EtlError::ParseError {
            message: message.into(),
        }
    }

    pub fn transform(message: impl Into<String>) -> Self {
        EtlError::TransformError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        EtlError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::SourceNotFound { .. } | EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::ParseError { .. } => ErrorCategory::Parse,
            EtlError::TransformError { .. } => ErrorCategory::Transform,
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::SourceNotFound { .. } => ErrorSeverity::Medium,
            EtlError::IoError(_) => ErrorSeverity::Critical,
            EtlError::ParseError { .. } | EtlError::TransformError { .. } => ErrorSeverity::High,
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::SourceNotFound { path } => format!("Could not find input file '{}'", path),
            EtlError::IoError(e) => format!("File access failed: {}", e),
            EtlError::ParseError { message } => {
                format!("Input is not well-formed delimited text: {}", message)
            }
            EtlError::TransformError { message } => {
                format!("Could not derive columns: {}", message)
            }
            EtlError::ConfigError { message } => format!("Configuration is invalid: {}", message),
            EtlError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::SourceNotFound { .. } => "Check that source_path points to an existing file",
            EtlError::IoError(_) => {
                "Check that the destination directory exists and is writable"
            }
            EtlError::ParseError { .. } => {
                "Make sure the file is comma-separated with a header row and equal-width rows"
            }
            EtlError::TransformError { .. } => {
                "Make sure the revenue and cost columns contain only numbers"
            }
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => {
                "Provide both source_path and destination_path as non-empty paths"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: EtlError = csv::Error::from(io).into();
        assert!(matches!(err, EtlError::IoError(_)));
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_categories_and_severities() {
        let not_found = EtlError::SourceNotFound {
            path: "missing.csv".to_string(),
        };
        assert_eq!(not_found.category(), ErrorCategory::Io);
        assert_eq!(not_found.severity(), ErrorSeverity::Medium);
        assert!(not_found.user_friendly_message().contains("missing.csv"));

        let parse = EtlError::parse("bad row");
        assert_eq!(parse.category(), ErrorCategory::Parse);
        assert_eq!(parse.severity(), ErrorSeverity::High);

        let missing = EtlError::MissingConfigError {
            field: "source_path".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Config);
        assert_eq!(missing.to_string(), "Missing configuration key: source_path");
    }
}
