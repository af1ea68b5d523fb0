use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatementError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Unsupported statement format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rental sheet error: {0}")]
    Sheet(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StatementError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatementError>;
