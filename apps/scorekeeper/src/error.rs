use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("Snapshot encoding error: {detail}")]
    Serde { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Data corruption: {detail}")]
    DataCorruption { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn corruption(detail: impl Into<String>) -> Self {
        Self::DataCorruption {
            detail: detail.into(),
        }
    }

    /// Stable error code for logs and JSON output.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::Io { .. } => ErrorCode::IoError,
            AppError::Serde { .. } => ErrorCode::SerdeError,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::DataCorruption { .. } => ErrorCode::DataCorruption,
        }
    }

    /// Domain errors are local corrections; everything else comes from a collaborator.
    pub fn is_domain(&self) -> bool {
        matches!(self, AppError::Domain(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io {
            detail: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serde {
            detail: e.to_string(),
        }
    }
}
