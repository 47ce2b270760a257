// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Domain arithmetic never fails; errors come from persistence, catalog
//! loading, and the form-level validation done in `services::actions`.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Persisted state version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Short machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "storage_error",
            AppError::Serialization(_) => "serialization_error",
            AppError::UnsupportedVersion { .. } => "unsupported_version",
            AppError::Validation(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Catalog(_) => "catalog_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Whether the error was caused by caller input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::NotFound(_))
    }
}

/// Result type alias for store and service operations.
pub type Result<T> = std::result::Result<T, AppError>;
