//! Error types for environment variable lookups

use std::path::PathBuf;

/// Errors that can occur when resolving a value from the environment.
///
/// This error type covers three failure scenarios:
/// - A required variable resolved to nothing
/// - A `{VAR}_FILE` path that could not be read
/// - A resolved value that could not be parsed into the requested type
///
/// Resolved values are never included in the message, so secrets do not
/// leak through error reporting.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Required variable is not set.
    ///
    /// Occurs when neither `{name}` nor `{name}_FILE` is set to a
    /// non-empty value.
    #[error("Environment variable '{name}' is required but not set")]
    MissingConfiguration {
        /// Name of the missing environment variable
        name: String,
    },

    /// Failed to read the file a `{VAR}_FILE` variable points at.
    #[error("Failed to read secret file '{}': {source}", path.display())]
    MissingSecretFile {
        /// Path to the file that failed to be read
        path: PathBuf,
        /// Underlying I/O error that caused the failure
        source: std::io::Error,
    },

    /// Failed to parse the resolved value into the target type.
    #[error("Failed to parse '{name}' as {type_name}: {message}")]
    TypeMismatch {
        /// Name of the environment variable, or the file path for direct file reads
        name: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the parser
        message: String,
    },
}

impl EnvError {
    pub(crate) fn type_mismatch<T>(
        name: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self::MissingConfiguration { name: name.into() }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = EnvError> = std::result::Result<T, E>;
