use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the macrodash workspace.
///
/// Only dataset-load problems and builder misconfiguration surface as errors.
/// Dirty request input (unknown alias, malformed date filter, unknown
/// frequency code) degrades to a default instead of producing one of these.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MacroError {
    /// The backing file (or the requested sheet inside it) could not be found.
    #[error("data file missing: {path}: {reason}")]
    DataFileMissing {
        /// Path of the configured data file.
        path: String,
        /// What exactly was missing (file, sheet, ...).
        reason: String,
    },

    /// A required column could not be resolved after synonym mapping.
    #[error("invalid schema: required column `{column}` not found in {source_name}")]
    InvalidSchema {
        /// Canonical name of the missing column (e.g. "Date").
        column: String,
        /// Human-readable source description (file and sheet).
        source_name: String,
    },

    /// The file extension does not map to any known table source.
    #[error("unsupported data file format: {extension:?}")]
    UnsupportedFormat {
        /// Lowercased extension including the leading dot, or empty.
        extension: String,
    },

    /// The file exists but its content could not be parsed.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl MacroError {
    /// Helper: build a `DataFileMissing` error.
    pub fn data_file_missing(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataFileMissing {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build an `InvalidSchema` error for a canonical column.
    pub fn invalid_schema(column: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self::InvalidSchema {
            column: column.into(),
            source_name: source_name.into(),
        }
    }

    /// Helper: build an `UnsupportedFormat` error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Returns true if this error came from reading or normalizing the dataset.
    ///
    /// Load failures are never cached: the next request re-stats the file and
    /// tries again.
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        !matches!(self, Self::InvalidArg(_))
    }
}
