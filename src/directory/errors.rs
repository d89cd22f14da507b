/// Errors from the contact directory layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying the contact directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The contacts file could not be read.
    #[error("Cannot read contacts file '{}': {source}", path.display())]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The contacts file is not a valid JSON array of contacts.
    #[error("Contacts file '{}' is not valid contact JSON: {source}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// No contact carries the requested id.
    #[error("No contact with id {id}")]
    ContactNotFound {
        /// The searched id.
        id: u64,
    },

    /// A `--weight` override was not of the form `FIELD=NUMBER`.
    #[error("Invalid weight override '{spec}' (expected FIELD=NUMBER)")]
    InvalidWeight {
        /// The raw override string.
        spec: String,
    },

    /// A field name did not match any contact field.
    #[error("Unknown contact field '{name}'")]
    UnknownField {
        /// The unrecognized name.
        name: String,
    },
}

/// Exit code mapping for `DirectoryError` variants.
impl DirectoryError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Parse { .. } => 3,
            Self::ContactNotFound { .. } => 4,
            Self::InvalidWeight { .. } | Self::UnknownField { .. } => 2,
        }
    }
}
