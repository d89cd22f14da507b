/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as a table. They are decoupled from the internal `Contact` /
/// `RecordMatch` types.
use serde::{Deserialize, Serialize};

use crate::directory::Contact;

/// A contact as printed by `list` and `show`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactOutput {
    /// Unique identifier.
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    /// Creation timestamp, or null if the data layer didn't supply one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl From<&Contact> for ContactOutput {
    fn from(c: &Contact) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            notes: c.notes.clone(),
            created: c.created.clone(),
        }
    }
}

/// A search result with its match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultOutput {
    /// The matched contact's id.
    pub id: u64,
    /// Display name ("First Last").
    pub name: String,
    /// Email, empty if unset.
    pub email: String,
    /// Aggregate match score (higher = better). 0 for the empty query.
    pub score: f64,
    /// snake_case name of the field the match was won on.
    pub field: String,
    /// Matched char positions within the winning field's normalized text,
    /// for highlighting. Empty for the empty query.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub positions: Vec<usize>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `DirectoryError`.
    #[must_use]
    pub fn from_directory_error(err: &crate::directory::DirectoryError) -> Self {
        use crate::directory::DirectoryError;
        let code = match err {
            DirectoryError::Read { .. } => "read_error",
            DirectoryError::Parse { .. } => "parse_error",
            DirectoryError::ContactNotFound { .. } => "contact_not_found",
            DirectoryError::InvalidWeight { .. } => "invalid_weight",
            DirectoryError::UnknownField { .. } => "unknown_field",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
