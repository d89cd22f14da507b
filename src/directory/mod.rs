/// Contact directory layer: record types and JSON loading.
///
/// The directory is the engine's external collaborator: it owns the
/// records and supplies them fresh; the engine only reads them. Transport
/// is a local JSON file holding an array of contact objects.
pub mod contact;
pub mod errors;

pub use contact::{Contact, ContactField};
pub use errors::DirectoryError;

use std::fs;
use std::path::Path;

/// Load contacts from a JSON file (an array of contact objects).
///
/// # Errors
///
/// Returns `DirectoryError::Read` when the file cannot be read and
/// `DirectoryError::Parse` when it is not valid contact JSON.
pub fn load_contacts(path: &Path) -> Result<Vec<Contact>, DirectoryError> {
    let raw = fs::read_to_string(path).map_err(|source| DirectoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DirectoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
