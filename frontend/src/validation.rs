//! Declared-type validation.
//!
//! Only the MIME type reported by the browser is checked, never the file
//! contents, so a renamed or relabeled file passes.

use crate::config::ACCEPTED_MIME_TYPES;
use crate::types::{SelectedFile, UploadError, UploadResult};

/// True when `declared_type` is exactly one of [`ACCEPTED_MIME_TYPES`].
pub fn validate_type(declared_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&declared_type)
}

/// Checks a selected file, mapping a rejection to [`UploadError::InvalidType`].
pub fn check_file<C>(file: &SelectedFile<C>) -> UploadResult<()> {
    if validate_type(&file.declared_type) {
        Ok(())
    } else {
        Err(UploadError::InvalidType {
            declared: file.declared_type.clone(),
        })
    }
}
