//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - The user's selection and the processed result
//! - **Status Types** - Tri-state widget status
//! - **Error Types** - Upload failure taxonomy

use thiserror::Error;
use web_sys::File;

// =============================================================================
// File Types
// =============================================================================

/// A file chosen in the picker.
///
/// `C` is the content handle: a browser [`File`] in the app, plain bytes
/// in tests. Replaced wholesale on every selection.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<C> {
    /// Binary content handle
    pub content: C,
    /// MIME type reported by the platform, possibly empty
    pub declared_type: String,
    /// Display name
    pub name: String,
}

impl<C> SelectedFile<C> {
    pub fn new(content: C, declared_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            content,
            declared_type: declared_type.into(),
            name: name.into(),
        }
    }
}

impl From<File> for SelectedFile<File> {
    fn from(file: File) -> Self {
        let declared_type = file.type_();
        let name = file.name();
        Self::new(file, declared_type, name)
    }
}

/// Raw outcome of one HTTP round trip, before classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerReply {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

/// Binary payload returned by the processing endpoint.
///
/// Handed straight to a [`crate::DownloadSink`] and dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedResult {
    pub bytes: Vec<u8>,
}

// =============================================================================
// Status Types
// =============================================================================

/// Widget status. Loading and Error never coexist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    /// Waiting for user input
    #[default]
    Idle,
    /// Upload in flight
    Loading,
    /// Last attempt failed; carries the user-visible message
    Error(String),
}

impl UploadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, UploadStatus::Loading)
    }

    /// User-visible error text, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            UploadStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Shown when the declared type is not a spreadsheet type.
pub const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Please upload an Excel file.";

/// Shown when the server answered without a usable result.
pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process the file. Please try again.";

/// Shown on network failures and anything thrown while handling the reply.
pub const TRANSPORT_FAILED_MESSAGE: &str = "Something went wrong! Please upload the file again.";

/// Upload failures.
///
/// `Display` is the developer diagnostic written to the console;
/// [`UploadError::user_message`] is what the widget shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Declared MIME type outside the accepted set.
    #[error("Rejected declared type {declared:?}")]
    InvalidType { declared: String },

    /// Non-200 status or empty body.
    #[error("Processing failed with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Processing { status: u16, detail: Option<String> },

    /// Network failure or failure while handling the response.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl UploadError {
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadError::InvalidType { .. } => INVALID_TYPE_MESSAGE,
            UploadError::Processing { .. } => PROCESSING_FAILED_MESSAGE,
            UploadError::Transport(_) => TRANSPORT_FAILED_MESSAGE,
        }
    }
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
