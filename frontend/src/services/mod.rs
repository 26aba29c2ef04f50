//! Browser services.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload to the processing endpoint
//! - [`download`] - Saving the processed workbook through the browser

pub mod upload;
pub mod download;

pub use upload::*;
pub use download::*;
