//! UI Components for the Red - Excel application.
//!
//! # Layout Components
//! - [`SampleHint`] - Formatting hint and sample sheet link
//! - [`Footer`] - Credits
//!
//! # Feature Components
//! - [`UploadWidget`] - Select, validate, upload and download

mod upload;
mod sample;
mod footer;

pub use upload::*;
pub use sample::*;
pub use footer::*;
