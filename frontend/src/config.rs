//! Application configuration.
//!
//! Centralized configuration for the Red - Excel frontend.
//! Everything is hardcoded; [`UploadConfig`] lets a caller point the
//! widget at another endpoint without touching the constants.

/// Remote processing endpoint.
///
/// Receives the spreadsheet as multipart field `file` and answers with
/// the processed workbook.
pub const PROCESS_URL: &str = "https://red-excel.onrender.com/process-excel";

/// Name of the multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Filename given to every downloaded result.
pub const DOWNLOAD_FILENAME: &str = "processed_file.xlsx";

/// Extension hint for the file picker. Not enforced.
pub const ACCEPT_HINT: &str = ".xlsx, .xls";

/// Declared MIME types the widget accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];

/// Properly formatted sample sheet.
pub const SAMPLE_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1_Zy9haBRNDDQd1Z8GnZKGY6WO2U244Bn/edit?usp=sharing&ouid=110628810609980045334&rtpof=true&sd=true";

/// Application title, shown in the card and the browser tab.
pub const APP_TITLE: &str = "Red - Excel";

/// Author profile linked from the footer.
pub const AUTHOR_LINKEDIN_URL: &str = "https://www.linkedin.com/in/nav1dzaman01";

/// Runtime settings of one [`crate::UploadWidget`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    /// Absolute URL the file is posted to.
    pub endpoint: String,
    /// Filename of the downloaded result.
    pub download_filename: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: PROCESS_URL.to_string(),
            download_filename: DOWNLOAD_FILENAME.to_string(),
        }
    }
}
