//! Widget state and its transitions.
//!
//! [`WidgetState`] is replaced, never mutated in place: every handler
//! consumes the current value and returns the next one.

use crate::types::{SelectedFile, UploadResult, UploadStatus};
use crate::validation::check_file;

/// Everything the upload widget remembers between renders.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState<C> {
    pub file: Option<SelectedFile<C>>,
    pub status: UploadStatus,
}

impl<C> Default for WidgetState<C> {
    fn default() -> Self {
        Self {
            file: None,
            status: UploadStatus::Idle,
        }
    }
}

/// Outcome of [`WidgetState::start_upload`].
#[derive(Debug)]
pub enum UploadStart<C> {
    /// Network call may proceed; `loading` must be published first.
    Started {
        loading: WidgetState<C>,
        file: SelectedFile<C>,
    },
    /// Declared type refused; the state carries the error.
    Rejected(WidgetState<C>),
    /// No file selected or an upload already in flight.
    Unchanged,
}

impl<C: Clone> WidgetState<C> {
    /// Replaces the selection and drops any error.
    ///
    /// `None` is a cancelled picker and clears the selection. An upload in
    /// flight stays `Loading`.
    pub fn select_file(self, file: Option<SelectedFile<C>>) -> Self {
        let status = match self.status {
            UploadStatus::Loading => UploadStatus::Loading,
            _ => UploadStatus::Idle,
        };
        Self { file, status }
    }

    /// Whether the proceed control should be enabled.
    pub fn can_upload(&self) -> bool {
        !self.status.is_loading()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }

    /// Decides whether an upload can begin.
    pub fn start_upload(&self) -> UploadStart<C> {
        if self.is_loading() {
            return UploadStart::Unchanged;
        }

        let Some(file) = self.file.clone() else {
            return UploadStart::Unchanged;
        };

        if let Err(err) = check_file(&file) {
            log::warn!("🚫 {} ({})", err, file.name);
            return UploadStart::Rejected(Self {
                file: Some(file),
                status: UploadStatus::Error(err.user_message().to_string()),
            });
        }

        UploadStart::Started {
            loading: Self {
                file: self.file.clone(),
                status: UploadStatus::Loading,
            },
            file,
        }
    }

    /// Leaves `Loading` for `Idle` or `Error`, whatever the outcome.
    pub fn finish_upload(self, outcome: UploadResult<()>) -> Self {
        let status = match outcome {
            Ok(()) => UploadStatus::Idle,
            Err(err) => {
                log::error!("❌ Upload failed: {}", err);
                UploadStatus::Error(err.user_message().to_string())
            }
        };
        Self { file: self.file, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UploadError;

    const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    fn sheet(name: &str, declared_type: &str) -> SelectedFile<Vec<u8>> {
        SelectedFile::new(vec![1, 2, 3], declared_type, name)
    }

    fn errored() -> WidgetState<Vec<u8>> {
        WidgetState {
            file: Some(sheet("old.xlsx", XLSX)),
            status: UploadStatus::Error("Failed to process the file. Please try again.".to_string()),
        }
    }

    #[test]
    fn test_select_clears_error() {
        let next = errored().select_file(Some(sheet("new.xlsx", XLSX)));
        assert_eq!(next.status, UploadStatus::Idle);
        assert_eq!(next.file.map(|f| f.name), Some("new.xlsx".to_string()));
    }

    #[test]
    fn test_cancelled_picker_clears_selection() {
        let next = errored().select_file(None);
        assert!(next.file.is_none());
        assert_eq!(next.error_message(), None);
    }

    #[test]
    fn test_select_keeps_loading() {
        let loading = WidgetState {
            file: Some(sheet("a.xlsx", XLSX)),
            status: UploadStatus::Loading,
        };
        let next = loading.select_file(Some(sheet("b.xlsx", XLSX)));
        assert!(next.is_loading());
    }

    #[test]
    fn test_start_without_file_is_noop() {
        let state = WidgetState::<Vec<u8>>::default();
        assert!(matches!(state.start_upload(), UploadStart::Unchanged));
    }

    #[test]
    fn test_start_rejects_invalid_type() {
        let state = WidgetState::default().select_file(Some(sheet("report.pdf", "application/pdf")));
        match state.start_upload() {
            UploadStart::Rejected(next) => {
                assert_eq!(
                    next.error_message(),
                    Some("Invalid file type. Please upload an Excel file.")
                );
                assert!(next.can_upload());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_start_enters_loading_and_clears_error() {
        let state = WidgetState {
            file: Some(sheet("q1.xlsx", "application/vnd.ms-excel")),
            status: UploadStatus::Error("Something went wrong! Please upload the file again.".to_string()),
        };
        match state.start_upload() {
            UploadStart::Started { loading, file } => {
                assert!(loading.is_loading());
                assert!(!loading.can_upload());
                assert_eq!(loading.error_message(), None);
                assert_eq!(file.name, "q1.xlsx");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_start_while_loading_is_refused() {
        let loading = WidgetState {
            file: Some(sheet("q1.xlsx", XLSX)),
            status: UploadStatus::Loading,
        };
        assert!(matches!(loading.start_upload(), UploadStart::Unchanged));
    }

    #[test]
    fn test_finish_leaves_loading() {
        let loading = WidgetState {
            file: Some(sheet("q1.xlsx", XLSX)),
            status: UploadStatus::Loading,
        };

        let ok = loading.clone().finish_upload(Ok(()));
        assert_eq!(ok.status, UploadStatus::Idle);
        assert!(ok.file.is_some());

        let failed = loading.finish_upload(Err(UploadError::Transport("offline".to_string())));
        assert_eq!(
            failed.error_message(),
            Some("Something went wrong! Please upload the file again.")
        );
    }
}
