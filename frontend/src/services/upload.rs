//! HTTP service uploading spreadsheets to the processing endpoint.

use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::types::{ProcessedResult, SelectedFile, ServerReply, UploadError, UploadResult};

/// Longest plain-text error body quoted in diagnostics.
const MAX_DETAIL_LEN: usize = 200;

/// Sends one file to the processing endpoint.
///
/// Implementations make exactly one request per call and never retry.
/// Only transport failures are errors; any HTTP status is a reply.
#[allow(async_fn_in_trait)]
pub trait ProcessingClient<C> {
    async fn submit(&self, file: &SelectedFile<C>) -> UploadResult<ServerReply>;
}

/// Browser client posting a multipart form through `fetch`.
#[derive(Clone, Debug)]
pub struct HttpProcessingClient {
    endpoint: String,
}

impl HttpProcessingClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ProcessingClient<File> for HttpProcessingClient {
    async fn submit(&self, file: &SelectedFile<File>) -> UploadResult<ServerReply> {
        let form_data = FormData::new()
            .map_err(|e| UploadError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob(UPLOAD_FIELD, &file.content)
            .map_err(|e| UploadError::Transport(format!("Failed to append file: {:?}", e)))?;

        let response = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| UploadError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| UploadError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(ServerReply { status, body })
    }
}

/// Error payload shapes commonly sent by Python web backends.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<Value>,
    detail: Option<Value>,
    message: Option<Value>,
}

/// Accepts status 200 with a non-empty body, anything else is a
/// processing failure.
pub fn classify_reply(reply: ServerReply) -> UploadResult<ProcessedResult> {
    if reply.status == 200 && !reply.body.is_empty() {
        return Ok(ProcessedResult { bytes: reply.body });
    }

    Err(UploadError::Processing {
        status: reply.status,
        detail: error_detail(&reply.body),
    })
}

/// Best-effort summary of an error body, for the console only.
fn error_detail(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        let field = parsed.error.or(parsed.detail).or(parsed.message);
        if let Some(value) = field {
            return Some(match value {
                Value::String(text) => text,
                other => other.to_string(),
            });
        }
    }

    let text = std::str::from_utf8(body).ok()?.trim();
    if text.is_empty() || text.len() > MAX_DETAIL_LEN {
        None
    } else {
        Some(text.to_string())
    }
}
