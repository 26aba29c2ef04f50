//! Browser download of the processed workbook.
//!
//! The bytes become a `Blob`, the blob an object URL, and a transient
//! `<a download>` element is clicked to start the browser's save flow.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::types::{ProcessedResult, UploadError, UploadResult};

/// Hands a processed result to the user.
pub trait DownloadSink {
    fn save(&self, result: ProcessedResult, filename: &str) -> UploadResult<()>;
}

/// Saves through a synthesized anchor element.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn save(&self, result: ProcessedResult, filename: &str) -> UploadResult<()> {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(result.bytes.as_slice()));
        let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_failure("create blob"))?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_failure("create object URL"))?;

        let clicked = click_anchor(&url, filename);

        // Release the URL even if the click failed
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Could not revoke object URL: {:?}", e);
        }

        clicked?;
        log::info!("💾 Download triggered: {}", filename);
        Ok(())
    }
}

fn click_anchor(url: &str, filename: &str) -> UploadResult<()> {
    let document = gloo_utils::document();
    let body = document
        .body()
        .ok_or_else(|| UploadError::Transport("Document has no body".to_string()))?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_failure("create anchor"))?
        .dyn_into()
        .map_err(|_| UploadError::Transport("Element is not an anchor".to_string()))?;

    link.set_href(url);
    link.set_download(filename);

    body.append_child(&link).map_err(js_failure("attach anchor"))?;
    link.click();
    link.remove();

    Ok(())
}

fn js_failure(action: &'static str) -> impl Fn(JsValue) -> UploadError {
    move |e| UploadError::Transport(format!("Failed to {}: {:?}", action, e))
}
