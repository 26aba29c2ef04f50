//! Upload → process → download pipeline.
//!
//! ```text
//! start_upload ──► Loading ──► submit ──► classify_reply ──► save
//!      │                                                      │
//!      ├─ Rejected: invalid type, published                   ▼
//!      └─ Unchanged: no file or busy        finish_upload: Idle | Error
//! ```

use crate::config::UploadConfig;
use crate::services::{classify_reply, DownloadSink, ProcessingClient};
use crate::state::{UploadStart, WidgetState};
use crate::types::{SelectedFile, UploadResult};
use crate::validation::check_file;

/// Sends `file` once and saves the result.
///
/// The type is checked again before anything touches the network.
pub async fn process_file<C, T, S>(
    file: &SelectedFile<C>,
    client: &T,
    sink: &S,
    config: &UploadConfig,
) -> UploadResult<()>
where
    T: ProcessingClient<C>,
    S: DownloadSink,
{
    check_file(file)?;

    log::info!("📤 Uploading {} ({})", file.name, file.declared_type);
    let reply = client.submit(file).await?;
    log::debug!("Reply: status {}, {} bytes", reply.status, reply.body.len());

    let result = classify_reply(reply)?;
    sink.save(result, &config.download_filename)
}

/// Runs one user-initiated upload against `state`.
///
/// `publish` sees every state the widget should render: the `Loading`
/// state before the request, then the settled state. The returned value
/// is the last state published.
pub async fn drive_upload<C, T, S, P>(
    state: WidgetState<C>,
    client: &T,
    sink: &S,
    config: &UploadConfig,
    mut publish: P,
) -> WidgetState<C>
where
    C: Clone,
    T: ProcessingClient<C>,
    S: DownloadSink,
    P: FnMut(&WidgetState<C>),
{
    let (loading, file) = match state.start_upload() {
        UploadStart::Started { loading, file } => (loading, file),
        UploadStart::Rejected(next) => {
            publish(&next);
            return next;
        }
        UploadStart::Unchanged => return state,
    };

    publish(&loading);
    let outcome = process_file(&file, client, sink, config).await;
    let next = loading.finish_upload(outcome);
    publish(&next);
    next
}
