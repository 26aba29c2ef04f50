//! Spreadsheet upload card.
//!
//! Picker, selected file name, error line and the proceed button. All of
//! it renders from a single [`WidgetState`] signal.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::{UploadConfig, ACCEPT_HINT, APP_TITLE};
use crate::pipeline::drive_upload;
use crate::services::{BrowserDownload, HttpProcessingClient};
use crate::state::WidgetState;
use crate::types::SelectedFile;

#[component]
pub fn UploadWidget(
    /// Endpoint and download filename, defaults to the constants in [`crate::config`]
    #[prop(optional)]
    config: Option<UploadConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = create_rw_signal(WidgetState::<File>::default());
    let is_loading = move || state.with(|s| s.is_loading());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input
            .files()
            .and_then(|files| files.get(0))
            .map(SelectedFile::from);

        match &file {
            Some(f) => log::info!("📄 Selected {} ({}, {} bytes)", f.name, f.declared_type, f.content.size()),
            None => log::info!("📄 Selection cleared"),
        }

        state.update(|s| *s = std::mem::take(s).select_file(file));
    };

    let on_proceed = move |_| {
        let config = config.clone();
        let current = state.get_untracked();

        spawn_local(async move {
            let client = HttpProcessingClient::new(config.endpoint.as_str());
            drive_upload(current, &client, &BrowserDownload, &config, |next: &WidgetState<File>| {
                state.set(next.clone())
            })
            .await;
        });
    };

    view! {
        <div class="upload-card">
            <h2 class="upload-title">{APP_TITLE}</h2>

            <input
                type="file"
                accept=ACCEPT_HINT
                class="file-input"
                class:busy=is_loading
                disabled=is_loading
                on:change=on_file_change
            />

            <Show
                when=move || state.with(|s| s.file.is_some())
                fallback=|| view! { }
            >
                <div class="selected-file">
                    "Selected File: "
                    <span class="file-name">
                        {move || state.with(|s| s.file.as_ref().map(|f| f.name.clone()).unwrap_or_default())}
                    </span>
                </div>
            </Show>

            <Show
                when=move || state.with(|s| s.error_message().is_some())
                fallback=|| view! { }
            >
                <p class="error-message">
                    {move || state.with(|s| s.error_message().unwrap_or_default().to_string())}
                </p>
            </Show>

            <button
                class="proceed-button"
                class:busy=is_loading
                disabled=move || !state.with(|s| s.can_upload())
                on:click=on_proceed
            >
                {move || if is_loading() { "Processing..." } else { "Proceed" }}
            </button>
        </div>
    }
}
