//! Formatting hint with a link to the sample sheet

use leptos::*;
use crate::config::SAMPLE_SHEET_URL;

#[component]
pub fn SampleHint() -> impl IntoView {
    view! {
        <div class="sample-hint">
            <span class="hint-text">"Please select properly formatted excel file to upload"</span>
            <span class="sample-badge">
                <a href=SAMPLE_SHEET_URL target="_blank" rel="noopener noreferrer">
                    "View Sample"
                </a>
            </span>
        </div>
    }
}
