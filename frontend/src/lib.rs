//! Red - Excel - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget that uploads an Excel sheet to a remote
//! processing endpoint and downloads the processed workbook.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── UploadWidget (picker, status, proceed)                 │
//! │  ├── SampleHint (sample sheet link)                         │
//! │  └── Footer (credits)                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Selected file, status and error types
//! - [`validation`] - Declared MIME type check
//! - [`state`] - Widget state transitions
//! - [`pipeline`] - Upload → process → download flow
//! - [`services`] - Browser HTTP and download plumbing
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod state;
pub mod pipeline;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    SelectedFile, ServerReply, ProcessedResult,
    // Status
    UploadStatus,
    // Errors
    UploadError, UploadResult,
};

// State machine
pub use state::{UploadStart, WidgetState};
pub use validation::{check_file, validate_type};
pub use pipeline::{drive_upload, process_file};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Installs the panic hook and console logger, then mounts [`App`].
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Red - Excel - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <UploadWidget/>
            <SampleHint/>
            <Footer/>
        </div>
    }
}
