//! Footer component

use leptos::*;
use crate::config::AUTHOR_LINKEDIN_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="credits">
                "Developed By #Navid_Zaman 😎  SWE @ Red dot digital Ltd. ✉️ navidzaman.xyz@gmail.com"
            </div>
            <div class="footer-links">
                <a href=AUTHOR_LINKEDIN_URL class="footer-link" target="_blank" rel="noopener noreferrer">
                    "LinkedIn"
                </a>
            </div>
        </footer>
    }
}
