//! Scan Log Page
//!
//! QR-code view of the dashboard: the full scan log with search, selection,
//! PDF export, and delete.

use leptos::*;

use crate::api::client;
use crate::components::{ListSkeleton, QrTable};
use crate::state::AppState;

/// Scan log page component
#[component]
pub fn ScanLog() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (loaded, set_loaded) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match client::fetch_all_scans().await {
                Ok(scans) => {
                    state.all_scans.set(scans);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch QR records: {}", e).into());
                    state.show_error(&e);
                }
            }
            set_loaded.set(true);
        });
    });

    view! {
        <div class="relative">
            {move || {
                if loaded.get() {
                    view! { <QrTable /> }.into_view()
                } else {
                    view! { <ListSkeleton /> }.into_view()
                }
            }}
        </div>
    }
}
