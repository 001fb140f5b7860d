//! Loading Component
//!
//! Skeleton placeholder shown while table data is in flight.

use leptos::*;

/// Skeleton loader for table rows
#[component]
pub fn ListSkeleton(
    #[prop(default = 5)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse p-4">
            {(0..count).map(|_| view! {
                <div class="bg-neutral-300 rounded h-12" />
            }).collect_view()}
        </div>
    }
}
