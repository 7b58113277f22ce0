//! Loading Component
//!
//! Skeleton shown inside a panel while the dashboard request is in flight.

use leptos::*;

/// Skeleton loader for a panel body
#[component]
pub fn PanelSkeleton(
    #[prop(default = 3)]
    lines: usize,
) -> impl IntoView {
    view! {
        <div class="animate-pulse space-y-3" aria-busy="true">
            <div class="h-48 bg-gray-800 rounded-lg" />
            {(0..lines).map(|i| view! {
                <div
                    class="h-4 bg-gray-800 rounded"
                    style=format!("width: {}%", 90 - i * 15)
                />
            }).collect_view()}
        </div>
    }
}
