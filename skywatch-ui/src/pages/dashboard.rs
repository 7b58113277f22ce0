//! Dashboard Page
//!
//! The three panels, fed from one batched request. A transport or parse
//! failure replaces the page with a single error view; upstream failures are
//! shown inside the affected panel only.

use leptos::*;
use skywatch::{DashboardStatus, DashboardViews};

use crate::components::{ApodPanel, MediaPanel, NeoPanel};
use crate::state::use_dashboard_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_dashboard_state();

    state.mount();

    // Refetch on focus once the snapshot has gone stale
    let focus = window_event_listener(ev::focus, move |_| state.window_focus());

    on_cleanup(move || {
        focus.remove();
        state.unmount();
    });

    let views = create_memo(move |_| state.status.with(DashboardStatus::views));
    let failure = create_memo(move |_| state.status.with(|s| s.error().map(str::to_string)));

    let apod = Signal::derive(move || views.with(|v: &DashboardViews| v.apod.clone()));
    let media = Signal::derive(move || views.with(|v: &DashboardViews| v.media.clone()));
    let neo = Signal::derive(move || views.with(|v: &DashboardViews| v.neo.clone()));

    view! {
        <Show
            when=move || failure.with(Option::is_none)
            fallback=move || view! { <FullPageError message=failure.get().unwrap_or_default() /> }
        >
            <div class="space-y-8">
                <div>
                    <h2 class="text-3xl font-bold">"Space Dashboard"</h2>
                    <p class="text-gray-400 mt-1">
                        "Today's featured image, the NASA media library and this week's near-Earth objects"
                    </p>
                </div>

                <ApodPanel data=apod />

                <div class="grid grid-cols-1 xl:grid-cols-2 gap-8">
                    <MediaPanel data=media />
                    <NeoPanel data=neo />
                </div>
            </div>
        </Show>
    }
}

/// Shown when no dashboard payload could be obtained at all
#[component]
fn FullPageError(message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center" role="alert">
            <div class="text-6xl mb-4">"🛰"</div>
            <h2 class="text-3xl font-bold mb-2">"Unable to load the dashboard"</h2>
            <p class="text-gray-400 mb-6 max-w-xl">{message}</p>
            <p class="text-gray-500 text-sm">"Check that the Skywatch API server is running."</p>
        </div>
    }
}
