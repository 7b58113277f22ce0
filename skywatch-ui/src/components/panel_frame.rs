//! Panel Frame
//!
//! Shared chrome for the dashboard panels and the view for each non-content
//! panel state.

use leptos::*;
use skywatch::panels::{PanelView, RateLimitNotice};
use skywatch::Panel;

use super::{PanelSkeleton, Reveal};

/// Titled, reveal-animated panel container
#[component]
pub fn PanelFrame(panel: Panel, children: Children) -> impl IntoView {
    view! {
        <Reveal panel=panel>
            <section
                id=panel.wire_name()
                class="bg-gray-900 rounded-xl p-6 border border-gray-800"
            >
                <h2 class="text-xl font-semibold mb-4">{panel.title()}</h2>
                {children()}
            </section>
        </Reveal>
    }
}

/// Render a panel view, delegating the content branch to `content`
pub fn panel_body<V>(state: &PanelView<V>, content: impl FnOnce(&V) -> View) -> View {
    match state {
        PanelView::Content(v) => content(v),
        PanelView::RateLimited(notice) => view! { <RateLimitMessage notice=notice.clone() /> }.into_view(),
        PanelView::Error(message) => view! {
            <div class="bg-red-950/50 border border-red-800 text-red-300 rounded-lg p-4" role="alert">
                {message.clone()}
            </div>
        }
        .into_view(),
        PanelView::Loading => view! { <PanelSkeleton /> }.into_view(),
        PanelView::Empty => view! {
            <p class="text-gray-500 text-center py-8">"No data available."</p>
        }
        .into_view(),
    }
}

/// Friendlier replacement for upstream rate-limit errors
#[component]
fn RateLimitMessage(notice: RateLimitNotice) -> impl IntoView {
    view! {
        <div class="bg-amber-950/50 border border-amber-700 text-amber-200 rounded-lg p-4" role="status">
            <p class="font-medium">"Rate limit reached"</p>
            <p class="text-sm mt-1">{notice.message}</p>
            <a
                href=notice.support_url
                target="_blank"
                rel="noopener noreferrer"
                class="inline-block mt-3 text-sm underline hover:text-amber-100"
            >
                "Get a free NASA API key"
            </a>
        </div>
    }
}
