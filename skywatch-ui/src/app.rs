//! App Root Component
//!
//! Main application component with global providers.

use leptos::*;

use crate::pages::Dashboard;
use crate::state::{provide_dashboard_state, use_dashboard_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_state();

    view! {
        <div class="min-h-screen bg-gray-950 text-white flex flex-col">
            <header class="border-b border-gray-800 py-4 px-4">
                <div class="container mx-auto flex items-center justify-between">
                    <h1 class="text-2xl font-bold tracking-tight">"Skywatch"</h1>
                    <span class="text-sm text-gray-400">"Live data from NASA's open APIs"</span>
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Dashboard />
            </main>

            <Footer />
        </div>
    }
}

/// Footer with last refresh time and loading indicator
#[component]
fn Footer() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-900 border-t border-gray-800 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || {
                        state.last_updated.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last updated: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not loaded yet".to_string())
                    }}
                </div>

                <Show when=move || state.fetching.get()>
                    <div class="flex items-center space-x-2 text-sky-400">
                        <div class="loading-spinner w-4 h-4" />
                        <span>"Refreshing..."</span>
                    </div>
                </Show>

                <a
                    href="https://api.nasa.gov/"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-gray-500 hover:text-gray-300"
                >
                    "api.nasa.gov"
                </a>
            </div>
        </footer>
    }
}
