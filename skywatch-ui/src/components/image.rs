//! Images with a placeholder when loading fails

use leptos::*;

/// `<img>` that swaps to [`ImagePlaceholder`] once the browser reports a load error
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    let broken = create_rw_signal(false);
    let placeholder_class = class.clone();

    move || {
        if broken.get() {
            view! { <ImagePlaceholder class=placeholder_class.clone() /> }.into_view()
        } else {
            view! {
                <img
                    src=src.clone()
                    alt=alt.clone()
                    loading="lazy"
                    class=class.clone()
                    on:error=move |_| broken.set(true)
                />
            }
            .into_view()
        }
    }
}

#[component]
pub fn ImagePlaceholder(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("{} bg-gray-700 flex items-center justify-center", class) aria-label="No preview available">
            <svg viewBox="0 0 24 24" class="w-10 h-10 text-gray-500" fill="none" stroke="currentColor" stroke-width="1.5">
                <rect x="3" y="5" width="18" height="14" rx="2" />
                <circle cx="8.5" cy="10" r="1.5" />
                <path d="M21 16l-5-5-8 8" />
            </svg>
        </div>
    }
}
