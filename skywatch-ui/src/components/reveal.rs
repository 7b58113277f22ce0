//! Reveal Component
//!
//! Fades a panel in the first time it scrolls into view. Once revealed it
//! stays revealed, including after scrolling away and back.

use leptos::*;
use skywatch::Panel;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::use_dashboard_state;

/// Share of the panel that must be visible before it is revealed
const REVEAL_THRESHOLD: f64 = 0.15;

#[component]
pub fn Reveal(panel: Panel, children: Children) -> impl IntoView {
    let state = use_dashboard_state();
    let node_ref = create_node_ref::<html::Div>();
    let observer = store_value(None::<IntersectionObserver>);

    let revealed = create_memo(move |_| state.reveal.with(|r| r.is_revealed(&panel)));

    node_ref.on_load(move |element| {
        if revealed.get_untracked() {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if state.observe_reveal(panel, entry.is_intersecting()) {
                        // Revealed is terminal; nothing left to watch
                        observer.disconnect();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(obs) => {
                obs.observe(&element);
                observer.set_value(Some(obs));
                callback.forget();
            }
            Err(e) => {
                web_sys::console::warn_2(&"IntersectionObserver unavailable:".into(), &e);
                state.observe_reveal(panel, true);
            }
        }
    });

    on_cleanup(move || {
        observer.with_value(|obs| {
            if let Some(obs) = obs {
                obs.disconnect();
            }
        });
    });

    view! {
        <div
            node_ref=node_ref
            class="transition-all duration-700 ease-out"
            class=("opacity-0", move || !revealed.get())
            class=("translate-y-6", move || !revealed.get())
            class=("opacity-100", move || revealed.get())
        >
            {children()}
        </div>
    }
}
