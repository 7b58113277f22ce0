//! Skywatch Dashboard
//!
//! NASA space data dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Astronomy Picture of the Day, image or embedded video
//! - Media library search with an image/video distribution chart
//! - Near-Earth objects: headline stats, hazard chart, closest approaches
//! - Per-panel error reporting with a dedicated rate-limit notice
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All three panels are fed by one request to the Skywatch API's
//! composite `/dashboard` endpoint; the fetch state machine, panel decision
//! table and chart derivations live in the `skywatch` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
