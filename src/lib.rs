//! # Skywatch
//!
//! Space data dashboard - a full-stack Rust application that gathers NASA's
//! Astronomy Picture of the Day, an image library search and the near-Earth
//! object feed into one composite payload, and turns it into panel views.
//!
//! ## Features
//!
//! - **One batched request**: the dashboard is served from a single composite
//!   payload with per-panel error reporting
//! - **Partial failure**: each panel renders its own error, with a dedicated
//!   notice when the upstream rate limit is hit
//! - **Freshness window**: snapshots are reused for five minutes on both the
//!   server and the client
//!
//! ## Modules
//!
//! - [`model`]: wire and domain types for the three panels
//! - [`charts`]: chart and statistics derivations
//! - [`panels`]: per-panel view models and the state decision table
//! - [`aggregator`]: dashboard fetch state machine
//! - [`reveal`]: one-way entrance reveal state
//! - [`report`]: terminal rendering of the panel views
//! - [`api`]: REST API server with Axum (feature `server`)
//! - [`nasa`]: upstream NASA client (feature `server`)
//!
//! Without the default `server` feature the crate has no runtime or network
//! dependencies and builds for `wasm32-unknown-unknown`.
//!
//! ## Quick Start
//!
//! ```rust
//! use skywatch::{DashboardAggregator, DashboardSnapshot};
//!
//! let mut aggregator = DashboardAggregator::default();
//! let ticket = aggregator.mount(0).expect("first mount fetches");
//!
//! let snapshot: DashboardSnapshot =
//!     serde_json::from_str(r#"{"errors": {"apod": "API rate limit exceeded (429)"}}"#).unwrap();
//! aggregator.complete(ticket, Ok(snapshot), 10);
//!
//! let views = aggregator.status().views();
//! assert_eq!(views.apod.kind(), "rate_limited");
//! ```

pub mod aggregator;
pub mod charts;
pub mod model;
pub mod panels;
pub mod report;
pub mod reveal;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod nasa;

// Re-export top-level types for convenience
pub use model::{
    DashboardSnapshot, FeaturedImage, MediaKind, MediaLibraryResult, NearEarthObject,
    NearEarthObjectFeed, Panel, PanelOutcome,
};

pub use aggregator::{DashboardAggregator, DashboardStatus, FetchError, FetchTicket};

pub use panels::{is_rate_limited, DashboardViews, PanelView, RateLimitNotice};

pub use reveal::{RevealController, RevealState};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

#[cfg(feature = "server")]
pub use nasa::{NasaClient, NasaError, SpaceDataSource};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig};
