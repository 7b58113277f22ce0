//! Dashboard Data Model
//!
//! Wire and domain types for the three dashboard panels and the composite
//! snapshot that carries them.
//!
//! ## Types
//!
//! - [`FeaturedImage`]: the astronomy picture of the day
//! - [`MediaLibraryResult`]: a NASA image library search result
//! - [`NearEarthObjectFeed`]: near-Earth objects keyed by approach date
//! - [`DashboardSnapshot`]: the three panel outcomes fetched together
//!
//! All entities are read-only and request scoped.

mod apod;
mod media;
mod neo;
mod snapshot;

pub use apod::{FeaturedImage, MediaKind};
pub use media::{MediaCollection, MediaItem, MediaLink, MediaLibraryResult, MediaMetadata};
pub use neo::{CloseApproach, MissDistance, NearEarthObject, NearEarthObjectFeed};
pub use snapshot::{DashboardSnapshot, Panel, PanelErrors, PanelOutcome, SnapshotPayload};
