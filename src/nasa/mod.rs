//! NASA Upstream Integration
//!
//! Fetches the three panel payloads from the public NASA APIs.
//!
//! ## Architecture
//!
//! - **SpaceDataSource**: the seam the API server depends on
//! - **NasaClient**: reqwest implementation against api.nasa.gov and
//!   images-api.nasa.gov
//!
//! Failures are returned as [`NasaError`]; their display text is what ends up
//! in the composite payload's `errors` map, so rate limiting always mentions
//! both "rate limit" and "429".

mod client;

pub use client::{NasaClient, NasaConfig, NasaError};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::{FeaturedImage, MediaLibraryResult, NearEarthObjectFeed};

/// Source of the dashboard's upstream data
#[async_trait]
pub trait SpaceDataSource: Send + Sync {
    /// Short name for logs and health output
    fn name(&self) -> &str;

    /// Today's astronomy picture
    async fn featured_image(&self) -> Result<FeaturedImage, NasaError>;

    /// Image and video library search
    async fn search_media(&self, query: &str) -> Result<MediaLibraryResult, NasaError>;

    /// Near-Earth objects approaching between `start` and `end`, inclusive
    async fn neo_feed(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<NearEarthObjectFeed, NasaError>;
}
