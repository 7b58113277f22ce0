//! Composite Dashboard Snapshot
//!
//! The dashboard endpoint returns all three panel payloads in one response,
//! with failures reported in a side-channel `errors` map:
//!
//! ```json
//! { "apod": {...}, "nasaImages": {...}, "neoData": {...},
//!   "errors": { "apod": "...", "nasaImages": "...", "neoData": "..." } }
//! ```
//!
//! [`SnapshotPayload`] mirrors that wire shape. [`DashboardSnapshot`] is the
//! domain view, where each panel is a [`PanelOutcome`]: data, an error, or
//! an explicit `Missing` when the payload carried neither.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::apod::FeaturedImage;
use super::media::MediaLibraryResult;
use super::neo::NearEarthObjectFeed;

/// The dashboard panels, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    Apod,
    MediaLibrary,
    NearEarthObjects,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Apod, Panel::MediaLibrary, Panel::NearEarthObjects];

    /// Field name used in the composite payload and its `errors` map
    pub fn wire_name(&self) -> &'static str {
        match self {
            Panel::Apod => "apod",
            Panel::MediaLibrary => "nasaImages",
            Panel::NearEarthObjects => "neoData",
        }
    }

    /// Section heading shown on the dashboard
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Apod => "Astronomy Picture of the Day",
            Panel::MediaLibrary => "NASA Media Library",
            Panel::NearEarthObjects => "Near-Earth Objects",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Outcome of fetching one panel's data
#[derive(Debug, Clone, PartialEq)]
pub enum PanelOutcome<T> {
    Ready(T),
    Failed(String),
    /// Neither data nor an error arrived for the panel
    Missing,
}

impl<T> PanelOutcome<T> {
    /// Build an outcome from the nullable wire fields.
    ///
    /// Data wins over an error string.
    pub fn from_parts(data: Option<T>, error: Option<String>, panel: Panel) -> Self {
        match (data, error) {
            (Some(data), None) => PanelOutcome::Ready(data),
            (Some(data), Some(error)) => {
                tracing::warn!(
                    panel = %panel,
                    error = %error,
                    "Payload carries both data and an error, keeping data"
                );
                PanelOutcome::Ready(data)
            }
            (None, Some(error)) => PanelOutcome::Failed(error),
            (None, None) => {
                tracing::debug!(panel = %panel, "Payload carries neither data nor an error");
                PanelOutcome::Missing
            }
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PanelOutcome::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PanelOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PanelOutcome::Ready(_))
    }

    /// Split back into the nullable wire fields
    pub fn into_parts(self) -> (Option<T>, Option<String>) {
        match self {
            PanelOutcome::Ready(data) => (Some(data), None),
            PanelOutcome::Failed(message) => (None, Some(message)),
            PanelOutcome::Missing => (None, None),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for PanelOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => PanelOutcome::Ready(data),
            Err(e) => PanelOutcome::Failed(e.to_string()),
        }
    }
}

/// Per-panel error messages, as sent on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apod: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nasa_images: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neo_data: Option<String>,
}

impl PanelErrors {
    pub fn is_empty(&self) -> bool {
        self.apod.is_none() && self.nasa_images.is_none() && self.neo_data.is_none()
    }

    pub fn get(&self, panel: Panel) -> Option<&str> {
        match panel {
            Panel::Apod => self.apod.as_deref(),
            Panel::MediaLibrary => self.nasa_images.as_deref(),
            Panel::NearEarthObjects => self.neo_data.as_deref(),
        }
    }
}

/// Composite payload in its wire shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apod: Option<FeaturedImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nasa_images: Option<MediaLibraryResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neo_data: Option<NearEarthObjectFeed>,
    #[serde(default)]
    pub errors: PanelErrors,
}

/// All dashboard data, one outcome per panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SnapshotPayload", into = "SnapshotPayload")]
pub struct DashboardSnapshot {
    pub apod: PanelOutcome<FeaturedImage>,
    pub media: PanelOutcome<MediaLibraryResult>,
    pub neo: PanelOutcome<NearEarthObjectFeed>,
}

impl DashboardSnapshot {
    pub fn new(
        apod: PanelOutcome<FeaturedImage>,
        media: PanelOutcome<MediaLibraryResult>,
        neo: PanelOutcome<NearEarthObjectFeed>,
    ) -> Self {
        Self { apod, media, neo }
    }

    /// Error message for a panel, if its fetch failed
    pub fn error(&self, panel: Panel) -> Option<&str> {
        match panel {
            Panel::Apod => self.apod.error(),
            Panel::MediaLibrary => self.media.error(),
            Panel::NearEarthObjects => self.neo.error(),
        }
    }

    /// Panels whose fetch failed
    pub fn failed_panels(&self) -> Vec<Panel> {
        Panel::ALL
            .into_iter()
            .filter(|panel| self.error(*panel).is_some())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.apod.is_ready() && self.media.is_ready() && self.neo.is_ready()
    }
}

impl From<SnapshotPayload> for DashboardSnapshot {
    fn from(payload: SnapshotPayload) -> Self {
        let errors = payload.errors;
        Self {
            apod: PanelOutcome::from_parts(payload.apod, errors.apod, Panel::Apod),
            media: PanelOutcome::from_parts(
                payload.nasa_images,
                errors.nasa_images,
                Panel::MediaLibrary,
            ),
            neo: PanelOutcome::from_parts(
                payload.neo_data,
                errors.neo_data,
                Panel::NearEarthObjects,
            ),
        }
    }
}

impl From<DashboardSnapshot> for SnapshotPayload {
    fn from(snapshot: DashboardSnapshot) -> Self {
        let (apod, apod_error) = snapshot.apod.into_parts();
        let (nasa_images, media_error) = snapshot.media.into_parts();
        let (neo_data, neo_error) = snapshot.neo.into_parts();

        Self {
            apod,
            nasa_images,
            neo_data,
            errors: PanelErrors {
                apod: apod_error,
                nasa_images: media_error,
                neo_data: neo_error,
            },
        }
    }
}
