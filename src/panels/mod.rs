//! Panel Renderers
//!
//! Every dashboard panel is rendered from the same three inputs: its data
//! slice (if any), its error message (if any) and the global loading flag.
//! [`render_panel`] applies the shared decision table; the per-panel modules
//! build the content views, including their derived chart data.
//!
//! | data    | error              | loading | view          |
//! |---------|--------------------|---------|---------------|
//! | present | any                | any     | `Content`     |
//! | absent  | rate limit / 429   | any     | `RateLimited` |
//! | absent  | other              | any     | `Error`       |
//! | absent  | absent             | true    | `Loading`     |
//! | absent  | absent             | false   | `Empty`       |

mod apod;
mod media;
mod neo;

pub use apod::{render_apod, ApodView};
pub use media::{render_media, ImageSource, MediaCard, MediaView};
pub use neo::{render_neo, ApproachEntry, ApproachGroup, NeoView};

use serde::Serialize;

use crate::model::{DashboardSnapshot, PanelOutcome};

/// Where users can request their own API key
pub const RATE_LIMIT_SUPPORT_URL: &str = "https://api.nasa.gov/";

const RATE_LIMIT_MESSAGE: &str =
    "The NASA API rate limit has been reached. Data will be available again shortly; \
     a personal API key raises the limit.";

/// Check whether an upstream error message reports rate limiting
pub fn is_rate_limited(error: &str) -> bool {
    let lower = error.to_lowercase();
    lower.contains("rate limit") || lower.contains("429")
}

/// Friendlier replacement for rate-limit errors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateLimitNotice {
    pub message: &'static str,
    pub support_url: &'static str,
}

impl Default for RateLimitNotice {
    fn default() -> Self {
        Self {
            message: RATE_LIMIT_MESSAGE,
            support_url: RATE_LIMIT_SUPPORT_URL,
        }
    }
}

/// Inputs of a single panel render
#[derive(Debug)]
pub struct PanelInput<'a, T> {
    pub data: Option<&'a T>,
    pub error: Option<&'a str>,
    pub loading: bool,
}

impl<'a, T> PanelInput<'a, T> {
    pub fn new(data: Option<&'a T>, error: Option<&'a str>, loading: bool) -> Self {
        Self {
            data,
            error,
            loading,
        }
    }

    /// Inputs for a panel whose outcome may not have arrived yet
    pub fn from_outcome(outcome: Option<&'a PanelOutcome<T>>, loading: bool) -> Self {
        Self {
            data: outcome.and_then(PanelOutcome::data),
            error: outcome.and_then(PanelOutcome::error),
            loading,
        }
    }
}

/// What a panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "view", rename_all = "snake_case")]
pub enum PanelView<V> {
    Content(V),
    RateLimited(RateLimitNotice),
    /// Upstream error text, verbatim
    Error(String),
    Loading,
    Empty,
}

impl<V> PanelView<V> {
    pub fn content(&self) -> Option<&V> {
        match self {
            PanelView::Content(view) => Some(view),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PanelView::Content(_) => "content",
            PanelView::RateLimited(_) => "rate_limited",
            PanelView::Error(_) => "error",
            PanelView::Loading => "loading",
            PanelView::Empty => "empty",
        }
    }
}

/// Apply the shared decision table, building content with `content`
pub fn render_panel<T, V>(input: PanelInput<'_, T>, content: impl FnOnce(&T) -> V) -> PanelView<V> {
    match (input.data, input.error) {
        (Some(data), _) => PanelView::Content(content(data)),
        (None, Some(error)) if is_rate_limited(error) => {
            PanelView::RateLimited(RateLimitNotice::default())
        }
        (None, Some(error)) => PanelView::Error(error.to_string()),
        (None, None) if input.loading => PanelView::Loading,
        (None, None) => PanelView::Empty,
    }
}

/// All three panel views of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub apod: PanelView<ApodView>,
    pub media: PanelView<MediaView>,
    pub neo: PanelView<NeoView>,
}

impl DashboardViews {
    /// Render every panel from an optional snapshot
    pub fn build(snapshot: Option<&DashboardSnapshot>, loading: bool) -> Self {
        Self {
            apod: render_apod(PanelInput::from_outcome(snapshot.map(|s| &s.apod), loading)),
            media: render_media(PanelInput::from_outcome(snapshot.map(|s| &s.media), loading)),
            neo: render_neo(PanelInput::from_outcome(snapshot.map(|s| &s.neo), loading)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaKind, NearEarthObjectFeed};

    #[test]
    fn test_rate_limit_detection() {
        assert!(is_rate_limited("API rate limit exceeded"));
        assert!(is_rate_limited("Rate Limit"));
        assert!(is_rate_limited("upstream returned 429"));
        assert!(is_rate_limited("OVER_RATE_LIMIT: RATE LIMIT"));
        assert!(!is_rate_limited("rate-limited"));
        assert!(!is_rate_limited("Internal server error (500)"));
    }

    fn render(input: PanelInput<'_, i32>) -> PanelView<i32> {
        render_panel(input, |d| *d * 2)
    }

    #[test]
    fn test_decision_table() {
        let data = 7;

        assert_eq!(render(PanelInput::new(Some(&data), Some("429"), true)), PanelView::Content(14));
        assert_eq!(
            render(PanelInput::new(None, Some("Too many requests (429)"), false)),
            PanelView::RateLimited(RateLimitNotice::default())
        );
        assert_eq!(
            render(PanelInput::new(None, Some("Service down"), true)),
            PanelView::Error("Service down".to_string())
        );
        assert_eq!(render(PanelInput::new(None, None, true)), PanelView::Loading);
        assert_eq!(render(PanelInput::new(None, None, false)), PanelView::Empty);
    }

    #[test]
    fn test_apod_429_never_renders_generic_error() {
        for error in ["429", "HTTP 429 Too Many Requests", "API rate limit exceeded (429)"] {
            let snapshot: DashboardSnapshot = serde_json::from_value(serde_json::json!({
                "errors": { "apod": error }
            }))
            .unwrap();

            let views = DashboardViews::build(Some(&snapshot), false);
            assert_eq!(views.apod.kind(), "rate_limited", "error: {}", error);
        }
    }

    #[test]
    fn test_panel_absent_from_snapshot_renders_empty() {
        let snapshot: DashboardSnapshot = serde_json::from_value(serde_json::json!({
            "nasaImages": { "collection": { "items": [] } },
            "neoData": { "element_count": 0, "near_earth_objects": {} },
            "errors": {}
        }))
        .unwrap();

        let views = DashboardViews::build(Some(&snapshot), false);
        assert_eq!(views.apod, PanelView::Empty);
        assert_eq!(views.media.kind(), "content");

        let refetching = DashboardViews::build(Some(&snapshot), true);
        assert_eq!(refetching.apod, PanelView::Loading);
    }

    #[test]
    fn test_no_snapshot_renders_loading_or_empty() {
        let loading = DashboardViews::build(None, true);
        assert_eq!(loading.apod, PanelView::Loading);
        assert_eq!(loading.media, PanelView::Loading);
        assert_eq!(loading.neo, PanelView::Loading);

        let idle = DashboardViews::build(None, false);
        assert_eq!(idle.neo, PanelView::Empty);
    }

    #[test]
    fn test_end_to_end_partial_snapshot() {
        let item = |kind: &str| {
            serde_json::json!({
                "href": format!("https://images-assets.nasa.gov/{}/collection.json", kind),
                "data": [{ "title": kind, "date_created": "2024-01-01T00:00:00Z", "media_type": kind }],
                "links": [{ "href": "https://images-assets.nasa.gov/thumb.jpg", "rel": "preview", "render": "image" }]
            })
        };
        let neo = |id: &str, hazardous: bool| {
            serde_json::json!({
                "id": id,
                "name": format!("({})", id),
                "is_potentially_hazardous_asteroid": hazardous,
                "close_approach_data": [{ "miss_distance": { "kilometers": "1000.5" } }]
            })
        };

        let snapshot: DashboardSnapshot = serde_json::from_value(serde_json::json!({
            "errors": { "apod": "API rate limit exceeded (429)" },
            "nasaImages": { "collection": { "items": [item("image"), item("image"), item("video"), item("image")] } },
            "neoData": {
                "element_count": 5,
                "near_earth_objects": { "2024-01-01": [neo("a", true), neo("b", false)] }
            }
        }))
        .unwrap();

        let views = DashboardViews::build(Some(&snapshot), false);

        assert_eq!(views.apod, PanelView::RateLimited(RateLimitNotice::default()));

        let media = views.media.content().unwrap();
        assert_eq!(media.distribution.images, 3);
        assert_eq!(media.distribution.videos, 1);
        let labels: Vec<String> = media
            .distribution
            .slices()
            .iter()
            .map(|s| s.label(media.distribution.total()))
            .collect();
        assert_eq!(labels, vec!["Images 75%", "Videos 25%"]);
        assert_eq!(media.cards.len(), 4);
        assert_eq!(media.cards[2].kind, MediaKind::Video);

        let neo = views.neo.content().unwrap();
        assert_eq!(neo.stats.total_objects, 5);
        assert_eq!(neo.stats.potentially_hazardous, 1);
        assert_eq!(neo.stats.days_tracked, 1);
    }

    #[test]
    fn test_views_serialize_with_state_tag() {
        let views = DashboardViews::build(None, true);
        let value = serde_json::to_value(&views).unwrap();
        assert_eq!(value["apod"]["state"], "loading");

        let feed = NearEarthObjectFeed::default();
        let neo = render_neo(PanelInput::new(Some(&feed), None, false));
        let value = serde_json::to_value(&neo).unwrap();
        assert_eq!(value["state"], "content");
        assert_eq!(value["view"]["stats"]["total_objects"], 0);
    }
}
