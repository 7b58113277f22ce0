//! APOD panel

use serde::Serialize;

use super::{render_panel, PanelInput, PanelView};
use crate::model::{FeaturedImage, MediaKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApodView {
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub copyright: Option<String>,
    pub media_kind: MediaKind,
    /// Image source, or the embeddable player URL for videos
    pub url: String,
    /// Full-resolution image, falling back to `url`
    pub full_url: String,
}

impl ApodView {
    pub fn from_image(apod: &FeaturedImage) -> Self {
        Self {
            title: apod.title.clone(),
            date: apod.date.clone(),
            explanation: apod.explanation.clone(),
            copyright: apod.attribution(),
            media_kind: apod.media_type,
            url: apod.url.clone(),
            full_url: apod.hdurl.clone().unwrap_or_else(|| apod.url.clone()),
        }
    }

    pub fn is_video(&self) -> bool {
        self.media_kind == MediaKind::Video
    }
}

pub fn render_apod(input: PanelInput<'_, FeaturedImage>) -> PanelView<ApodView> {
    render_panel(input, ApodView::from_image)
}
