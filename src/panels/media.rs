//! Media library panel

use serde::Serialize;

use super::{render_panel, PanelInput, PanelView};
use crate::charts::{media_distribution, MediaDistribution, MEDIA_GRID_LIMIT};
use crate::model::{MediaItem, MediaKind, MediaLibraryResult};

/// Image shown on a media card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "url", rename_all = "snake_case")]
pub enum ImageSource {
    Url(String),
    /// No displayable image; the placeholder graphic is drawn instead
    Placeholder,
}

impl ImageSource {
    /// Placeholder for an empty URL
    pub fn from_url(url: &str) -> Self {
        if url.is_empty() {
            ImageSource::Placeholder
        } else {
            ImageSource::Url(url.to_string())
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSource::Url(url) => Some(url),
            ImageSource::Placeholder => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaCard {
    pub id: String,
    pub title: String,
    pub date_created: String,
    pub kind: MediaKind,
    pub image: ImageSource,
}

impl MediaCard {
    pub fn from_item(item: &MediaItem) -> Self {
        let metadata = item.metadata();
        Self {
            id: item.href.clone(),
            title: item.title().to_string(),
            date_created: metadata.map(|m| m.date_created.clone()).unwrap_or_default(),
            kind: item.kind().unwrap_or_default(),
            image: ImageSource::from_url(item.display_image_url()),
        }
    }

    /// Creation date without the time component
    pub fn date(&self) -> &str {
        self.date_created
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.date_created)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaView {
    pub distribution: MediaDistribution,
    pub total_results: usize,
    /// The first few results, in upstream order
    pub cards: Vec<MediaCard>,
}

impl MediaView {
    pub fn from_result(result: &MediaLibraryResult) -> Self {
        let items = result.items();
        Self {
            distribution: media_distribution(items),
            total_results: items.len(),
            cards: items
                .iter()
                .take(MEDIA_GRID_LIMIT)
                .map(MediaCard::from_item)
                .collect(),
        }
    }
}

pub fn render_media(input: PanelInput<'_, MediaLibraryResult>) -> PanelView<MediaView> {
    render_panel(input, MediaView::from_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaLink, MediaMetadata};

    fn item(n: usize, render: Option<&str>) -> MediaItem {
        MediaItem {
            href: format!("https://images-assets.nasa.gov/image/{}/collection.json", n),
            data: vec![MediaMetadata {
                title: format!("Item {}", n),
                date_created: "2021-07-04T12:00:00Z".to_string(),
                media_type: MediaKind::Image,
                nasa_id: None,
                description: None,
            }],
            links: vec![MediaLink {
                href: format!("https://images-assets.nasa.gov/image/{}/thumb.jpg", n),
                rel: Some("preview".to_string()),
                render: render.map(str::to_string),
            }],
        }
    }

    #[test]
    fn test_grid_shows_first_four() {
        let result = MediaLibraryResult::new((0..6).map(|n| item(n, Some("image"))).collect());
        let view = MediaView::from_result(&result);

        assert_eq!(view.total_results, 6);
        assert_eq!(view.cards.len(), 4);
        assert_eq!(view.cards[0].title, "Item 0");
        assert_eq!(view.cards[3].title, "Item 3");
        assert_eq!(view.distribution.images, 6);
        assert_eq!(view.cards[0].date(), "2021-07-04");
    }

    #[test]
    fn test_missing_image_link_uses_placeholder() {
        let result = MediaLibraryResult::new(vec![item(0, Some("caption")), item(1, Some("image"))]);
        let view = MediaView::from_result(&result);

        assert_eq!(view.cards[0].image, ImageSource::Placeholder);
        assert_eq!(view.cards[0].image.url(), None);
        assert_eq!(
            view.cards[1].image.url(),
            Some("https://images-assets.nasa.gov/image/1/thumb.jpg")
        );
    }
}
