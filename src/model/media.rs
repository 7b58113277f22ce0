//! NASA Image and Video Library search results

use serde::{Deserialize, Serialize};

use super::apod::MediaKind;

/// Render tag marking a link as a displayable image
const IMAGE_RENDER_TAG: &str = "image";

/// Search result, in the upstream `{ "collection": { "items": [...] } }` shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaLibraryResult {
    #[serde(default)]
    pub collection: MediaCollection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaCollection {
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

impl MediaLibraryResult {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            collection: MediaCollection { items },
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.collection.items
    }

    pub fn len(&self) -> usize {
        self.collection.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.items.is_empty()
    }
}

/// A single library entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Asset manifest URL, unique per item
    pub href: String,
    #[serde(default)]
    pub data: Vec<MediaMetadata>,
    #[serde(default)]
    pub links: Vec<MediaLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub media_type: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nasa_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaLink {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}

impl MediaItem {
    /// First metadata record; the upstream always sends at least one
    pub fn metadata(&self) -> Option<&MediaMetadata> {
        self.data.first()
    }

    pub fn title(&self) -> &str {
        self.metadata().map(|m| m.title.as_str()).unwrap_or("")
    }

    /// Media kind of the first metadata record, `None` when there is none
    pub fn kind(&self) -> Option<MediaKind> {
        self.metadata().map(|m| m.media_type)
    }

    /// URL of the first link rendered as an image, or `""` when none exists
    pub fn display_image_url(&self) -> &str {
        self.links
            .iter()
            .find(|link| link.render.as_deref() == Some(IMAGE_RENDER_TAG))
            .map(|link| link.href.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, render: Option<&str>) -> MediaLink {
        MediaLink {
            href: href.to_string(),
            rel: Some("preview".to_string()),
            render: render.map(str::to_string),
        }
    }

    fn item(links: Vec<MediaLink>) -> MediaItem {
        MediaItem {
            href: "https://images-assets.nasa.gov/image/x/collection.json".to_string(),
            data: vec![MediaMetadata {
                title: "Orion".to_string(),
                date_created: "2020-02-02T00:00:00Z".to_string(),
                media_type: MediaKind::Image,
                nasa_id: None,
                description: None,
            }],
            links,
        }
    }

    #[test]
    fn test_display_url_picks_first_image_link() {
        let item = item(vec![
            link("https://a/captions.srt", Some("caption")),
            link("https://a/thumb.jpg", Some("image")),
            link("https://a/other.jpg", Some("image")),
        ]);
        assert_eq!(item.display_image_url(), "https://a/thumb.jpg");
    }

    #[test]
    fn test_display_url_empty_without_image_link() {
        let item = item(vec![link("https://a/captions.srt", Some("caption")), link("https://a/x", None)]);
        assert_eq!(item.display_image_url(), "");

        let bare = self::item(Vec::new());
        assert_eq!(bare.display_image_url(), "");
    }

    #[test]
    fn test_deserialize_upstream_collection() {
        let json = r#"{
            "collection": {
                "version": "1.0",
                "href": "https://images-api.nasa.gov/search?q=nebula",
                "items": [
                    {
                        "href": "https://images-assets.nasa.gov/image/PIA1/collection.json",
                        "data": [{
                            "center": "JPL",
                            "title": "Crab Nebula",
                            "nasa_id": "PIA1",
                            "date_created": "2005-12-01T00:00:00Z",
                            "media_type": "image"
                        }],
                        "links": [{
                            "href": "https://images-assets.nasa.gov/image/PIA1/PIA1~thumb.jpg",
                            "rel": "preview",
                            "render": "image"
                        }]
                    },
                    {
                        "href": "https://images-assets.nasa.gov/video/V1/collection.json",
                        "data": [{"title": "Launch", "date_created": "2019-01-01T00:00:00Z", "media_type": "video"}]
                    }
                ],
                "metadata": {"total_hits": 2}
            }
        }"#;

        let result: MediaLibraryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.items()[0].title(), "Crab Nebula");
        assert_eq!(result.items()[1].kind(), Some(MediaKind::Video));
        assert_eq!(result.items()[1].display_image_url(), "");
    }
}
