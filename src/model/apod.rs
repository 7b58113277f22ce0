//! Astronomy Picture of the Day

use serde::{Deserialize, Serialize};

/// Kind of media published by the upstream APIs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
    /// Anything else the upstream reports (the image library also serves audio)
    #[serde(other)]
    Other,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Other => "other",
        }
    }
}

/// The daily featured image (or video)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedImage {
    pub title: String,
    pub explanation: String,
    /// Publication date, ISO `YYYY-MM-DD`
    pub date: String,
    /// Attribution, absent for public-domain images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default)]
    pub media_type: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
}

impl FeaturedImage {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaKind::Video
    }

    /// Attribution trimmed of the stray newlines the upstream embeds
    pub fn attribution(&self) -> Option<String> {
        self.copyright
            .as_deref()
            .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_apod() {
        let json = r#"{
            "copyright": "\nJane Doe\n",
            "date": "2024-01-01",
            "explanation": "A nebula.",
            "hdurl": "https://apod.nasa.gov/hd.jpg",
            "media_type": "image",
            "service_version": "v1",
            "title": "Pillars",
            "url": "https://apod.nasa.gov/img.jpg"
        }"#;

        let apod: FeaturedImage = serde_json::from_str(json).unwrap();
        assert_eq!(apod.title, "Pillars");
        assert_eq!(apod.media_type, MediaKind::Image);
        assert!(!apod.is_video());
        assert_eq!(apod.attribution().as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_unknown_media_kind() {
        let kind: MediaKind = serde_json::from_str(r#""audio""#).unwrap();
        assert_eq!(kind, MediaKind::Other);
    }

    #[test]
    fn test_missing_copyright_is_none() {
        let json = r#"{"date":"2024-01-01","explanation":"x","media_type":"video","title":"t","url":"https://youtube.com/embed/x"}"#;
        let apod: FeaturedImage = serde_json::from_str(json).unwrap();
        assert!(apod.is_video());
        assert_eq!(apod.attribution(), None);
    }
}
