//! Chart Data Derivers
//!
//! Pure functions that turn raw panel collections into small chart-ready
//! summaries. Nothing here knows how the charts are drawn.

use serde::Serialize;

use crate::model::{MediaItem, MediaKind, NearEarthObject, NearEarthObjectFeed};

/// Media cards shown in the library grid
pub const MEDIA_GRID_LIMIT: usize = 4;

/// Objects plotted in the closest-approach bar chart
pub const APPROACH_SAMPLE_LIMIT: usize = 8;

/// Dates listed under "Recent Close Approaches"
pub const RECENT_DATES_LIMIT: usize = 5;

/// Objects listed per date under "Recent Close Approaches"
pub const OBJECTS_PER_DATE_LIMIT: usize = 3;

/// A named slice of a distribution chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: usize,
}

impl ChartSlice {
    /// Share of `total`, rounded to the nearest whole percent (0 when total is 0)
    pub fn percent_of(&self, total: usize) -> u32 {
        percent(self.value, total)
    }

    /// Slice label, e.g. `"Images 75%"`
    pub fn label(&self, total: usize) -> String {
        format!("{} {}%", self.name, self.percent_of(total))
    }
}

fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 * 100.0 / total as f64).round() as u32
}

// ============================================
// Media library
// ============================================

/// Image vs video split of a media search result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaDistribution {
    pub images: usize,
    pub videos: usize,
}

impl MediaDistribution {
    pub fn total(&self) -> usize {
        self.images + self.videos
    }

    pub fn slices(&self) -> [ChartSlice; 2] {
        [
            ChartSlice {
                name: "Images",
                value: self.images,
            },
            ChartSlice {
                name: "Videos",
                value: self.videos,
            },
        ]
    }
}

/// Count items by media kind into exactly two buckets.
///
/// Only the first metadata record is consulted; kinds other than image and
/// video fall in neither bucket.
pub fn media_distribution(items: &[MediaItem]) -> MediaDistribution {
    items
        .iter()
        .fold(MediaDistribution::default(), |mut dist, item| {
            match item.kind() {
                Some(MediaKind::Image) => dist.images += 1,
                Some(MediaKind::Video) => dist.videos += 1,
                _ => {}
            }
            dist
        })
}

// ============================================
// Near-Earth objects
// ============================================

/// All objects of the feed in upstream order, date by date
pub fn flatten_feed(feed: &NearEarthObjectFeed) -> Vec<&NearEarthObject> {
    feed.near_earth_objects.values().flatten().collect()
}

/// Hazardous vs non-hazardous object counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HazardDistribution {
    pub hazardous: usize,
    pub safe: usize,
}

impl HazardDistribution {
    pub fn total(&self) -> usize {
        self.hazardous + self.safe
    }

    pub fn slices(&self) -> [ChartSlice; 2] {
        [
            ChartSlice {
                name: "Hazardous",
                value: self.hazardous,
            },
            ChartSlice {
                name: "Safe",
                value: self.safe,
            },
        ]
    }
}

pub fn hazard_distribution(feed: &NearEarthObjectFeed) -> HazardDistribution {
    let (hazardous, safe): (Vec<&NearEarthObject>, Vec<&NearEarthObject>) = flatten_feed(feed)
        .into_iter()
        .partition(|neo| neo.is_hazardous());

    HazardDistribution {
        hazardous: hazardous.len(),
        safe: safe.len(),
    }
}

/// One bar of the closest-approach chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachBar {
    pub name: String,
    /// Miss distance in km; NaN when the upstream value is missing or malformed
    pub distance_km: f64,
}

impl ApproachBar {
    /// Height to draw, with NaN drawn as an empty bar
    pub fn bar_height(&self) -> f64 {
        if self.distance_km.is_finite() {
            self.distance_km
        } else {
            0.0
        }
    }
}

/// First [`APPROACH_SAMPLE_LIMIT`] objects of the flattened feed, unsorted
pub fn closest_approach_sample(feed: &NearEarthObjectFeed) -> Vec<ApproachBar> {
    flatten_feed(feed)
        .into_iter()
        .take(APPROACH_SAMPLE_LIMIT)
        .map(|neo| ApproachBar {
            name: neo.name.clone(),
            distance_km: neo.first_miss_distance_km(),
        })
        .collect()
}

/// Largest drawable bar height, used to scale the chart
pub fn max_bar_height(bars: &[ApproachBar]) -> f64 {
    bars.iter().map(ApproachBar::bar_height).fold(0.0, f64::max)
}

/// Headline numbers of the NEO panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NeoStats {
    /// Upstream `element_count`, reported as-is
    pub total_objects: u64,
    pub potentially_hazardous: usize,
    pub days_tracked: usize,
}

pub fn neo_stats(feed: &NearEarthObjectFeed) -> NeoStats {
    NeoStats {
        total_objects: feed.element_count,
        potentially_hazardous: hazard_distribution(feed).hazardous,
        days_tracked: feed.days_tracked(),
    }
}

/// The first dates of the feed, each with its first few objects
pub fn recent_approaches(feed: &NearEarthObjectFeed) -> Vec<(&str, &[NearEarthObject])> {
    feed.near_earth_objects
        .iter()
        .take(RECENT_DATES_LIMIT)
        .map(|(date, objects)| {
            let shown = objects.len().min(OBJECTS_PER_DATE_LIMIT);
            (date.as_str(), &objects[..shown])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CloseApproach, MediaMetadata, MissDistance};
    use indexmap::IndexMap;

    fn media(kind: MediaKind) -> MediaItem {
        MediaItem {
            href: "https://images-assets.nasa.gov/x/collection.json".to_string(),
            data: vec![MediaMetadata {
                title: "item".to_string(),
                date_created: "2024-01-01T00:00:00Z".to_string(),
                media_type: kind,
                nasa_id: None,
                description: None,
            }],
            links: Vec::new(),
        }
    }

    fn neo(name: &str, hazardous: bool, km: Option<&str>) -> NearEarthObject {
        NearEarthObject {
            id: name.to_string(),
            name: name.to_string(),
            is_potentially_hazardous_asteroid: hazardous,
            close_approach_data: km
                .map(|km| {
                    vec![CloseApproach {
                        close_approach_date: None,
                        miss_distance: MissDistance {
                            kilometers: km.to_string(),
                        },
                    }]
                })
                .unwrap_or_default(),
        }
    }

    fn feed(days: &[(&str, Vec<NearEarthObject>)]) -> NearEarthObjectFeed {
        let near_earth_objects: IndexMap<String, Vec<NearEarthObject>> = days
            .iter()
            .map(|(date, objects)| (date.to_string(), objects.clone()))
            .collect();
        NearEarthObjectFeed {
            element_count: near_earth_objects.values().map(Vec::len).sum::<usize>() as u64,
            near_earth_objects,
        }
    }

    #[test]
    fn test_media_distribution_counts_two_buckets() {
        let items = vec![
            media(MediaKind::Image),
            media(MediaKind::Video),
            media(MediaKind::Image),
            media(MediaKind::Image),
        ];

        let dist = media_distribution(&items);
        assert_eq!(dist, MediaDistribution { images: 3, videos: 1 });
        assert_eq!(dist.total(), items.len());

        let [images, videos] = dist.slices();
        assert_eq!(images.label(dist.total()), "Images 75%");
        assert_eq!(videos.label(dist.total()), "Videos 25%");
    }

    #[test]
    fn test_media_distribution_never_exceeds_item_count() {
        let mut items = vec![media(MediaKind::Image), media(MediaKind::Other)];
        items.push(MediaItem {
            href: "no-metadata".to_string(),
            data: Vec::new(),
            links: Vec::new(),
        });

        let dist = media_distribution(&items);
        assert_eq!(dist, MediaDistribution { images: 1, videos: 0 });
        assert!(dist.total() <= items.len());
    }

    #[test]
    fn test_empty_distribution_labels_zero_percent() {
        let dist = media_distribution(&[]);
        assert_eq!(dist.total(), 0);
        let [images, videos] = dist.slices();
        assert_eq!(images.label(0), "Images 0%");
        assert_eq!(videos.label(0), "Videos 0%");
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
    }

    #[test]
    fn test_flatten_and_hazard_counts_cover_all_dates() {
        let feed = feed(&[
            ("2024-01-02", vec![neo("c", true, Some("3")), neo("d", false, Some("4"))]),
            ("2024-01-01", vec![neo("a", false, Some("1")), neo("b", true, Some("2"))]),
            ("2024-01-03", vec![neo("e", false, None)]),
        ]);

        let flat = flatten_feed(&feed);
        assert_eq!(flat.len(), 5);
        let names: Vec<&str> = flat.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["c", "d", "a", "b", "e"]);

        let hazard = hazard_distribution(&feed);
        assert_eq!(hazard, HazardDistribution { hazardous: 2, safe: 3 });
        assert_eq!(hazard.total(), flat.len());
    }

    #[test]
    fn test_closest_approach_sample_takes_first_eight_unsorted() {
        let objects: Vec<NearEarthObject> = (0..10)
            .map(|i| {
                let km = (1000 - i).to_string();
                neo(&format!("n{}", i), false, Some(km.as_str()))
            })
            .collect();
        let feed = feed(&[("2024-01-01", objects)]);

        let bars = closest_approach_sample(&feed);
        assert_eq!(bars.len(), APPROACH_SAMPLE_LIMIT);
        assert_eq!(bars[0].name, "n0");
        assert_eq!(bars[0].distance_km, 1000.0);
        assert_eq!(bars[7].distance_km, 993.0);
    }

    #[test]
    fn test_sample_and_recent_follow_upstream_date_order() {
        let feed: NearEarthObjectFeed = serde_json::from_value(serde_json::json!({
            "element_count": 2,
            "near_earth_objects": {
                "2024-01-05": [{ "id": "5", "name": "five", "close_approach_data": [] }],
                "2024-01-01": [{ "id": "1", "name": "one", "close_approach_data": [] }]
            }
        }))
        .unwrap();

        let names: Vec<String> = closest_approach_sample(&feed).into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["five", "one"]);

        let dates: Vec<&str> = recent_approaches(&feed).iter().map(|(date, _)| *date).collect();
        assert_eq!(dates, vec!["2024-01-05", "2024-01-01"]);
    }

    #[test]
    fn test_unparsable_distance_is_nan_and_zero_height() {
        let feed = feed(&[(
            "2024-01-01",
            vec![neo("bad", false, Some("n/a")), neo("none", false, None), neo("ok", false, Some("12.5"))],
        )]);

        let bars = closest_approach_sample(&feed);
        assert!(bars[0].distance_km.is_nan());
        assert!(bars[1].distance_km.is_nan());
        assert_eq!(bars[0].bar_height(), 0.0);
        assert_eq!(bars[1].bar_height(), 0.0);
        assert_eq!(max_bar_height(&bars), 12.5);
    }

    #[test]
    fn test_neo_stats_reports_element_count_as_is() {
        let mut feed = feed(&[("2024-01-01", vec![neo("a", true, Some("1")), neo("b", false, Some("2"))])]);
        feed.element_count = 5;

        let stats = neo_stats(&feed);
        assert_eq!(
            stats,
            NeoStats {
                total_objects: 5,
                potentially_hazardous: 1,
                days_tracked: 1,
            }
        );
    }

    #[test]
    fn test_recent_approaches_caps_dates_and_objects() {
        let days: Vec<(String, Vec<NearEarthObject>)> = (1..=7)
            .map(|d| {
                let objects = (0..4).map(|i| neo(&format!("{}-{}", d, i), false, Some("1"))).collect();
                (format!("2024-01-0{}", d), objects)
            })
            .collect();
        let days: Vec<(&str, Vec<NearEarthObject>)> =
            days.iter().map(|(d, o)| (d.as_str(), o.clone())).collect();
        let feed = feed(&days);

        let recent = recent_approaches(&feed);
        assert_eq!(recent.len(), RECENT_DATES_LIMIT);
        assert_eq!(recent[0].0, "2024-01-01");
        assert_eq!(recent[4].0, "2024-01-05");
        assert!(recent.iter().all(|(_, objects)| objects.len() == OBJECTS_PER_DATE_LIMIT));
    }
}
