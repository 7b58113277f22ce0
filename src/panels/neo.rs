//! Near-Earth object panel

use serde::Serialize;

use super::{render_panel, PanelInput, PanelView};
use crate::charts::{
    closest_approach_sample, hazard_distribution, neo_stats, recent_approaches, ApproachBar,
    HazardDistribution, NeoStats,
};
use crate::model::{NearEarthObject, NearEarthObjectFeed};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachEntry {
    pub id: String,
    pub name: String,
    pub hazardous: bool,
    pub distance_km: f64,
}

impl ApproachEntry {
    fn from_object(neo: &NearEarthObject) -> Self {
        Self {
            id: neo.id.clone(),
            name: neo.name.clone(),
            hazardous: neo.is_hazardous(),
            distance_km: neo.first_miss_distance_km(),
        }
    }

    /// Distance formatted with thousands separators, `"—"` when unknown
    pub fn distance_label(&self) -> String {
        if !self.distance_km.is_finite() {
            return "—".to_string();
        }
        format!("{} km", group_thousands(self.distance_km.round() as u64))
    }
}

/// Objects approaching on one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachGroup {
    pub date: String,
    pub objects: Vec<ApproachEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoView {
    pub stats: NeoStats,
    pub hazard: HazardDistribution,
    pub closest: Vec<ApproachBar>,
    pub recent: Vec<ApproachGroup>,
}

impl NeoView {
    pub fn from_feed(feed: &NearEarthObjectFeed) -> Self {
        Self {
            stats: neo_stats(feed),
            hazard: hazard_distribution(feed),
            closest: closest_approach_sample(feed),
            recent: recent_approaches(feed)
                .into_iter()
                .map(|(date, objects)| ApproachGroup {
                    date: date.to_string(),
                    objects: objects.iter().map(ApproachEntry::from_object).collect(),
                })
                .collect(),
        }
    }
}

pub fn render_neo(input: PanelInput<'_, NearEarthObjectFeed>) -> PanelView<NeoView> {
    render_panel(input, NeoView::from_feed)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(14959787), "14,959,787");
    }

    #[test]
    fn test_neo_view_from_feed() {
        let feed: NearEarthObjectFeed = serde_json::from_value(serde_json::json!({
            "element_count": 3,
            "near_earth_objects": {
                "2024-05-02": [
                    { "id": "2", "name": "(B)", "is_potentially_hazardous_asteroid": false,
                      "close_approach_data": [{ "miss_distance": { "kilometers": "not a number" } }] }
                ],
                "2024-05-01": [
                    { "id": "1", "name": "(A)", "is_potentially_hazardous_asteroid": true,
                      "close_approach_data": [{ "miss_distance": { "kilometers": "7480000.4" } }] },
                    { "id": "3", "name": "(C)", "is_potentially_hazardous_asteroid": false,
                      "close_approach_data": [] }
                ]
            }
        }))
        .unwrap();

        let view = NeoView::from_feed(&feed);
        assert_eq!(view.stats.days_tracked, 2);
        assert_eq!(view.hazard.total(), 3);
        assert_eq!(view.closest.len(), 3);
        assert_eq!(view.closest[0].name, "(B)");
        assert_eq!(view.closest[1].name, "(A)");

        assert_eq!(view.recent[0].date, "2024-05-02");
        assert_eq!(view.recent[0].objects[0].distance_label(), "—");
        assert_eq!(view.recent[1].date, "2024-05-01");
        assert_eq!(view.recent[1].objects[0].distance_label(), "7,480,000 km");
        assert_eq!(view.recent[1].objects[1].distance_label(), "—");
    }
}
