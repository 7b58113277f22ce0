//! Text rendering of the dashboard panels for terminal output.

use std::fmt::Write;

use crate::charts::{max_bar_height, ChartSlice};
use crate::model::Panel;
use crate::panels::{ApodView, DashboardViews, ImageSource, MediaView, NeoView, PanelView};

const BAR_WIDTH: usize = 30;

/// Render all panels, in page order
pub fn render_dashboard(views: &DashboardViews) -> String {
    let mut out = String::new();
    render_section(&mut out, Panel::Apod, &views.apod, render_apod);
    render_section(&mut out, Panel::MediaLibrary, &views.media, render_media);
    render_section(&mut out, Panel::NearEarthObjects, &views.neo, render_neo);
    out
}

/// Full-page error shown when no payload could be fetched at all
pub fn render_failure(message: &str) -> String {
    format!("Unable to load the dashboard\n  {}\n", message)
}

fn render_section<V>(
    out: &mut String,
    panel: Panel,
    view: &PanelView<V>,
    content: fn(&mut String, &V),
) {
    let title = panel.title();
    let _ = writeln!(out, "{}\n{}", title, "=".repeat(title.len()));

    match view {
        PanelView::Content(v) => content(out, v),
        PanelView::RateLimited(notice) => {
            let _ = writeln!(out, "! {}", notice.message);
            let _ = writeln!(out, "  Get an API key: {}", notice.support_url);
        }
        PanelView::Error(message) => {
            let _ = writeln!(out, "Error: {}", message);
        }
        PanelView::Loading => out.push_str("Loading...\n"),
        PanelView::Empty => out.push_str("No data available.\n"),
    }
    out.push('\n');
}

fn render_apod(out: &mut String, view: &ApodView) {
    let _ = writeln!(out, "{} ({})", view.title, view.date);
    if let Some(copyright) = &view.copyright {
        let _ = writeln!(out, "(c) {}", copyright);
    }
    let label = if view.is_video() { "Video" } else { "Image" };
    let _ = writeln!(out, "{}: {}", label, view.full_url);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.explanation);
}

fn render_media(out: &mut String, view: &MediaView) {
    let total = view.distribution.total();
    let _ = writeln!(out, "{} results", view.total_results);
    for slice in view.distribution.slices() {
        render_slice(out, &slice, total);
    }
    let _ = writeln!(out);

    for card in &view.cards {
        let image = match &card.image {
            ImageSource::Url(url) => url.as_str(),
            ImageSource::Placeholder => "[no preview]",
        };
        let _ = writeln!(out, "- {} [{}] {}", card.title, card.kind.as_str(), card.date());
        let _ = writeln!(out, "  {}", image);
    }
}

fn render_neo(out: &mut String, view: &NeoView) {
    let stats = &view.stats;
    let _ = writeln!(out, "Total Objects:          {}", stats.total_objects);
    let _ = writeln!(out, "Potentially Hazardous:  {}", stats.potentially_hazardous);
    let _ = writeln!(out, "Days Tracked:           {}", stats.days_tracked);
    let _ = writeln!(out);

    let total = view.hazard.total();
    for slice in view.hazard.slices() {
        render_slice(out, &slice, total);
    }
    let _ = writeln!(out);

    if !view.closest.is_empty() {
        let _ = writeln!(out, "Closest approaches (km)");
        let max = max_bar_height(&view.closest);
        for bar in &view.closest {
            let width = if max > 0.0 {
                (bar.bar_height() / max * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let _ = writeln!(out, "  {:<24} {}", bar.name, "#".repeat(width));
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Recent Close Approaches");
    for group in &view.recent {
        let _ = writeln!(out, "  {}", group.date);
        for neo in &group.objects {
            let marker = if neo.hazardous { "!" } else { " " };
            let _ = writeln!(out, "   {} {:<24} {}", marker, neo.name, neo.distance_label());
        }
    }
}

fn render_slice(out: &mut String, slice: &ChartSlice, total: usize) {
    let _ = writeln!(out, "  {:<16} {}", slice.label(total), slice.value);
}
