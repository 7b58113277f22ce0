//! Chart Components
//!
//! Small SVG charts for the panel distributions and the closest-approach
//! bars. Geometry is computed by plain functions so it can be tested off
//! the browser.

use leptos::*;
use skywatch::charts::{max_bar_height, ApproachBar, ChartSlice};

/// Slice colors, in slice order
const SLICE_COLORS: [&str; 2] = [
    "#38BDF8", // Sky
    "#F97316", // Orange
];

const BAR_COLOR: &str = "#38BDF8";
const EMPTY_COLOR: &str = "#374151";

const PIE_RADIUS: f64 = 80.0;
const PIE_CENTER: f64 = 100.0;

const BAR_CHART_WIDTH: f64 = 480.0;
const BAR_CHART_HEIGHT: f64 = 200.0;
const BAR_GAP: f64 = 8.0;

/// Pie chart of a two-way distribution with a percentage legend
#[component]
pub fn PieChart(
    /// Slices to draw, in legend order
    slices: Vec<ChartSlice>,
    /// Accessible chart title
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let total: usize = slices.iter().map(|s| s.value).sum();
    let shapes = pie_paths(&slices, total);

    let legend = slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
            view! {
                <div class="flex items-center space-x-2">
                    <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
                    <span class="text-sm text-gray-300">{slice.label(total)}</span>
                    <span class="text-sm text-gray-500">{format!("({})", slice.value)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <figure class="flex items-center gap-6">
            <svg viewBox="0 0 200 200" class="w-40 h-40 shrink-0" role="img" aria-label=label>
                {shapes.into_iter().map(|shape| match shape {
                    PieShape::Circle { color } => view! {
                        <circle cx=PIE_CENTER cy=PIE_CENTER r=PIE_RADIUS fill=color />
                    }.into_view(),
                    PieShape::Sector { path, color } => view! {
                        <path d=path fill=color stroke="#111827" stroke-width="2" />
                    }.into_view(),
                }).collect_view()}
            </svg>
            <figcaption class="space-y-2">{legend}</figcaption>
        </figure>
    }
}

/// Vertical bar chart of miss distances
#[component]
pub fn BarChart(bars: Vec<ApproachBar>) -> impl IntoView {
    let layout = bar_layout(&bars);

    view! {
        <svg
            viewBox=format!("0 0 {} {}", BAR_CHART_WIDTH, BAR_CHART_HEIGHT)
            class="w-full h-48"
            role="img"
            aria-label="Miss distance of the first objects in the feed, in kilometers"
        >
            {layout.into_iter().zip(bars).map(|(rect, bar)| view! {
                <rect
                    x=rect.x
                    y=rect.y
                    width=rect.width
                    height=rect.height
                    fill=BAR_COLOR
                    rx="2"
                >
                    <title>{format!("{}: {:.0} km", bar.name, bar.bar_height())}</title>
                </rect>
            }).collect_view()}
        </svg>
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PieShape {
    Circle { color: &'static str },
    Sector { path: String, color: &'static str },
}

/// SVG shapes for the non-empty slices; one grey circle when there is no data
fn pie_paths(slices: &[ChartSlice], total: usize) -> Vec<PieShape> {
    if total == 0 {
        return vec![PieShape::Circle { color: EMPTY_COLOR }];
    }

    let mut shapes = Vec::new();
    let mut start = 0.0_f64;

    for (idx, slice) in slices.iter().enumerate() {
        if slice.value == 0 {
            continue;
        }
        let color = SLICE_COLORS[idx % SLICE_COLORS.len()];

        if slice.value == total {
            // A full-circle arc has identical endpoints and draws nothing
            shapes.push(PieShape::Circle { color });
            continue;
        }

        let sweep = slice.value as f64 / total as f64 * std::f64::consts::TAU;
        let end = start + sweep;
        let (x0, y0) = polar(start);
        let (x1, y1) = polar(end);
        let large_arc = u8::from(sweep > std::f64::consts::PI);

        shapes.push(PieShape::Sector {
            path: format!(
                "M {c} {c} L {x0:.2} {y0:.2} A {r} {r} 0 {large_arc} 1 {x1:.2} {y1:.2} Z",
                c = PIE_CENTER,
                r = PIE_RADIUS,
            ),
            color,
        });
        start = end;
    }

    shapes
}

/// Point on the pie rim, angle measured clockwise from 12 o'clock
fn polar(angle: f64) -> (f64, f64) {
    (
        PIE_CENTER + PIE_RADIUS * angle.sin(),
        PIE_CENTER - PIE_RADIUS * angle.cos(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BarRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Bar rectangles scaled to the tallest drawable bar
fn bar_layout(bars: &[ApproachBar]) -> Vec<BarRect> {
    if bars.is_empty() {
        return Vec::new();
    }

    let max = max_bar_height(bars);
    let slot = BAR_CHART_WIDTH / bars.len() as f64;
    let width = (slot - BAR_GAP).max(1.0);

    bars.iter()
        .enumerate()
        .map(|(idx, bar)| {
            let height = if max > 0.0 {
                bar.bar_height() / max * BAR_CHART_HEIGHT
            } else {
                0.0
            };
            BarRect {
                x: idx as f64 * slot + BAR_GAP / 2.0,
                y: BAR_CHART_HEIGHT - height,
                width,
                height,
            }
        })
        .collect()
}
