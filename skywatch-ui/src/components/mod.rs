//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod apod_panel;
pub mod chart;
pub mod image;
pub mod loading;
pub mod media_panel;
pub mod neo_panel;
pub mod panel_frame;
pub mod reveal;

pub use apod_panel::ApodPanel;
pub use chart::{BarChart, PieChart};
pub use image::{FallbackImage, ImagePlaceholder};
pub use loading::PanelSkeleton;
pub use media_panel::MediaPanel;
pub use neo_panel::NeoPanel;
pub use panel_frame::{panel_body, PanelFrame};
pub use reveal::Reveal;
