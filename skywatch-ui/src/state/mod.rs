//! State Management
//!
//! Global dashboard state.

pub mod global;

pub use global::{provide_dashboard_state, use_dashboard_state};
