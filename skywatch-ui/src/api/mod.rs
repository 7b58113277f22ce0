//! API Client
//!
//! HTTP access to the Skywatch REST API.

pub mod client;

pub use client::fetch_dashboard;
