//! Dashboard Aggregator
//!
//! Owns the single batched dashboard request and the loading / error / ready
//! state derived from it. The aggregator never performs I/O itself: callers
//! ask it for a [`FetchTicket`], run the request however their platform does
//! (browser fetch, reqwest) and hand the result back with
//! [`DashboardAggregator::complete`].
//!
//! A successful snapshot stays fresh for the configured window (5 minutes by
//! default). While fresh, mounting again or regaining window focus does not
//! refetch. Results that arrive after the consumer unmounted, or that belong
//! to a superseded ticket, are dropped without touching any state.

use std::sync::Arc;
use thiserror::Error;

use crate::model::DashboardSnapshot;
use crate::panels::DashboardViews;

/// How long a successful snapshot is served without refetching
pub const DEFAULT_FRESHNESS_MS: i64 = 5 * 60 * 1000;

/// Current wall-clock time in milliseconds since the epoch
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Failure to obtain any dashboard payload at all
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Dashboard request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid dashboard payload: {0}")]
    Decode(String),
}

/// Dashboard state exposed to the page
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardStatus {
    Loading,
    /// Transport or parse failure; rendered as one full-page error
    Failed(String),
    /// Payload received; individual panels may still carry errors
    Ready(Arc<DashboardSnapshot>),
}

impl DashboardStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardStatus::Loading)
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            DashboardStatus::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DashboardStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Panel views for the current state
    pub fn views(&self) -> DashboardViews {
        DashboardViews::build(self.snapshot(), self.is_loading())
    }
}

/// Identifies one issued dashboard request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone)]
struct CachedSnapshot {
    snapshot: Arc<DashboardSnapshot>,
    fetched_at_ms: i64,
}

#[derive(Debug)]
pub struct DashboardAggregator {
    freshness_ms: i64,
    status: DashboardStatus,
    cache: Option<CachedSnapshot>,
    mounted: bool,
    next_ticket: u64,
    in_flight: Option<u64>,
}

impl Default for DashboardAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_FRESHNESS_MS)
    }
}

impl DashboardAggregator {
    pub fn new(freshness_ms: i64) -> Self {
        Self {
            freshness_ms,
            status: DashboardStatus::Loading,
            cache: None,
            mounted: false,
            next_ticket: 0,
            in_flight: None,
        }
    }

    pub fn status(&self) -> &DashboardStatus {
        &self.status
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether a cached snapshot is younger than the freshness window
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        self.cache
            .as_ref()
            .map(|cached| now_ms - cached.fetched_at_ms < self.freshness_ms)
            .unwrap_or(false)
    }

    /// Dashboard page mounted. Returns a ticket when a request must be issued.
    pub fn mount(&mut self, now_ms: i64) -> Option<FetchTicket> {
        self.mounted = true;

        if let Some(cached) = &self.cache {
            // Stale data is still shown while the refetch runs
            self.status = DashboardStatus::Ready(Arc::clone(&cached.snapshot));
        } else {
            self.status = DashboardStatus::Loading;
        }

        if self.is_fresh(now_ms) {
            tracing::debug!("Dashboard snapshot is fresh, skipping fetch");
            return None;
        }

        Some(self.issue_ticket())
    }

    /// Window regained focus. Only refetches once the snapshot went stale.
    pub fn window_focus(&mut self, now_ms: i64) -> Option<FetchTicket> {
        if !self.mounted || self.in_flight.is_some() || self.is_fresh(now_ms) {
            return None;
        }
        Some(self.issue_ticket())
    }

    /// Dashboard page unmounted; any in-flight result will be discarded
    pub fn unmount(&mut self) {
        if self.in_flight.take().is_some() {
            tracing::debug!("Dashboard unmounted with a request in flight");
        }
        self.mounted = false;
        self.status = DashboardStatus::Loading;
    }

    /// Apply the result of a request. Returns `false` if it was discarded.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<DashboardSnapshot, FetchError>,
        now_ms: i64,
    ) -> bool {
        if !self.mounted || self.in_flight != Some(ticket.0) {
            tracing::debug!(ticket = ticket.0, "Discarding stale dashboard result");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(snapshot) => {
                let failed = snapshot.failed_panels();
                if !failed.is_empty() {
                    tracing::warn!(?failed, "Dashboard loaded with panel errors");
                }

                let snapshot = Arc::new(snapshot);
                self.cache = Some(CachedSnapshot {
                    snapshot: Arc::clone(&snapshot),
                    fetched_at_ms: now_ms,
                });
                self.status = DashboardStatus::Ready(snapshot);
            }
            Err(e) => {
                tracing::error!(error = %e, "Dashboard request failed");
                self.status = DashboardStatus::Failed(e.to_string());
            }
        }

        true
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        self.in_flight = Some(self.next_ticket);
        FetchTicket(self.next_ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PanelOutcome, MediaLibraryResult, NearEarthObjectFeed};

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot::new(
            PanelOutcome::Failed("API rate limit exceeded (429)".to_string()),
            PanelOutcome::Ready(MediaLibraryResult::default()),
            PanelOutcome::Ready(NearEarthObjectFeed::default()),
        )
    }

    const MINUTE: i64 = 60 * 1000;

    #[test]
    fn test_initial_mount_fetches_and_becomes_ready() {
        let mut agg = DashboardAggregator::default();
        assert!(agg.status().is_loading());

        let ticket = agg.mount(0).expect("first mount must fetch");
        assert!(agg.status().is_loading());
        assert!(agg.is_fetching());

        assert!(agg.complete(ticket, Ok(snapshot()), 10));
        assert!(!agg.is_fetching());
        let ready = agg.status().snapshot().unwrap();
        assert!(ready.media.is_ready());
    }

    #[test]
    fn test_total_failure_is_error_state() {
        let mut agg = DashboardAggregator::default();
        let ticket = agg.mount(0).unwrap();

        agg.complete(ticket, Err(FetchError::Network("connection refused".to_string())), 5);
        assert_eq!(agg.status().error(), Some("Network error: connection refused"));
        assert!(agg.status().snapshot().is_none());
    }

    #[test]
    fn test_partial_failure_is_ready_with_panel_errors() {
        let mut agg = DashboardAggregator::default();
        let ticket = agg.mount(0).unwrap();
        agg.complete(ticket, Ok(snapshot()), 1);

        let views = agg.status().views();
        assert_eq!(views.apod.kind(), "rate_limited");
        assert_eq!(views.media.kind(), "content");
        assert_eq!(views.neo.kind(), "content");
    }

    #[test]
    fn test_fresh_snapshot_is_reused_across_remount() {
        let mut agg = DashboardAggregator::default();
        let ticket = agg.mount(0).unwrap();
        agg.complete(ticket, Ok(snapshot()), 0);

        agg.unmount();
        assert!(agg.status().is_loading());

        assert!(agg.mount(4 * MINUTE).is_none());
        assert!(agg.status().snapshot().is_some());

        agg.unmount();
        assert!(agg.mount(5 * MINUTE).is_some(), "stale snapshot must refetch");
        assert!(agg.status().snapshot().is_some(), "stale data shown while refetching");
    }

    #[test]
    fn test_focus_within_window_does_not_refetch() {
        let mut agg = DashboardAggregator::default();
        let ticket = agg.mount(0).unwrap();
        agg.complete(ticket, Ok(snapshot()), 0);

        assert!(agg.window_focus(MINUTE).is_none());
        assert!(agg.window_focus(5 * MINUTE - 1).is_none());
        assert!(agg.window_focus(5 * MINUTE).is_some());
    }

    #[test]
    fn test_focus_while_fetching_or_unmounted_is_ignored() {
        let mut agg = DashboardAggregator::default();
        assert!(agg.window_focus(0).is_none());

        let _ticket = agg.mount(0).unwrap();
        assert!(agg.window_focus(0).is_none());
    }

    #[test]
    fn test_result_after_unmount_is_discarded() {
        let mut agg = DashboardAggregator::default();
        let ticket = agg.mount(0).unwrap();
        agg.unmount();

        assert!(!agg.complete(ticket, Ok(snapshot()), 1));
        assert!(agg.status().is_loading());
        assert!(!agg.is_fresh(1));

        // The stale ticket stays dead after a remount
        let fresh_ticket = agg.mount(2).unwrap();
        assert!(!agg.complete(ticket, Ok(snapshot()), 3));
        assert!(agg.complete(fresh_ticket, Ok(snapshot()), 3));
    }

    #[test]
    fn test_custom_freshness_window() {
        let mut agg = DashboardAggregator::new(1000);
        let ticket = agg.mount(0).unwrap();
        agg.complete(ticket, Ok(snapshot()), 0);

        assert!(agg.is_fresh(999));
        assert!(!agg.is_fresh(1000));
    }
}
