//! Global Application State
//!
//! Reactive wrapper around the dashboard aggregator. The aggregator decides
//! when a request is needed and which results still apply; this module runs
//! the requests and mirrors the aggregator's status into signals.

use leptos::*;
use skywatch::aggregator::now_ms;
use skywatch::{DashboardAggregator, DashboardStatus, FetchTicket, Panel, RevealController};

use crate::api;

/// Global dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    aggregator: StoredValue<DashboardAggregator>,
    /// Current dashboard status
    pub status: RwSignal<DashboardStatus>,
    /// Whether a request is in flight
    pub fetching: RwSignal<bool>,
    /// When the last applied result arrived
    pub last_updated: RwSignal<Option<i64>>,
    /// Entrance reveal per panel
    pub reveal: RwSignal<RevealController<Panel>>,
}

/// Provide global state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        aggregator: store_value(DashboardAggregator::default()),
        status: create_rw_signal(DashboardStatus::Loading),
        fetching: create_rw_signal(false),
        last_updated: create_rw_signal(None),
        reveal: create_rw_signal(RevealController::new()),
    };

    provide_context(state);
}

pub fn use_dashboard_state() -> DashboardState {
    expect_context::<DashboardState>()
}

impl DashboardState {
    /// Dashboard page mounted
    pub fn mount(self) {
        let ticket = self
            .aggregator
            .try_update_value(|agg| agg.mount(now_ms()))
            .flatten();
        self.sync();
        if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    /// Browser window regained focus
    pub fn window_focus(self) {
        let ticket = self
            .aggregator
            .try_update_value(|agg| agg.window_focus(now_ms()))
            .flatten();
        if let Some(ticket) = ticket {
            self.sync();
            self.fetch(ticket);
        }
    }

    /// Dashboard page unmounted; pending results will be discarded
    pub fn unmount(self) {
        self.aggregator.update_value(|agg| agg.unmount());
        self.sync();
    }

    /// Record a viewport observation for a panel
    pub fn observe_reveal(self, panel: Panel, intersecting: bool) -> bool {
        if !intersecting || self.reveal.with_untracked(|r| r.is_revealed(&panel)) {
            return false;
        }
        self.reveal
            .try_update(|r| r.observe(&panel, intersecting))
            .unwrap_or(false)
    }

    fn fetch(self, ticket: FetchTicket) {
        spawn_local(async move {
            let result = api::fetch_dashboard().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Dashboard request failed: {}", e).into());
            }

            let applied = self
                .aggregator
                .try_update_value(|agg| agg.complete(ticket, result, now_ms()))
                .unwrap_or(false);

            if applied {
                self.last_updated.set(Some(now_ms()));
            } else {
                web_sys::console::debug_1(&"Discarded stale dashboard response".into());
            }
            self.sync();
        });
    }

    /// Copy the aggregator's status into the signals
    fn sync(self) {
        let (status, fetching) = self
            .aggregator
            .with_value(|agg| (agg.status().clone(), agg.is_fetching()));

        if self.status.with_untracked(|current| current != &status) {
            self.status.set(status);
        }
        self.fetching.set(fetching);
    }
}
