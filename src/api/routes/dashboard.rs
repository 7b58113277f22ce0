//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - Composite payload for all three panels
//!
//! The three upstream calls run concurrently. Each failure is folded into the
//! response's `errors` map, so the endpoint answers 200 as long as the server
//! itself is healthy. Only fully populated snapshots are cached.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Days, NaiveDate, Utc};
use std::sync::Arc;

use crate::api::dto::DashboardParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::model::{DashboardSnapshot, PanelOutcome};

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardParams>,
) -> ApiResult<Json<DashboardSnapshot>> {
    let query_override = params.media_query().map_err(ApiError::Validation)?;
    let use_cache = !params.refresh && query_override.is_none();

    if use_cache {
        if let Some(snapshot) = state.fresh_snapshot().await {
            tracing::debug!("Serving cached dashboard snapshot");
            return Ok(Json(snapshot));
        }
    }

    let query = query_override.unwrap_or(&state.config.media_query);
    let snapshot = fetch_snapshot(&state, query, Utc::now().date_naive()).await;

    if use_cache && snapshot.is_complete() {
        state.store_snapshot(snapshot.clone()).await;
    }

    Ok(Json(snapshot))
}

/// Fan out to the three upstream endpoints and assemble the snapshot
pub async fn fetch_snapshot(state: &AppState, query: &str, today: NaiveDate) -> DashboardSnapshot {
    let (start, end) = neo_window(today, state.config.neo_days);
    let source = &state.source;

    let (apod, media, neo) = tokio::join!(
        source.featured_image(),
        source.search_media(query),
        source.neo_feed(start, end),
    );

    let snapshot = DashboardSnapshot::new(
        PanelOutcome::from(apod),
        PanelOutcome::from(media),
        PanelOutcome::from(neo),
    );

    let failed = snapshot.failed_panels();
    if failed.is_empty() {
        tracing::info!(source = source.name(), query = %query, "Dashboard snapshot assembled");
    } else {
        for panel in &failed {
            tracing::warn!(
                panel = %panel,
                error = snapshot.error(*panel).unwrap_or_default(),
                "Upstream fetch failed"
            );
        }
    }

    snapshot
}

/// Inclusive NEO date range of `days` days starting at `today`
pub fn neo_window(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let span = u64::from(days.max(1) - 1);
    let end = today.checked_add_days(Days::new(span)).unwrap_or(today);
    (today, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neo_window() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 29).unwrap();
        let (start, end) = neo_window(today, 7);
        assert_eq!(start, today);
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());

        assert_eq!(neo_window(today, 1), (today, today));
        assert_eq!(neo_window(today, 0), (today, today));
    }
}
