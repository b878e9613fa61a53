use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Deserialize;

use crate::dashboard::DashboardSnapshot;
use crate::error::AppError;
use crate::state::AppState;

const MAX_SEARCH_LEN: usize = 64;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/dashboard", get(get_dashboard))
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub q: Option<String>,
}

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let search = query.q.as_deref().map(str::trim).filter(|term| !term.is_empty());

    if search.is_some_and(|term| term.chars().count() > MAX_SEARCH_LEN) {
        state
            .metrics
            .dashboard_requests_total
            .with_label_values(&["rejected"])
            .inc();
        return Err(AppError::BadRequest(format!(
            "search term must be at most {MAX_SEARCH_LEN} characters"
        )));
    }

    let filtered = if search.is_some() { "true" } else { "false" };
    let started = Instant::now();
    let snapshot =
        DashboardSnapshot::build(&state.data, &state.settings, state.clock.as_ref(), search);
    let elapsed = started.elapsed().as_secs_f64();

    state
        .metrics
        .dashboard_build_seconds
        .with_label_values(&[filtered])
        .observe(elapsed);
    state
        .metrics
        .dashboard_requests_total
        .with_label_values(&["ok"])
        .inc();

    tracing::debug!(
        search = search.unwrap_or_default(),
        trips = snapshot.trips.len(),
        elapsed_ms = elapsed * 1000.0,
        "dashboard snapshot built"
    );

    Ok(Json(snapshot))
}
