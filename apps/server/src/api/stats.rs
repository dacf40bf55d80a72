use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use streakboard_core::{stats::StatsOverview, utils::time_utils::completion_date_today};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<StatsOverview>> {
    let overview = state
        .stats_service
        .get_overview(completion_date_today())
        .await?;
    Ok(Json(overview))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}
