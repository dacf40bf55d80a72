use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use streakboard_core::badges::BadgeView;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BadgesQuery {
    goal_id: Option<i64>,
}

/// Badge showcase, most recent first.
async fn get_badges(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BadgesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<BadgeView>>> {
    let Query(query) = query?;
    let badges = match query.goal_id {
        Some(goal_id) => state.badge_service.list_badges_for_goal(goal_id).await?,
        None => state.badge_service.list_badges().await?,
    };
    Ok(Json(badges))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/badges", get(get_badges))
}
