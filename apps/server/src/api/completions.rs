use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use streakboard_core::completions::Completion;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompletionsQuery {
    goal_id: Option<i64>,
}

async fn get_completions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CompletionsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Completion>>> {
    let Query(query) = query?;
    let completions = match query.goal_id {
        Some(goal_id) => state.completion_repository.get_by_goal_id(goal_id).await?,
        None => state.completion_repository.get_all().await?,
    };
    Ok(Json(completions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/completions", get(get_completions))
}
