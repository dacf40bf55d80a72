use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use streakboard_core::{
    goals::{Goal, GoalUpdate, NewGoal},
    stats::CompletionCalendar,
    streaks::{Eligibility, ToggleOutcome},
    utils::time_utils::completion_date_today,
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize)]
struct GoalsQuery {
    archived: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct CalendarQuery {
    year: Option<i32>,
    month: Option<u32>,
}

async fn get_goals(
    State(state): State<Arc<AppState>>,
    query: Result<Query<GoalsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Goal>>> {
    let Query(query) = query?;
    let goals = match query.archived {
        Some(archived) => state.goal_service.list_goals(archived).await?,
        None => state.goal_service.get_goals().await?,
    };
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewGoal>, JsonRejection>,
) -> ApiResult<Json<Goal>> {
    let Json(new_goal) = payload?;
    let goal = state.goal_service.create_goal(new_goal).await?;
    Ok(Json(goal))
}

async fn get_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    Ok(Json(state.goal_service.get_goal(id).await?))
}

async fn update_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GoalUpdate>, JsonRejection>,
) -> ApiResult<Json<Goal>> {
    let Json(goal_update) = payload?;
    let goal = state.goal_service.update_goal(id, goal_update).await?;
    Ok(Json(goal))
}

async fn delete_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.goal_service.delete_goal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle_archive(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    Ok(Json(state.goal_service.toggle_archive(id).await?))
}

/// Toggles today's completion from the goal list, with archive and
/// weekly cooldown checks.
async fn toggle_today(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ToggleOutcome>> {
    Ok(Json(state.streak_service.toggle_today(id).await?))
}

async fn toggle_on_date(
    Path((id, date)): Path<(i64, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ToggleOutcome>> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(streakboard_core::Error::from)?;
    let outcome = state.streak_service.toggle_completion(id, Some(date)).await?;
    Ok(Json(outcome))
}

async fn get_eligibility(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Eligibility>> {
    Ok(Json(state.streak_service.get_eligibility(id).await?))
}

async fn get_calendar(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> ApiResult<Json<CompletionCalendar>> {
    let Query(query) = query?;
    let today = completion_date_today();
    let calendar = state
        .stats_service
        .get_calendar(
            id,
            query.year.unwrap_or_else(|| today.year()),
            query.month.unwrap_or_else(|| today.month()),
        )
        .await?;
    Ok(Json(calendar))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/goals/{id}/archive", post(toggle_archive))
        .route("/goals/{id}/toggle", post(toggle_today))
        .route(
            "/goals/{id}/completions/{date}/toggle",
            post(toggle_on_date),
        )
        .route("/goals/{id}/eligibility", get(get_eligibility))
        .route("/goals/{id}/calendar", get(get_calendar))
}
