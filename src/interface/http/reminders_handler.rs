use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::application::reminders::{
    CreateReminderRequest, ReminderListQuery, ReminderResponse, UpdateReminderRequest,
};
use crate::state::AppState;

use super::problem::{ApiResult, parse_id};

pub async fn create_reminder(
    State(state): State<AppState>,
    Json(request): Json<CreateReminderRequest>,
) -> ApiResult<(StatusCode, Json<ReminderResponse>)> {
    let created = state.reminders.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_reminders(
    State(state): State<AppState>,
    Query(query): Query<ReminderListQuery>,
) -> ApiResult<Json<Vec<ReminderResponse>>> {
    Ok(Json(state.reminders.list(query)?))
}

pub async fn get_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReminderResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.reminders.get(id)?))
}

pub async fn update_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateReminderRequest>,
) -> ApiResult<Json<ReminderResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.reminders.update(id, request)?))
}

pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.reminders.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
