use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::application::notes::{
    CreateNoteRequest, NoteListQuery, NoteResponse, UpdateNoteRequest,
};
use crate::state::AppState;

use super::problem::{ApiResult, parse_id};

pub async fn create_note(
    State(state): State<AppState>,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let created = state.notes.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<NoteListQuery>,
) -> ApiResult<Json<Vec<NoteResponse>>> {
    Ok(Json(state.notes.list(query)?))
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.notes.get(id)?))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.notes.update(id, request)?))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.notes.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
