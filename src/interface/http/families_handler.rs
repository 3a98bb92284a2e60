use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::application::families::{CreateFamilyRequest, FamilyResponse, UpdateFamilyRequest};
use crate::state::AppState;

use super::problem::{ApiResult, parse_id};

pub async fn create_family(
    State(state): State<AppState>,
    Json(request): Json<CreateFamilyRequest>,
) -> ApiResult<(StatusCode, Json<FamilyResponse>)> {
    let created = state.families.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_families(State(state): State<AppState>) -> ApiResult<Json<Vec<FamilyResponse>>> {
    Ok(Json(state.families.list()?))
}

pub async fn get_family(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FamilyResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.families.get(id)?))
}

pub async fn update_family(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateFamilyRequest>,
) -> ApiResult<Json<FamilyResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.families.update(id, request)?))
}

pub async fn delete_family(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.families.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
