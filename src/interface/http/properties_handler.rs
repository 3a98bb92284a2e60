use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::application::properties::{
    CreatePropertyRequest, PropertyResponse, UpdatePropertyRequest,
};
use crate::state::AppState;

use super::problem::{ApiResult, parse_id};

pub async fn create_property(
    State(state): State<AppState>,
    Json(request): Json<CreatePropertyRequest>,
) -> ApiResult<(StatusCode, Json<PropertyResponse>)> {
    let created = state.properties.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_properties(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PropertyResponse>>> {
    Ok(Json(state.properties.list()?))
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PropertyResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.properties.get(id)?))
}

pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePropertyRequest>,
) -> ApiResult<Json<PropertyResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.properties.update(id, request)?))
}

pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.properties.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
