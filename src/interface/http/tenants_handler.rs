use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::application::tenants::{CreateTenantRequest, TenantResponse, UpdateTenantRequest};
use crate::state::AppState;

use super::problem::{ApiResult, parse_id};

pub async fn create_tenant(
    State(state): State<AppState>,
    Json(request): Json<CreateTenantRequest>,
) -> ApiResult<(StatusCode, Json<TenantResponse>)> {
    let created = state.tenants.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_tenants(State(state): State<AppState>) -> ApiResult<Json<Vec<TenantResponse>>> {
    Ok(Json(state.tenants.list()?))
}

pub async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TenantResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.tenants.get(id)?))
}

pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTenantRequest>,
) -> ApiResult<Json<TenantResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.tenants.update(id, request)?))
}

pub async fn delete_tenant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.tenants.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
