use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::application::agents::{AgentResponse, CreateAgentRequest, UpdateAgentRequest};
use crate::state::AppState;

use super::problem::{ApiResult, parse_id};

pub async fn create_agent(
    State(state): State<AppState>,
    Json(request): Json<CreateAgentRequest>,
) -> ApiResult<(StatusCode, Json<AgentResponse>)> {
    let created = state.agents.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_agents(State(state): State<AppState>) -> ApiResult<Json<Vec<AgentResponse>>> {
    Ok(Json(state.agents.list()?))
}

pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AgentResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.agents.get(id)?))
}

pub async fn update_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAgentRequest>,
) -> ApiResult<Json<AgentResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(state.agents.update(id, request)?))
}

pub async fn delete_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.agents.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
