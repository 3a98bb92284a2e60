use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::interface::http::{
    agents_handler::{create_agent, delete_agent, get_agent, list_agents, update_agent},
    families_handler::{create_family, delete_family, get_family, list_families, update_family},
    healthcheck,
    notes_handler::{create_note, delete_note, get_note, list_notes, update_note},
    properties_handler::{
        create_property, delete_property, get_property, list_properties, update_property,
    },
    reminders_handler::{
        create_reminder, delete_reminder, get_reminder, list_reminders, update_reminder,
    },
    tenants_handler::{create_tenant, delete_tenant, get_tenant, list_tenants, update_tenant},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/agents", post(create_agent).get(list_agents))
        .route(
            "/agents/{id}",
            get(get_agent).put(update_agent).delete(delete_agent),
        )
        .route("/properties", post(create_property).get(list_properties))
        .route(
            "/properties/{id}",
            get(get_property).put(update_property).delete(delete_property),
        )
        .route("/families", post(create_family).get(list_families))
        .route(
            "/families/{id}",
            get(get_family).put(update_family).delete(delete_family),
        )
        .route("/tenants", post(create_tenant).get(list_tenants))
        .route(
            "/tenants/{id}",
            get(get_tenant).put(update_tenant).delete(delete_tenant),
        )
        .route("/notes", post(create_note).get(list_notes))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/reminders", post(create_reminder).get(list_reminders))
        .route(
            "/reminders/{id}",
            get(get_reminder).put(update_reminder).delete(delete_reminder),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
