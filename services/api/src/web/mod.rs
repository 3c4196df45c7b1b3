pub mod auth;
pub mod middleware;
pub mod proxy;
pub mod rest;
pub mod state;
pub mod static_files;

use axum::{
    routing::{any, get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::web::{
    auth::login_handler,
    proxy::forward_api,
    rest::{
        get_document_handler, get_employee_handler, health_handler, list_documents_handler,
        list_employees_handler, ApiDoc,
    },
    state::{AppState, ProxyState},
};

/// Builds the gateway: REST routes, Swagger UI, then the client bundle catch-all.
pub fn gateway_router(state: AppState) -> Router {
    let frontend = state.frontend.clone();

    let api_router = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/documents", get(list_documents_handler))
        .route("/api/documents/{id}", get(get_document_handler))
        .route("/api/employees", get(list_employees_handler))
        .route("/api/employees/{id}", get(get_employee_handler))
        .route("/api/auth/login", post(login_handler))
        .with_state(Arc::new(state));

    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    middleware::apply_common_layers(frontend.attach(app))
}

/// Builds the front door: `/api/` goes to the backend, everything else is the bundle.
pub fn front_door_router(state: ProxyState, frontend: &static_files::Frontend) -> Router {
    let proxy_router = Router::new()
        .route("/api/", any(forward_api))
        .route("/api/{*rest}", any(forward_api))
        .with_state(Arc::new(state));

    middleware::apply_common_layers(frontend.attach(proxy_router))
}
