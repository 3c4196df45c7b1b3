//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the read-only REST endpoints and the master
//! definition for the OpenAPI specification.

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{SecondsFormat, Utc};
use hr_portal_core::domain::{
    AuthUser, Document, DocumentStatus, DocumentType, Employee, EmployeeStatus,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::{ApiError, ErrorBody};
use crate::web::auth::{LoginRequest, LoginResponse};
use crate::web::state::AppState;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        list_documents_handler,
        get_document_handler,
        list_employees_handler,
        get_employee_handler,
        crate::web::auth::login_handler,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            Document,
            DocumentType,
            DocumentStatus,
            Employee,
            EmployeeStatus,
            AuthUser,
            LoginRequest,
            LoginResponse
        )
    ),
    tags(
        (name = "HR Portal API", description = "Documents, employees and mock sign-in for the HR portal.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 time the response was produced.
    pub timestamp: String,
    /// Directory the client bundle is served from, when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_path: Option<String>,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        static_path: state.frontend.root().map(|p| p.display().to_string()),
    })
}

#[utoipa::path(
    get,
    path = "/api/documents",
    responses((status = 200, description = "All documents", body = [Document]))
)]
pub async fn list_documents_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.directory.list_documents().await?))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    params(("id" = String, Path, description = "Document id")),
    responses(
        (status = 200, description = "The document", body = Document),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn get_document_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(state.directory.get_document(&id).await?))
}

#[utoipa::path(
    get,
    path = "/api/employees",
    responses((status = 200, description = "All employees", body = [Employee]))
)]
pub async fn list_employees_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.directory.list_employees().await?))
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn get_employee_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.directory.get_employee(&id).await?))
}
