//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service and how it is
//! rendered as an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use hr_portal_core::ports::PortError;
use serde::Serialize;
use std::path::PathBuf;
use tracing::error;
use utoipa::ToSchema;

use crate::config::ConfigError;

/// Body of every unexpected server failure.
pub const GENERIC_ERROR: &str = "Something went wrong!";

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// The front door could not reach the gateway.
    #[error("Backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    /// A request or response body could not be read.
    #[error("Body error: {0}")]
    Body(#[from] axum::Error),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No route matched and there is no bundle to fall back to.
    #[error("Route not found")]
    RouteNotFound,

    /// No candidate directory holds a built client bundle.
    #[error("Frontend not built; searched {searched:?}")]
    FrontendMissing { searched: Vec<PathBuf> },

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// JSON error payload: `{"error": "..."}` plus optional diagnostics.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searched: Option<Vec<String>>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            searched: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Port(PortError::NotFound(entity)) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(PortError::NotFound(entity).to_string()),
            ),
            ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(ApiError::RouteNotFound.to_string()),
            ),
            ApiError::Backend(e) => {
                error!("Backend request failed: {}", e);
                (StatusCode::BAD_GATEWAY, ErrorBody::new("Backend unavailable"))
            }
            ApiError::FrontendMissing { searched } => {
                error!("Frontend not built; searched {:?}", searched);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Frontend not built".to_string(),
                        message: Some("Static files not found".to_string()),
                        searched: Some(
                            searched.iter().map(|p| p.display().to_string()).collect(),
                        ),
                    },
                )
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(GENERIC_ERROR))
            }
        };
        (status, Json(body)).into_response()
    }
}
