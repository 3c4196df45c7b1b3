//! services/api/src/web/auth.rs
//!
//! The mock sign-in endpoint. Any email/password pair is accepted.

use axum::Json;
use bytes::Bytes;
use hr_portal_core::domain::AuthUser;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

/// Token handed out to every caller.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /api/auth/login - Returns a fixed token and an admin user carrying the submitted email
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse)
    )
)]
pub async fn login_handler(body: Bytes) -> Json<LoginResponse> {
    // Any body is accepted; whatever does not parse signs in with an empty email.
    let req: LoginRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!("Unparsed login body: {}", e);
        LoginRequest::default()
    });
    info!(email = %req.email, "Mock login");
    Json(LoginResponse {
        token: MOCK_TOKEN.to_string(),
        user: AuthUser {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: req.email,
            role: "HR Manager".to_string(),
        },
    })
}
