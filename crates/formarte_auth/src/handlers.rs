//! HTTP handlers for the account pages
//!
//! Validation failures answer 400 with the Spanish form message, wrong
//! credentials 401 and a duplicate registration 409, all in the shared
//! `{"error": {"message", "code"}}` envelope.

use axum::{extract::State, response::Json};
use formarte_common::PortalError;
use std::sync::Arc;
use tracing::info;

use crate::models::{
    ForgotPasswordRequest, LoginRequest, PublicUser, RegisterRequest, ResetPasswordRequest,
    ResetStepResponse,
};
use crate::service::AuthService;

/// Shared state for the auth handlers
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<AuthService>,
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created and signed in", body = PublicUser),
        (status = 400, description = "Missing fields or non-institutional e-mail"),
        (status = 409, description = "E-mail already registered")
    ),
    tag = "Auth"
))]
pub async fn register_handler(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<PublicUser>, PortalError> {
    info!("Registration requested for {}", request.email.trim());
    let user = state.service.register(request).await?;
    Ok(Json(user))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = PublicUser),
        (status = 400, description = "Missing fields or non-institutional e-mail"),
        (status = 401, description = "Wrong e-mail or password")
    ),
    tag = "Auth"
))]
pub async fn login_handler(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<PublicUser>, PortalError> {
    let user = state.service.login(request).await?;
    Ok(Json(user))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/auth/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Moves to the reset step", body = ResetStepResponse),
        (status = 400, description = "Invalid institutional e-mail")
    ),
    tag = "Auth"
))]
pub async fn forgot_password_handler(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Json<ResetStepResponse>, PortalError> {
    let response = state.service.request_password_reset(request).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/auth/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Success, or back to the request step for an unknown account", body = ResetStepResponse),
        (status = 400, description = "Missing, mismatched or short password")
    ),
    tag = "Auth"
))]
pub async fn reset_password_handler(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<ResetStepResponse>, PortalError> {
    let response = state.service.reset_password(request).await?;
    Ok(Json(response))
}
