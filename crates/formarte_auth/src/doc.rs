// File: crates/formarte_auth/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{
    ForgotPasswordRequest, LoginRequest, PublicUser, RegisterRequest, ResetPasswordRequest,
    ResetStep, ResetStepResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::register_handler,
        crate::handlers::login_handler,
        crate::handlers::forgot_password_handler,
        crate::handlers::reset_password_handler
    ),
    components(
        schemas(
            PublicUser,
            LoginRequest,
            RegisterRequest,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            ResetStep,
            ResetStepResponse
        )
    ),
    tags(
        (name = "Auth", description = "Login, registration and password reset")
    ),
    servers(
        (url = "/api", description = "FormArte portal API")
    )
)]
pub struct AuthApiDoc;
