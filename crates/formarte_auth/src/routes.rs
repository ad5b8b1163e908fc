// --- File: crates/formarte_auth/src/routes.rs ---

use crate::handlers::{
    forgot_password_handler, login_handler, register_handler, reset_password_handler, AuthState,
};
use crate::service::AuthService;
use axum::{routing::post, Router};
use formarte_config::AppConfig;
use formarte_storage::SharedStore;
use std::sync::Arc;

/// Creates the account router over the directory stored in `kv`.
pub async fn routes(config: Arc<AppConfig>, kv: SharedStore) -> Router {
    let service = AuthService::load(config, kv).await;
    router(Arc::new(AuthState {
        service: Arc::new(service),
    }))
}

pub fn router(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/forgot-password", post(forgot_password_handler))
        .route("/auth/reset-password", post(reset_password_handler))
        .with_state(state)
}
