// --- File: crates/services/formarte_backend/src/app.rs ---
//! Router assembly shared by the binary and the integration tests.

use axum::{extract::State, routing::get, Json, Router};
use formarte_common::is_auth_enabled;
use formarte_config::AppConfig;
use formarte_storage::SharedStore;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Serialize)]
struct ApiInfo {
    name: &'static str,
    version: &'static str,
    auth: bool,
}

#[axum::debug_handler]
async fn api_info(State(config): State<Arc<AppConfig>>) -> Json<ApiInfo> {
    Json(ApiInfo {
        name: "FormArte API",
        version: env!("CARGO_PKG_VERSION"),
        auth: config.use_auth,
    })
}

/// Builds the full application: every API under `/api`, plus Swagger UI at
/// `/api/docs` when the `openapi` feature is on.
pub async fn build_app(config: Arc<AppConfig>, kv: SharedStore) -> Router {
    let api_router = Router::new()
        .route("/", get(api_info))
        .with_state(config.clone());

    let booking_router = formarte_booking::routes(config.clone(), kv.clone()).await;

    let api_router = Router::new().nest("/api", {
        let mut router = api_router.merge(booking_router);
        if is_auth_enabled(&config) {
            info!("Account routes enabled");
            router = router.merge(formarte_auth::routes(config.clone(), kv).await);
        }
        router
    });

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = api_router;

    #[cfg(feature = "openapi")]
    {
        use formarte_auth::doc::AuthApiDoc;
        use formarte_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "FormArte API",
                version = "0.1.0",
                description = "Student wellness and academic support booking portal"
            ),
            components(),
            tags( (name = "FormArte", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        if is_auth_enabled(&config) {
            openapi_doc.merge(AuthApiDoc::openapi());
        }
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(TraceLayer::new_for_http())
}
