use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use rentdesk_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let access_routes = Router::new()
        .route(
            "/api/access/roles/check",
            post(handlers::access::check_role_handler),
        )
        .route(
            "/api/access/actions",
            post(handlers::access::allowed_actions_handler),
        )
        .route(
            "/api/access/refresh",
            post(handlers::access::refresh_access_handler),
        )
        .route(
            "/api/access/ownership",
            post(handlers::access::ownership_check_handler),
        )
        .route(
            "/api/navigation",
            post(handlers::navigation::navigation_handler),
        );

    let validation_routes = Router::new()
        .route(
            "/api/validation/forms/{form_name}",
            post(handlers::validation::validate_form_handler),
        )
        .route(
            "/api/validation/files",
            post(handlers::validation::validate_files_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(access_routes)
        .merge(validation_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
