//! Rentdesk API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use rentdesk_application::{AccessService, FormValidator};
use rentdesk_core::AppError;
use rentdesk_infrastructure::InMemoryAllowedActionsCache;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let access_service = if config.access_cache_enabled {
        AccessService::new(
            Arc::new(InMemoryAllowedActionsCache::new()),
            config.access_cache_ttl_seconds,
        )
    } else {
        info!("allowed-actions cache disabled");
        AccessService::without_cache()
    };

    let app_state = AppState {
        access_service,
        form_validator: FormValidator::new(),
    };

    let app = api_router::build_router(app_state, config.frontend_url.as_str())?;
    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "rentdesk-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
