use axum::Json;
use axum::extract::State;

use crate::dto::{NavigationItemResponse, NavigationRequest, optional_user};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn navigation_handler(
    State(state): State<AppState>,
    Json(payload): Json<NavigationRequest>,
) -> ApiResult<Json<Vec<NavigationItemResponse>>> {
    let user = optional_user(payload.user)?;
    let items = state
        .access_service
        .policy()
        .get_navigation_items(user.as_ref())
        .into_iter()
        .map(NavigationItemResponse::from)
        .collect();

    Ok(Json(items))
}
