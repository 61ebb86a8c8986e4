use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rentdesk_core::{AppError, AppResult};
use rentdesk_domain::{AllowedActions, ResourceType, Role};
use tracing::{debug, info, warn};

use crate::dto::{
    AccessDecisionResponse, AllowedActionsRequest, AllowedActionsResponse, OwnershipCheckRequest,
    RefreshAccessRequest, RoleCheckRequest, optional_user,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn check_role_handler(
    State(state): State<AppState>,
    Json(payload): Json<RoleCheckRequest>,
) -> ApiResult<Json<AccessDecisionResponse>> {
    let user = optional_user(payload.user)?;
    let required_roles = payload
        .required_roles
        .iter()
        .map(|role| Role::from_str(role))
        .collect::<AppResult<Vec<_>>>()?;

    if required_roles.is_empty() {
        return Err(AppError::Validation("required_roles must not be empty".to_owned()).into());
    }

    let allowed = state
        .access_service
        .policy()
        .has_role(user.as_ref(), &required_roles);

    Ok(Json(AccessDecisionResponse { allowed }))
}

pub async fn allowed_actions_handler(
    State(state): State<AppState>,
    Json(payload): Json<AllowedActionsRequest>,
) -> ApiResult<Json<AllowedActionsResponse>> {
    let user = optional_user(payload.user)?;

    let actions = match ResourceType::from_str(payload.resource_type.as_str()) {
        Ok(resource_type) => {
            state
                .access_service
                .allowed_actions(user.as_ref(), resource_type)
                .await?
        }
        Err(error) => {
            warn!(
                resource_type = %payload.resource_type,
                %error,
                "denying all actions for unknown resource type"
            );
            AllowedActions::none()
        }
    };

    debug!(
        user_id = user.as_ref().map(|user| user.id()),
        resource_type = %payload.resource_type,
        ?actions,
        "resolved allowed actions"
    );

    Ok(Json(AllowedActionsResponse::new(
        payload.resource_type,
        actions,
    )))
}

pub async fn ownership_check_handler(
    State(state): State<AppState>,
    Json(payload): Json<OwnershipCheckRequest>,
) -> ApiResult<Json<AccessDecisionResponse>> {
    let user = optional_user(payload.user)?;
    let allowed = state
        .access_service
        .policy()
        .can_access_own_resource(user.as_ref(), payload.resource_owner_id.as_str());

    Ok(Json(AccessDecisionResponse { allowed }))
}

pub async fn refresh_access_handler(
    State(state): State<AppState>,
    Json(payload): Json<RefreshAccessRequest>,
) -> ApiResult<StatusCode> {
    if payload.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id must not be empty".to_owned()).into());
    }

    state
        .access_service
        .refresh_user(payload.user_id.as_str())
        .await?;
    info!(user_id = %payload.user_id, "refreshed allowed actions");

    Ok(StatusCode::NO_CONTENT)
}
