use std::str::FromStr;

use rentdesk_core::AppResult;
use rentdesk_domain::{AllowedActions, NavigationItem, Role, RoleGated, User};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// User record forwarded by the session layer.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-request.ts"
)]
pub struct UserRequest {
    pub id: String,
    pub email: String,
    pub name: String,
    #[ts(type = "\"ADMIN\" | \"RENTER\"")]
    pub role: String,
    pub avatar: Option<String>,
}

impl UserRequest {
    /// Converts the transport payload into a validated user.
    pub fn into_domain(self) -> AppResult<User> {
        let role = Role::from_str(self.role.as_str())?;
        User::new(self.id, self.email, self.name, role, self.avatar)
    }
}

/// Converts an optional transport user.
pub fn optional_user(user: Option<UserRequest>) -> AppResult<Option<User>> {
    user.map(UserRequest::into_domain).transpose()
}

/// Incoming payload for role checks.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-check-request.ts"
)]
pub struct RoleCheckRequest {
    pub user: Option<UserRequest>,
    pub required_roles: Vec<String>,
}

/// Incoming payload for allowed-action derivation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/allowed-actions-request.ts"
)]
pub struct AllowedActionsRequest {
    pub user: Option<UserRequest>,
    pub resource_type: String,
}

/// Incoming payload for ownership checks.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/ownership-check-request.ts"
)]
pub struct OwnershipCheckRequest {
    pub user: Option<UserRequest>,
    pub resource_owner_id: String,
}

/// Incoming payload for navigation lookups.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/navigation-request.ts"
)]
pub struct NavigationRequest {
    pub user: Option<UserRequest>,
}

/// Incoming payload for dropping a user's memoized permissions.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/refresh-access-request.ts"
)]
pub struct RefreshAccessRequest {
    pub user_id: String,
}

/// Boolean access decision.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-decision-response.ts"
)]
pub struct AccessDecisionResponse {
    pub allowed: bool,
}

/// API representation of allowed actions for one resource.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/allowed-actions-response.ts"
)]
pub struct AllowedActionsResponse {
    pub resource_type: String,
    pub view: bool,
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub export: bool,
    pub manage: bool,
}

impl AllowedActionsResponse {
    /// Builds the response for a resource tag.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, actions: AllowedActions) -> Self {
        Self {
            resource_type: resource_type.into(),
            view: actions.view,
            create: actions.create,
            edit: actions.edit,
            delete: actions.delete,
            export: actions.export,
            manage: actions.manage,
        }
    }
}

/// API representation of a navigation entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/navigation-item-response.ts"
)]
pub struct NavigationItemResponse {
    pub name: String,
    pub href: String,
    pub icon: String,
    pub roles: Vec<String>,
}

impl From<NavigationItem> for NavigationItemResponse {
    fn from(value: NavigationItem) -> Self {
        let roles = value
            .roles()
            .map(|roles| roles.iter().map(|role| role.as_str().to_owned()).collect())
            .unwrap_or_default();

        Self {
            name: value.name().to_owned(),
            href: value.href().to_owned(),
            icon: value.icon().to_owned(),
            roles,
        }
    }
}
