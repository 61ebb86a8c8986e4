//! Closed role table for every resource and action pair.
//!
//! Screens depend on these role sets being exact. Maintenance is the single
//! asymmetric row: renters may file requests but nothing else beyond viewing.

use serde::Serialize;

use crate::{ResourceAction, ResourceType, Role};

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ADMIN_AND_RENTER: &[Role] = &[Role::Admin, Role::Renter];

/// One row of the access table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessRule {
    /// Permission domain.
    pub resource: ResourceType,
    /// Verb within the domain.
    pub action: ResourceAction,
    /// Roles granted the verb.
    pub roles: &'static [Role],
}

const fn rule(
    resource: ResourceType,
    action: ResourceAction,
    roles: &'static [Role],
) -> AccessRule {
    AccessRule {
        resource,
        action,
        roles,
    }
}

/// Static access table, one row per resource and action.
pub const ACCESS_RULES: &[AccessRule] = &[
    rule(ResourceType::Contracts, ResourceAction::View, ADMIN_AND_RENTER),
    rule(ResourceType::Contracts, ResourceAction::Create, ADMIN_ONLY),
    rule(ResourceType::Contracts, ResourceAction::Edit, ADMIN_ONLY),
    rule(ResourceType::Contracts, ResourceAction::Delete, ADMIN_ONLY),
    rule(ResourceType::Contracts, ResourceAction::Export, ADMIN_ONLY),
    rule(ResourceType::Contracts, ResourceAction::Manage, ADMIN_ONLY),
    rule(ResourceType::Payments, ResourceAction::View, ADMIN_AND_RENTER),
    rule(ResourceType::Payments, ResourceAction::Create, ADMIN_ONLY),
    rule(ResourceType::Payments, ResourceAction::Edit, ADMIN_ONLY),
    rule(ResourceType::Payments, ResourceAction::Delete, ADMIN_ONLY),
    rule(ResourceType::Payments, ResourceAction::Export, ADMIN_ONLY),
    rule(ResourceType::Payments, ResourceAction::Manage, ADMIN_ONLY),
    rule(ResourceType::Maintenance, ResourceAction::View, ADMIN_AND_RENTER),
    rule(ResourceType::Maintenance, ResourceAction::Create, ADMIN_AND_RENTER),
    rule(ResourceType::Maintenance, ResourceAction::Edit, ADMIN_ONLY),
    rule(ResourceType::Maintenance, ResourceAction::Delete, ADMIN_ONLY),
    rule(ResourceType::Maintenance, ResourceAction::Export, ADMIN_ONLY),
    rule(ResourceType::Maintenance, ResourceAction::Manage, ADMIN_ONLY),
    rule(ResourceType::Expenses, ResourceAction::View, ADMIN_ONLY),
    rule(ResourceType::Expenses, ResourceAction::Create, ADMIN_ONLY),
    rule(ResourceType::Expenses, ResourceAction::Edit, ADMIN_ONLY),
    rule(ResourceType::Expenses, ResourceAction::Delete, ADMIN_ONLY),
    rule(ResourceType::Expenses, ResourceAction::Export, ADMIN_ONLY),
    rule(ResourceType::Expenses, ResourceAction::Manage, ADMIN_ONLY),
    rule(ResourceType::Reports, ResourceAction::View, ADMIN_ONLY),
    rule(ResourceType::Reports, ResourceAction::Create, ADMIN_ONLY),
    rule(ResourceType::Reports, ResourceAction::Edit, ADMIN_ONLY),
    rule(ResourceType::Reports, ResourceAction::Delete, ADMIN_ONLY),
    rule(ResourceType::Reports, ResourceAction::Export, ADMIN_ONLY),
    rule(ResourceType::Reports, ResourceAction::Manage, ADMIN_ONLY),
    rule(ResourceType::Notifications, ResourceAction::View, ADMIN_AND_RENTER),
    rule(ResourceType::Notifications, ResourceAction::Create, ADMIN_ONLY),
    rule(ResourceType::Notifications, ResourceAction::Edit, ADMIN_ONLY),
    rule(ResourceType::Notifications, ResourceAction::Delete, ADMIN_ONLY),
    rule(ResourceType::Notifications, ResourceAction::Export, ADMIN_ONLY),
    rule(ResourceType::Notifications, ResourceAction::Manage, ADMIN_ONLY),
];

/// Returns the roles granted an action on a resource.
///
/// A pair missing from the table resolves to no roles.
#[must_use]
pub fn allowed_roles(resource: ResourceType, action: ResourceAction) -> &'static [Role] {
    ACCESS_RULES
        .iter()
        .find(|entry| entry.resource == resource && entry.action == action)
        .map(|entry| entry.roles)
        .unwrap_or(&[])
}
