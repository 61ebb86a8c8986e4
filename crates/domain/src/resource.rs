use std::str::FromStr;

use rentdesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Permission domains with their own rule rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Rental contracts.
    Contracts,
    /// Rent and deposit payments.
    Payments,
    /// Maintenance requests.
    Maintenance,
    /// Property expenses.
    Expenses,
    /// Financial and occupancy reports.
    Reports,
    /// In-app notifications.
    Notifications,
}

impl ResourceType {
    /// Returns the stable transport tag for this resource.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contracts => "contracts",
            Self::Payments => "payments",
            Self::Maintenance => "maintenance",
            Self::Expenses => "expenses",
            Self::Reports => "reports",
            Self::Notifications => "notifications",
        }
    }

    /// Returns all known resource types.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ResourceType] = &[
            ResourceType::Contracts,
            ResourceType::Payments,
            ResourceType::Maintenance,
            ResourceType::Expenses,
            ResourceType::Reports,
            ResourceType::Notifications,
        ];

        ALL
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "contracts" => Ok(Self::Contracts),
            "payments" => Ok(Self::Payments),
            "maintenance" => Ok(Self::Maintenance),
            "expenses" => Ok(Self::Expenses),
            "reports" => Ok(Self::Reports),
            "notifications" => Ok(Self::Notifications),
            _ => Err(AppError::Validation(format!(
                "unknown resource type '{value}'"
            ))),
        }
    }
}

/// Verbs checked against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceAction {
    /// List and read records.
    View,
    /// Create records.
    Create,
    /// Update records.
    Edit,
    /// Delete records.
    Delete,
    /// Export records.
    Export,
    /// Administrative management of the resource.
    Manage,
}

impl ResourceAction {
    /// Returns the stable action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Export => "export",
            Self::Manage => "manage",
        }
    }

    /// Returns all actions in allowed-actions field order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ResourceAction] = &[
            ResourceAction::View,
            ResourceAction::Create,
            ResourceAction::Edit,
            ResourceAction::Delete,
            ResourceAction::Export,
            ResourceAction::Manage,
        ];

        ALL
    }
}

/// Permission vector for one user and resource pair.
///
/// Recomputed per call; any memoization must key on user id, role and resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllowedActions {
    /// Read access.
    pub view: bool,
    /// Create access.
    pub create: bool,
    /// Update access.
    pub edit: bool,
    /// Delete access.
    pub delete: bool,
    /// Export access.
    pub export: bool,
    /// Management access.
    pub manage: bool,
}

impl AllowedActions {
    /// Returns the deny-all vector.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            view: false,
            create: false,
            edit: false,
            delete: false,
            export: false,
            manage: false,
        }
    }

    /// Returns whether the vector grants the given action.
    #[must_use]
    pub fn allows(&self, action: ResourceAction) -> bool {
        match action {
            ResourceAction::View => self.view,
            ResourceAction::Create => self.create,
            ResourceAction::Edit => self.edit,
            ResourceAction::Delete => self.delete,
            ResourceAction::Export => self.export,
            ResourceAction::Manage => self.manage,
        }
    }

    /// Returns whether every action is denied.
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }
}
