use std::str::FromStr;

use rentdesk_domain::{
    AllowedActions, NavigationItem, ResourceAction, ResourceType, Role, RoleGated, User,
    allowed_roles, navigation_catalog,
};

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const RENTER_ONLY: &[Role] = &[Role::Renter];
const ADMIN_AND_RENTER: &[Role] = &[Role::Admin, Role::Renter];

/// Pure role-based access decisions for dashboard screens.
///
/// Every check is total: a missing user or unknown resource resolves to deny.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates the access policy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns whether the user holds one of the required roles.
    #[must_use]
    pub fn has_role(&self, user: Option<&User>, required_roles: &[Role]) -> bool {
        user.is_some_and(|user| required_roles.contains(&user.role()))
    }

    /// Returns whether the user is an admin.
    #[must_use]
    pub fn is_admin(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Returns whether the user is a renter.
    #[must_use]
    pub fn is_renter(&self, user: Option<&User>) -> bool {
        self.has_role(user, RENTER_ONLY)
    }

    /// Checks one action against the static access table.
    #[must_use]
    pub fn can(&self, user: Option<&User>, resource: ResourceType, action: ResourceAction) -> bool {
        self.has_role(user, allowed_roles(resource, action))
    }

    /// Contracts list and detail.
    #[must_use]
    pub fn can_access_contracts(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_AND_RENTER)
    }

    /// Contract creation, edits, deletion and export.
    #[must_use]
    pub fn can_manage_contracts(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Payments list and detail.
    #[must_use]
    pub fn can_access_payments(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_AND_RENTER)
    }

    /// Payment recording, edits, deletion and export.
    #[must_use]
    pub fn can_manage_payments(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Maintenance request list and detail.
    #[must_use]
    pub fn can_access_maintenance(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_AND_RENTER)
    }

    /// Filing a maintenance request. Renters may file their own.
    #[must_use]
    pub fn can_create_maintenance(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_AND_RENTER)
    }

    /// Maintenance edits, export and administration.
    #[must_use]
    pub fn can_manage_maintenance(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Assigning a maintenance request to staff.
    #[must_use]
    pub fn can_assign_maintenance(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Marking a maintenance request complete.
    #[must_use]
    pub fn can_complete_maintenance(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Deleting a maintenance request.
    #[must_use]
    pub fn can_delete_maintenance(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Expense ledger.
    #[must_use]
    pub fn can_access_expenses(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Expense changes.
    #[must_use]
    pub fn can_manage_expenses(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Reports and analytics.
    #[must_use]
    pub fn can_access_reports(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Report generation and export.
    #[must_use]
    pub fn can_manage_reports(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Notification inbox.
    #[must_use]
    pub fn can_access_notifications(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_AND_RENTER)
    }

    /// Sending and deleting notifications.
    #[must_use]
    pub fn can_manage_notifications(&self, user: Option<&User>) -> bool {
        self.has_role(user, ADMIN_ONLY)
    }

    /// Derives the permission vector for one resource.
    #[must_use]
    pub fn get_allowed_actions(
        &self,
        user: Option<&User>,
        resource_type: ResourceType,
    ) -> AllowedActions {
        if user.is_none() {
            return AllowedActions::none();
        }

        match resource_type {
            ResourceType::Contracts => self.view_and_manage(
                self.can_access_contracts(user),
                self.can_manage_contracts(user),
            ),
            ResourceType::Payments => self.view_and_manage(
                self.can_access_payments(user),
                self.can_manage_payments(user),
            ),
            ResourceType::Maintenance => AllowedActions {
                view: self.can_access_maintenance(user),
                create: self.can_create_maintenance(user),
                edit: self.can_manage_maintenance(user),
                delete: self.can_delete_maintenance(user),
                export: self.can_manage_maintenance(user),
                manage: self.can_manage_maintenance(user),
            },
            ResourceType::Expenses => self.view_and_manage(
                self.can_access_expenses(user),
                self.can_manage_expenses(user),
            ),
            ResourceType::Reports => self.view_and_manage(
                self.can_access_reports(user),
                self.can_manage_reports(user),
            ),
            ResourceType::Notifications => self.view_and_manage(
                self.can_access_notifications(user),
                self.can_manage_notifications(user),
            ),
        }
    }

    /// Derives the permission vector from a transport tag.
    ///
    /// Unknown tags deny everything.
    #[must_use]
    pub fn get_allowed_actions_for_tag(
        &self,
        user: Option<&User>,
        resource_tag: &str,
    ) -> AllowedActions {
        ResourceType::from_str(resource_tag)
            .map(|resource_type| self.get_allowed_actions(user, resource_type))
            .unwrap_or_else(|_| AllowedActions::none())
    }

    /// Returns catalog navigation entries visible to the user, in catalog order.
    #[must_use]
    pub fn get_navigation_items(&self, user: Option<&User>) -> Vec<NavigationItem> {
        let Some(user) = user else {
            return Vec::new();
        };

        navigation_catalog()
            .iter()
            .filter(|item| {
                item.roles()
                    .is_some_and(|roles| roles.contains(&user.role()))
            })
            .cloned()
            .collect()
    }

    /// Keeps unrestricted items plus items listing the user's role.
    #[must_use]
    pub fn filter_menu_items<T>(&self, items: &[T], user: Option<&User>) -> Vec<T>
    where
        T: RoleGated + Clone,
    {
        items
            .iter()
            .filter(|item| match item.roles() {
                None => true,
                Some(roles) => user.is_some_and(|user| roles.contains(&user.role())),
            })
            .cloned()
            .collect()
    }

    /// Returns whether the user owns the resource. Admins bypass ownership.
    #[must_use]
    pub fn can_access_own_resource(&self, user: Option<&User>, resource_owner_id: &str) -> bool {
        match user {
            None => false,
            Some(_) if self.is_admin(user) => true,
            Some(user) => user.id() == resource_owner_id,
        }
    }

    fn view_and_manage(&self, view: bool, manage: bool) -> AllowedActions {
        AllowedActions {
            view,
            create: manage,
            edit: manage,
            delete: manage,
            export: manage,
            manage,
        }
    }
}
