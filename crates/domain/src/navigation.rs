use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::Role;

/// Anything rendered behind an optional role restriction.
pub trait RoleGated {
    /// Returns the roles allowed to see the item, or `None` when unrestricted.
    fn roles(&self) -> Option<&[Role]>;
}

/// Catalog section a navigation entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationSection {
    /// Shared by admins and renters.
    Base,
    /// Admin-only pages.
    Admin,
    /// Renter-only pages.
    Renter,
}

/// Sidebar entry shown to users whose role is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    name: String,
    href: String,
    icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roles: Option<Vec<Role>>,
}

impl NavigationItem {
    /// Creates a navigation item. `None` roles make the item visible to everyone.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        href: impl Into<String>,
        icon: impl Into<String>,
        roles: Option<Vec<Role>>,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon: icon.into(),
            roles,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the route path.
    #[must_use]
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    /// Returns the icon key.
    #[must_use]
    pub fn icon(&self) -> &str {
        self.icon.as_str()
    }
}

impl RoleGated for NavigationItem {
    fn roles(&self) -> Option<&[Role]> {
        self.roles.as_deref()
    }
}

struct CatalogEntry {
    section: NavigationSection,
    name: &'static str,
    href: &'static str,
    icon: &'static str,
}

const ADMIN_AND_RENTER: &[Role] = &[Role::Admin, Role::Renter];

const CATALOG: &[CatalogEntry] = &[
    entry(NavigationSection::Base, "Dashboard", "/dashboard", "home"),
    entry(NavigationSection::Base, "Contracts", "/contracts", "file-text"),
    entry(NavigationSection::Base, "Payments", "/payments", "credit-card"),
    entry(NavigationSection::Base, "Maintenance", "/maintenance", "wrench"),
    entry(NavigationSection::Base, "Notifications", "/notifications", "bell"),
    entry(NavigationSection::Base, "Messages", "/messages", "message-square"),
    entry(NavigationSection::Admin, "Properties", "/properties", "building"),
    entry(NavigationSection::Admin, "Rooms", "/rooms", "door-open"),
    entry(NavigationSection::Admin, "Renters", "/renters", "users"),
    entry(NavigationSection::Admin, "Expenses", "/expenses", "receipt"),
    entry(NavigationSection::Admin, "Reports", "/reports", "bar-chart"),
    entry(NavigationSection::Admin, "Analytics", "/analytics", "trending-up"),
    entry(NavigationSection::Renter, "My Room", "/my-room", "key"),
    entry(NavigationSection::Renter, "Profile", "/profile", "user"),
];

const fn entry(
    section: NavigationSection,
    name: &'static str,
    href: &'static str,
    icon: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        section,
        name,
        href,
        icon,
    }
}

fn section_roles(section: NavigationSection) -> &'static [Role] {
    match section {
        NavigationSection::Base => ADMIN_AND_RENTER,
        NavigationSection::Admin => &[Role::Admin],
        NavigationSection::Renter => &[Role::Renter],
    }
}

static NAVIGATION_CATALOG: LazyLock<Vec<NavigationItem>> = LazyLock::new(|| {
    [
        NavigationSection::Base,
        NavigationSection::Admin,
        NavigationSection::Renter,
    ]
    .into_iter()
    .flat_map(|section| {
        CATALOG
            .iter()
            .filter(move |entry| entry.section == section)
            .map(|entry| {
                NavigationItem::new(
                    entry.name,
                    entry.href,
                    entry.icon,
                    Some(section_roles(entry.section).to_vec()),
                )
            })
    })
    .collect()
});

/// Returns the full navigation catalog: base, then admin, then renter entries.
#[must_use]
pub fn navigation_catalog() -> &'static [NavigationItem] {
    NAVIGATION_CATALOG.as_slice()
}

#[cfg(test)]
mod tests {
    use super::{RoleGated, navigation_catalog};
    use crate::Role;

    #[test]
    fn catalog_lists_base_entries_first() {
        let names: Vec<_> = navigation_catalog()
            .iter()
            .take(2)
            .map(|item| item.name())
            .collect();
        assert_eq!(names, vec!["Dashboard", "Contracts"]);
    }

    #[test]
    fn every_catalog_entry_is_role_gated() {
        assert!(
            navigation_catalog()
                .iter()
                .all(|item| item.roles().is_some_and(|roles| !roles.is_empty()))
        );
    }

    #[test]
    fn properties_is_admin_only() {
        let properties = navigation_catalog()
            .iter()
            .find(|item| item.href() == "/properties");
        assert!(matches!(
            properties.and_then(RoleGated::roles),
            Some(roles) if roles == [Role::Admin]
        ));
    }
}
