use std::str::FromStr;

use rentdesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Closed set of roles driving every authorization decision.
///
/// A user holds exactly one role, so role predicates are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Property staff with full management rights.
    Admin,
    /// Tenant of a room with read access to their own data.
    Renter,
}

impl Role {
    /// Returns the stable transport value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Renter => "RENTER",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::Admin, Role::Renter];

        ALL
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "RENTER" => Ok(Self::Renter),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}
