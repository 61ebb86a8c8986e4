//! Authenticated user record consumed by access decisions.
//!
//! Users are created and refreshed by the authentication layer. Policy code only
//! ever reads them.

use rentdesk_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::Role;

/// User information supplied by the session collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: NonEmptyString,
    email: NonEmptyString,
    name: NonEmptyString,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl User {
    /// Creates a validated user record.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        avatar: Option<String>,
    ) -> AppResult<Self> {
        let avatar = avatar.and_then(|value| {
            let trimmed = value.trim().to_owned();
            (!trimmed.is_empty()).then_some(trimmed)
        });

        Ok(Self {
            id: NonEmptyString::new(id)?,
            email: NonEmptyString::new(email)?,
            name: NonEmptyString::new(name)?,
            role,
            avatar,
        })
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the single role held by the user.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the avatar URL, if one is set.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}
