use std::sync::Arc;

use async_trait::async_trait;
use rentdesk_core::AppResult;
use rentdesk_domain::{AllowedActions, ResourceType, Role, User};

use crate::AccessPolicy;

/// Memoization key for one permission vector.
///
/// The role is part of the key so a role change never reads a stale vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllowedActionsKey {
    /// User identifier.
    pub user_id: String,
    /// Role the vector was computed for.
    pub role: Role,
    /// Resource the vector covers.
    pub resource_type: ResourceType,
}

impl AllowedActionsKey {
    /// Builds the key for a user and resource.
    #[must_use]
    pub fn for_user(user: &User, resource_type: ResourceType) -> Self {
        Self {
            user_id: user.id().to_owned(),
            role: user.role(),
            resource_type,
        }
    }
}

/// Cache port for computed permission vectors.
#[async_trait]
pub trait AllowedActionsCache: Send + Sync {
    /// Returns a cached vector.
    async fn get(&self, key: &AllowedActionsKey) -> AppResult<Option<AllowedActions>>;

    /// Stores a vector for `ttl_seconds`; zero skips storage.
    async fn put(
        &self,
        key: AllowedActionsKey,
        actions: AllowedActions,
        ttl_seconds: u32,
    ) -> AppResult<()>;

    /// Evicts every vector stored for a user.
    async fn invalidate_user(&self, user_id: &str) -> AppResult<()>;
}

/// Access checks with optional memoization of permission vectors.
#[derive(Clone)]
pub struct AccessService {
    policy: AccessPolicy,
    cache: Option<Arc<dyn AllowedActionsCache>>,
    cache_ttl_seconds: u32,
}

impl AccessService {
    /// Creates a service backed by a cache whose entries live `ttl_seconds`.
    #[must_use]
    pub fn new(cache: Arc<dyn AllowedActionsCache>, ttl_seconds: u32) -> Self {
        Self {
            policy: AccessPolicy::new(),
            cache: Some(cache),
            cache_ttl_seconds: ttl_seconds,
        }
    }

    /// Creates a service that recomputes every vector.
    #[must_use]
    pub fn without_cache() -> Self {
        Self {
            policy: AccessPolicy::new(),
            cache: None,
            cache_ttl_seconds: 0,
        }
    }

    /// Returns the underlying policy.
    #[must_use]
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Returns the permission vector, reusing a cached one when present.
    pub async fn allowed_actions(
        &self,
        user: Option<&User>,
        resource_type: ResourceType,
    ) -> AppResult<AllowedActions> {
        let (Some(user), Some(cache)) = (user, self.cache.as_ref()) else {
            return Ok(self.policy.get_allowed_actions(user, resource_type));
        };

        let key = AllowedActionsKey::for_user(user, resource_type);
        if let Some(actions) = cache.get(&key).await? {
            return Ok(actions);
        }

        let actions = self.policy.get_allowed_actions(Some(user), resource_type);
        cache.put(key, actions, self.cache_ttl_seconds).await?;

        Ok(actions)
    }

    /// Drops memoized vectors after login, logout or a role change.
    pub async fn refresh_user(&self, user_id: &str) -> AppResult<()> {
        match self.cache.as_ref() {
            Some(cache) => cache.invalidate_user(user_id).await,
            None => Ok(()),
        }
    }
}
