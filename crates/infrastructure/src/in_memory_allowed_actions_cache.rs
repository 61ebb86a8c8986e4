use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rentdesk_application::{AllowedActionsCache, AllowedActionsKey};
use rentdesk_core::AppResult;
use rentdesk_domain::AllowedActions;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct AllowedActionsCacheEntry {
    actions: AllowedActions,
    expires_at: Instant,
}

/// In-memory cache adapter for permission vectors.
#[derive(Default)]
pub struct InMemoryAllowedActionsCache {
    entries: RwLock<HashMap<AllowedActionsKey, AllowedActionsCacheEntry>>,
}

impl InMemoryAllowedActionsCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored vectors, expired ones included until swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns whether the cache holds no vectors.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn insert_until(
        &self,
        key: AllowedActionsKey,
        actions: AllowedActions,
        expires_at: Instant,
    ) {
        let mut entries = self.entries.write().await;
        let now = Instant::now();

        // Expired vectors are never read again; a user holds one role, so
        // vectors under any other role are stale.
        let before = entries.len();
        entries.retain(|existing, entry| {
            entry.expires_at > now
                && (existing.user_id != key.user_id || existing.role == key.role)
        });
        let evicted = before - entries.len();
        if evicted > 0 {
            debug!(
                user_id = %key.user_id,
                role = %key.role,
                evicted,
                "evicted expired or stale allowed actions"
            );
        }

        entries.insert(
            key,
            AllowedActionsCacheEntry {
                actions,
                expires_at,
            },
        );
    }
}

#[async_trait]
impl AllowedActionsCache for InMemoryAllowedActionsCache {
    async fn get(&self, key: &AllowedActionsKey) -> AppResult<Option<AllowedActions>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.actions));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(key)
            .is_some_and(|entry| entry.expires_at <= Instant::now())
        {
            entries.remove(key);
        }

        Ok(None)
    }

    async fn put(
        &self,
        key: AllowedActionsKey,
        actions: AllowedActions,
        ttl_seconds: u32,
    ) -> AppResult<()> {
        if ttl_seconds == 0 {
            return Ok(());
        }

        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(u64::from(ttl_seconds)))
            .unwrap_or(now);

        self.insert_until(key, actions, expires_at).await;
        Ok(())
    }

    async fn invalidate_user(&self, user_id: &str) -> AppResult<()> {
        self.entries
            .write()
            .await
            .retain(|key, _| key.user_id != user_id);
        debug!(user_id, "invalidated cached allowed actions");
        Ok(())
    }
}
