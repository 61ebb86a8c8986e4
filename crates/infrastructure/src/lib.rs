//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_allowed_actions_cache;

pub use in_memory_allowed_actions_cache::InMemoryAllowedActionsCache;
