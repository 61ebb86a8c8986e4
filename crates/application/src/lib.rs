//! Application services and ports.

#![forbid(unsafe_code)]

mod access_policy;
mod access_service;
mod form_validator;

pub use access_policy::AccessPolicy;
pub use access_service::{AccessService, AllowedActionsCache, AllowedActionsKey};
pub use form_validator::FormValidator;
