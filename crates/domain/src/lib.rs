//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access_rule;
pub mod field_value;
mod file_upload;
mod form_rules;
mod navigation;
mod resource;
mod role;
mod user;
mod validation;

pub use access_rule::{ACCESS_RULES, AccessRule, allowed_roles};
pub use file_upload::{
    DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES, FileUpload, FileUploadOptions,
    MultipleFileUploadOptions,
};
pub use form_rules::{
    FormKind, MAINTENANCE_PRIORITIES, contract_validation_rules, expense_validation_rules,
    login_validation_rules, maintenance_validation_rules, payment_validation_rules,
    registration_validation_rules,
};
pub use navigation::{NavigationItem, NavigationSection, RoleGated, navigation_catalog};
pub use resource::{AllowedActions, ResourceAction, ResourceType};
pub use role::Role;
pub use user::User;
pub use validation::{
    CustomRule, FormData, FormRules, ValidationError, ValidationResult, ValidationRule,
};
