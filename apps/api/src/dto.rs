mod access;
mod common;
mod validation;

pub use access::{
    AccessDecisionResponse, AllowedActionsRequest, AllowedActionsResponse, NavigationItemResponse,
    NavigationRequest, OwnershipCheckRequest, RefreshAccessRequest, RoleCheckRequest,
    optional_user,
};
pub use common::HealthResponse;
pub use validation::{
    ValidateFilesRequest, ValidateFormRequest, ValidationErrorResponse,
    ValidationErrorsResponse, ValidationResultResponse,
};
