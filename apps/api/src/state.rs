use rentdesk_application::{AccessService, FormValidator};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_service: AccessService,
    pub form_validator: FormValidator,
}
