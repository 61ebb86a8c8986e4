use std::sync::Arc;

use rentdesk_application::{AccessService, FormValidator};
use rentdesk_infrastructure::InMemoryAllowedActionsCache;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::state::AppState;

pub fn test_state() -> AppState {
    AppState {
        access_service: AccessService::new(Arc::new(InMemoryAllowedActionsCache::new()), 60),
        form_validator: FormValidator::new(),
    }
}

pub fn payload<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_else(|error| panic!("invalid test payload: {error}"))
}

pub fn admin_json() -> Value {
    serde_json::json!({
        "id": "admin-1",
        "email": "admin@rentdesk.test",
        "name": "Ada",
        "role": "ADMIN"
    })
}

pub fn renter_json() -> Value {
    serde_json::json!({
        "id": "renter-1",
        "email": "renter@rentdesk.test",
        "name": "Rene",
        "role": "RENTER"
    })
}
