use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use rentdesk_core::AppError;
use rentdesk_domain::FormKind;
use serde_json::Value;
use tracing::debug;

use crate::dto::{
    ValidateFilesRequest, ValidateFormRequest, ValidationErrorResponse, ValidationErrorsResponse,
    ValidationResultResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn validate_form_handler(
    State(state): State<AppState>,
    Path(form_name): Path<String>,
    Json(payload): Json<ValidateFormRequest>,
) -> ApiResult<Json<ValidationResultResponse>> {
    let form = FormKind::from_str(form_name.as_str())?;
    let Value::Object(data) = payload.data else {
        return Err(AppError::Validation("data must be a JSON object".to_owned()).into());
    };

    let result = state.form_validator.validate_form(&data, form.rules());
    debug!(
        form = form.as_str(),
        is_valid = result.is_valid,
        error_count = result.errors.len(),
        "validated form"
    );

    Ok(Json(ValidationResultResponse::from(result)))
}

pub async fn validate_files_handler(
    State(state): State<AppState>,
    Json(payload): Json<ValidateFilesRequest>,
) -> ApiResult<Json<ValidationErrorsResponse>> {
    let (files, options) = payload.into_parts();
    let errors = state
        .form_validator
        .validate_multiple_files(&files, &options)
        .into_iter()
        .map(ValidationErrorResponse::from)
        .collect();

    Ok(Json(ValidationErrorsResponse { errors }))
}
