use rentdesk_domain::{
    DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES, FileUpload, FileUploadOptions,
    MultipleFileUploadOptions, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Incoming payload for validating a predefined form.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validate-form-request.ts"
)]
pub struct ValidateFormRequest {
    #[ts(type = "Record<string, unknown>")]
    pub data: Value,
}

/// Metadata for one selected file.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/file-upload-request.ts"
)]
pub struct FileUploadRequest {
    pub name: String,
    #[ts(type = "number")]
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<FileUploadRequest> for FileUpload {
    fn from(value: FileUploadRequest) -> Self {
        FileUpload::new(value.name, value.size, value.mime_type)
    }
}

/// Incoming payload for validating a batch of files.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validate-files-request.ts"
)]
pub struct ValidateFilesRequest {
    pub files: Vec<FileUploadRequest>,
    #[ts(type = "number | null")]
    pub max_size: Option<u64>,
    pub allowed_types: Option<Vec<String>>,
    #[ts(type = "number | null")]
    pub max_files: Option<usize>,
}

impl ValidateFilesRequest {
    /// Splits the payload into files and options, applying upload defaults.
    #[must_use]
    pub fn into_parts(self) -> (Vec<FileUpload>, MultipleFileUploadOptions) {
        let options = MultipleFileUploadOptions {
            max_files: self.max_files.unwrap_or(DEFAULT_MAX_FILES),
            file: FileUploadOptions {
                max_size: self.max_size.unwrap_or(DEFAULT_MAX_FILE_SIZE),
                allowed_types: self.allowed_types.unwrap_or_default(),
            },
        };
        let files = self.files.into_iter().map(FileUpload::from).collect();

        (files, options)
    }
}

/// API representation of one field error.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-error-response.ts"
)]
pub struct ValidationErrorResponse {
    pub field: String,
    pub message: String,
}

impl From<ValidationError> for ValidationErrorResponse {
    fn from(value: ValidationError) -> Self {
        Self {
            field: value.field,
            message: value.message,
        }
    }
}

/// API representation of a form validation outcome.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-result-response.ts"
)]
pub struct ValidationResultResponse {
    pub is_valid: bool,
    pub errors: Vec<ValidationErrorResponse>,
}

impl From<ValidationResult> for ValidationResultResponse {
    fn from(value: ValidationResult) -> Self {
        Self {
            is_valid: value.is_valid,
            errors: value
                .errors
                .into_iter()
                .map(ValidationErrorResponse::from)
                .collect(),
        }
    }
}

/// API representation of upload errors.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validation-errors-response.ts"
)]
pub struct ValidationErrorsResponse {
    pub errors: Vec<ValidationErrorResponse>,
}
