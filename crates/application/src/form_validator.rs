use rentdesk_domain::field_value::is_blank;
use rentdesk_domain::{
    FileUpload, FileUploadOptions, FormData, FormRules, MultipleFileUploadOptions,
    ValidationError, ValidationResult, ValidationRule,
};
use serde_json::Value;

mod checks;

use checks::{FIELD_CHECKS, FieldInput};

/// Declarative field, form and upload validation.
///
/// Field rules run in a fixed order (required, length, range, pattern, email,
/// phone, url, date, custom) and stop at the first failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    /// Creates the validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validates one value without surrounding form context.
    #[must_use]
    pub fn validate_field(
        &self,
        field_name: &str,
        value: &Value,
        rule: &ValidationRule,
    ) -> Option<ValidationError> {
        self.validate_field_with_context(field_name, value, rule, &FormData::new())
    }

    /// Validates one value; custom rules receive the whole record.
    #[must_use]
    pub fn validate_field_with_context(
        &self,
        field_name: &str,
        value: &Value,
        rule: &ValidationRule,
        form_data: &FormData,
    ) -> Option<ValidationError> {
        if is_blank(value) {
            return rule
                .required
                .then(|| ValidationError::new(field_name, format!("{field_name} is required")));
        }

        let input = FieldInput::new(field_name, value, rule, form_data);
        FIELD_CHECKS
            .iter()
            .find_map(|check| check(&input))
            .map(|message| ValidationError::new(field_name, message))
    }

    /// Validates every ruled field of a record, in rule order.
    ///
    /// Fields present in the record without a rule are ignored.
    #[must_use]
    pub fn validate_form(&self, data: &FormData, rules: &FormRules) -> ValidationResult {
        let errors = rules
            .iter()
            .filter_map(|(field_name, rule)| {
                let value = data.get(field_name).unwrap_or(&Value::Null);
                self.validate_field_with_context(field_name, value, rule, data)
            })
            .collect();

        ValidationResult::from_errors(errors)
    }

    /// Checks one file's size, then its type.
    #[must_use]
    pub fn validate_file_upload(
        &self,
        file: &FileUpload,
        options: &FileUploadOptions,
    ) -> Option<ValidationError> {
        if file.size > options.max_size {
            let megabytes = (options.max_size as f64 / 1024.0 / 1024.0).round();
            return Some(ValidationError::new(
                "file",
                format!("File size must be less than {megabytes}MB"),
            ));
        }

        if !options.allowed_types.is_empty() && !options.allowed_types.contains(&file.mime_type)
        {
            return Some(ValidationError::new(
                "file",
                format!(
                    "File type must be one of: {}",
                    options.allowed_types.join(", ")
                ),
            ));
        }

        None
    }

    /// Checks a batch of files.
    ///
    /// Exceeding the file count yields a single error and skips per-file checks.
    #[must_use]
    pub fn validate_multiple_files(
        &self,
        files: &[FileUpload],
        options: &MultipleFileUploadOptions,
    ) -> Vec<ValidationError> {
        if files.len() > options.max_files {
            return vec![ValidationError::new(
                "files",
                format!("Maximum {} files allowed", options.max_files),
            )];
        }

        files
            .iter()
            .enumerate()
            .filter_map(|(index, file)| {
                self.validate_file_upload(file, &options.file)
                    .map(|error| {
                        ValidationError::new(
                            format!("file_{index}"),
                            format!("File {}: {}", index + 1, error.message),
                        )
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
