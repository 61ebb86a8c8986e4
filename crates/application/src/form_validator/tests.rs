use proptest::prelude::*;
use rentdesk_domain::{
    FileUpload, FileUploadOptions, FormData, FormRules, MultipleFileUploadOptions,
    ValidationError, ValidationRule, contract_validation_rules, login_validation_rules,
    maintenance_validation_rules, payment_validation_rules, registration_validation_rules,
};
use serde_json::{Value, json};

use super::FormValidator;

const MIB: u64 = 1024 * 1024;

fn record(value: Value) -> FormData {
    match value {
        Value::Object(map) => map,
        _ => FormData::new(),
    }
}

fn message(error: Option<ValidationError>) -> Option<String> {
    error.map(|error| error.message)
}

#[test]
fn required_field_reports_missing_value() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().required();

    assert_eq!(
        validator.validate_field("name", &json!(""), &rule),
        Some(ValidationError::new("name", "name is required"))
    );
    assert_eq!(validator.validate_field("name", &json!("John"), &rule), None);
    assert!(validator.validate_field("name", &json!("   "), &rule).is_some());
    assert!(validator.validate_field("name", &Value::Null, &rule).is_some());
}

#[test]
fn optional_blank_value_skips_remaining_rules() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().min(18.0).email().min_length(3);

    assert_eq!(validator.validate_field("age", &json!(""), &rule), None);
    assert_eq!(validator.validate_field("age", &Value::Null, &rule), None);
}

#[test]
fn email_rule_uses_simple_address_shape() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().email();

    assert_eq!(
        message(validator.validate_field("email", &json!("bad"), &rule)).as_deref(),
        Some("email must be a valid email address")
    );
    assert_eq!(validator.validate_field("email", &json!("a@b.com"), &rule), None);
    assert!(validator.validate_field("email", &json!("a b@c.com"), &rule).is_some());
}

#[test]
fn min_rule_is_inclusive() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().min(18.0);

    assert_eq!(
        message(validator.validate_field("age", &json!(15), &rule)).as_deref(),
        Some("age must be at least 18")
    );
    assert_eq!(validator.validate_field("age", &json!(18), &rule), None);
    assert!(validator.validate_field("age", &json!("17"), &rule).is_some());
}

#[test]
fn range_rules_ignore_non_numeric_values() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().min(1.0).max(5.0);

    assert_eq!(validator.validate_field("rating", &json!("many"), &rule), None);
    assert_eq!(
        message(validator.validate_field("rating", &json!(" 7 "), &rule)).as_deref(),
        Some("rating must be no more than 5")
    );
}

#[test]
fn booleans_coerce_for_range_rules() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().min(1.0);

    assert_eq!(
        message(validator.validate_field("accepted", &json!(false), &rule)).as_deref(),
        Some("accepted must be at least 1")
    );
    assert_eq!(validator.validate_field("accepted", &json!(true), &rule), None);
}

#[test]
fn length_counts_utf16_units_like_browsers() {
    let validator = FormValidator::new();

    let min_rule = ValidationRule::new().min_length(3);
    assert_eq!(validator.validate_field("title", &json!("😀😀"), &min_rule), None);
    assert!(validator.validate_field("title", &json!("😀"), &min_rule).is_some());

    let max_rule = ValidationRule::new().max_length(3);
    assert!(validator.validate_field("title", &json!("😀😀"), &max_rule).is_some());
}

#[test]
fn whole_float_length_ignores_fraction_suffix() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().max_length(1);

    assert_eq!(validator.validate_field("floor", &json!(1.0), &rule), None);
    assert!(validator.validate_field("floor", &json!(1.5), &rule).is_some());
}

#[test]
fn fractional_minimum_is_rendered_verbatim() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().min(0.01);

    assert_eq!(
        message(validator.validate_field("amount", &json!(0), &rule)).as_deref(),
        Some("amount must be at least 0.01")
    );
}

#[test]
fn length_rules_measure_trimmed_characters() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().min_length(3).max_length(5);

    assert_eq!(
        message(validator.validate_field("title", &json!("  ab  "), &rule)).as_deref(),
        Some("title must be at least 3 characters long")
    );
    assert_eq!(
        message(validator.validate_field("title", &json!("abcdef"), &rule)).as_deref(),
        Some("title must be no more than 5 characters long")
    );
    assert_eq!(validator.validate_field("title", &json!("ñandú"), &rule), None);
}

#[test]
fn first_failing_rule_wins() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new()
        .min_length(8)
        .custom(|_, _| Some("Password is too simple".to_owned()));

    assert_eq!(
        message(validator.validate_field("password", &json!("abc"), &rule)).as_deref(),
        Some("password must be at least 8 characters long")
    );
    assert_eq!(
        message(validator.validate_field("password", &json!("abcdefgh"), &rule)).as_deref(),
        Some("Password is too simple")
    );
}

#[test]
fn pattern_failure_uses_generic_message() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().pattern_str("^[A-Z]{2}-[0-9]{3}$");
    assert!(rule.is_ok());
    let rule = rule.unwrap_or_default();

    assert_eq!(validator.validate_field("code", &json!("AB-123"), &rule), None);
    assert_eq!(
        message(validator.validate_field("code", &json!("ab-123"), &rule)).as_deref(),
        Some("code format is invalid")
    );
}

#[test]
fn phone_rule_strips_formatting() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().phone();

    assert_eq!(
        validator.validate_field("phone", &json!("(555) 123-4567"), &rule),
        None
    );
    assert_eq!(
        validator.validate_field("phone", &json!("+44 20 7946 0958"), &rule),
        None
    );
    assert_eq!(
        message(validator.validate_field("phone", &json!("0123"), &rule)).as_deref(),
        Some("phone must be a valid phone number")
    );
    assert!(
        validator
            .validate_field("phone", &json!("12345678901234567"), &rule)
            .is_some()
    );
}

#[test]
fn url_rule_requires_absolute_url() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().url();

    assert_eq!(
        validator.validate_field("website", &json!("https://example.com/rooms"), &rule),
        None
    );
    assert_eq!(
        message(validator.validate_field("website", &json!("example.com"), &rule)).as_deref(),
        Some("website must be a valid URL")
    );
}

#[test]
fn date_rule_rejects_impossible_dates() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().date();

    assert_eq!(
        validator.validate_field("startDate", &json!("2024-02-29"), &rule),
        None
    );
    assert_eq!(
        message(validator.validate_field("startDate", &json!("2023-02-29"), &rule)).as_deref(),
        Some("startDate must be a valid date")
    );
}

#[test]
fn custom_message_is_reported_verbatim() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().custom(|value, _| {
        (value.as_str() != Some("yes")).then(|| "Please confirm".to_owned())
    });

    assert_eq!(
        validator.validate_field("confirm", &json!("no"), &rule),
        Some(ValidationError::new("confirm", "Please confirm"))
    );
}

#[test]
fn field_without_context_sees_empty_record() {
    let validator = FormValidator::new();
    let rule = ValidationRule::new().custom(|_, form| {
        (!form.is_empty()).then(|| "unexpected context".to_owned())
    });

    assert_eq!(validator.validate_field("any", &json!("x"), &rule), None);
}

#[test]
fn form_validation_only_checks_ruled_fields_in_rule_order() {
    let validator = FormValidator::new();
    let rules = FormRules::new()
        .field("title", ValidationRule::new().required())
        .field("amount", ValidationRule::new().required().min(1.0));
    let data = record(json!({ "amount": 0, "unruled": "" }));

    let result = validator.validate_form(&data, &rules);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            ValidationError::new("title", "title is required"),
            ValidationError::new("amount", "amount must be at least 1"),
        ]
    );
}

#[test]
fn valid_login_passes() {
    let validator = FormValidator::new();
    let data = record(json!({ "email": "renter@example.com", "password": "x" }));

    let result = validator.validate_form(&data, login_validation_rules());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn registration_checks_confirmation_against_password() {
    let validator = FormValidator::new();
    let data = record(json!({
        "name": "Ana",
        "email": "ana@example.com",
        "password": "Secret123",
        "confirmPassword": "Secret321"
    }));

    let result = validator.validate_form(&data, registration_validation_rules());
    assert_eq!(
        result.errors,
        vec![ValidationError::new("confirmPassword", "Passwords do not match")]
    );
}

#[test]
fn registration_reports_length_before_complexity() {
    let validator = FormValidator::new();
    let data = record(json!({
        "name": "Ana",
        "email": "ana@example.com",
        "password": "short",
        "confirmPassword": "short"
    }));

    let result = validator.validate_form(&data, registration_validation_rules());
    assert_eq!(
        result.error_for("password").map(|error| error.message.as_str()),
        Some("password must be at least 8 characters long")
    );
}

#[test]
fn contract_end_date_must_follow_start_date() {
    let validator = FormValidator::new();
    let data = record(json!({
        "renterId": "r-1",
        "roomId": "101",
        "startDate": "2024-06-01",
        "endDate": "2024-01-01",
        "monthlyRent": 0
    }));

    let result = validator.validate_form(&data, contract_validation_rules());
    assert_eq!(
        result.errors,
        vec![ValidationError::new(
            "endDate",
            "End date must be after start date"
        )]
    );
}

#[test]
fn payment_amount_needs_a_cent() {
    let validator = FormValidator::new();
    let data = record(json!({
        "contractId": "c-1",
        "amount": "0",
        "paymentDate": "2024-06-01",
        "paymentMethod": "bank_transfer"
    }));

    let result = validator.validate_form(&data, payment_validation_rules());
    assert_eq!(
        result.errors,
        vec![ValidationError::new("amount", "amount must be at least 0.01")]
    );
}

#[test]
fn maintenance_request_thresholds() {
    let validator = FormValidator::new();
    let data = record(json!({
        "roomId": "101",
        "title": "Tap",
        "description": "Leaking",
        "priority": "HIGH"
    }));

    let result = validator.validate_form(&data, maintenance_validation_rules());
    assert_eq!(
        result.errors,
        vec![ValidationError::new(
            "description",
            "description must be at least 10 characters long"
        )]
    );
}

#[test]
fn oversized_file_is_rejected() {
    let validator = FormValidator::new();
    let file = FileUpload::new("scan.pdf", 10 * MIB, "application/pdf");
    let options = FileUploadOptions {
        max_size: 5 * MIB,
        allowed_types: Vec::new(),
    };

    assert_eq!(
        message(validator.validate_file_upload(&file, &options)).as_deref(),
        Some("File size must be less than 5MB")
    );
}

#[test]
fn small_allowed_file_passes() {
    let validator = FormValidator::new();
    let file = FileUpload::new("photo.jpg", 1024, "image/jpeg");
    let options = FileUploadOptions {
        max_size: 5 * MIB,
        allowed_types: vec!["image/jpeg".to_owned()],
    };

    assert_eq!(validator.validate_file_upload(&file, &options), None);
}

#[test]
fn file_size_is_checked_before_type() {
    let validator = FormValidator::new();
    let options = FileUploadOptions {
        max_size: MIB,
        allowed_types: vec!["image/jpeg".to_owned(), "image/png".to_owned()],
    };

    let wrong_type = FileUpload::new("lease.pdf", 10, "application/pdf");
    assert_eq!(
        message(validator.validate_file_upload(&wrong_type, &options)).as_deref(),
        Some("File type must be one of: image/jpeg, image/png")
    );

    let both_wrong = FileUpload::new("lease.pdf", 2 * MIB, "application/pdf");
    assert_eq!(
        message(validator.validate_file_upload(&both_wrong, &options)).as_deref(),
        Some("File size must be less than 1MB")
    );
}

#[test]
fn too_many_files_yield_single_error() {
    let validator = FormValidator::new();
    let files: Vec<_> = (0..15)
        .map(|index| FileUpload::new(format!("photo-{index}.jpg"), 20 * MIB, "image/jpeg"))
        .collect();

    let errors = validator.validate_multiple_files(&files, &MultipleFileUploadOptions::default());
    assert_eq!(
        errors,
        vec![ValidationError::new("files", "Maximum 10 files allowed")]
    );
}

#[test]
fn per_file_errors_are_indexed() {
    let validator = FormValidator::new();
    let files = vec![
        FileUpload::new("a.jpg", 1024, "image/jpeg"),
        FileUpload::new("b.jpg", 6 * MIB, "image/jpeg"),
        FileUpload::new("c.gif", 1024, "image/gif"),
    ];
    let options = MultipleFileUploadOptions {
        max_files: 3,
        file: FileUploadOptions {
            max_size: 5 * MIB,
            allowed_types: vec!["image/jpeg".to_owned()],
        },
    };

    assert_eq!(
        validator.validate_multiple_files(&files, &options),
        vec![
            ValidationError::new("file_1", "File 2: File size must be less than 5MB"),
            ValidationError::new("file_2", "File 3: File type must be one of: image/jpeg"),
        ]
    );
}

proptest! {
    #[test]
    fn field_validation_is_repeatable(text in ".{0,40}", min_length in 0usize..12) {
        let validator = FormValidator::new();
        let rule = ValidationRule::new()
            .required()
            .min_length(min_length)
            .email();
        let value = json!(text);

        prop_assert_eq!(
            validator.validate_field("email", &value, &rule),
            validator.validate_field("email", &value, &rule)
        );
    }

    #[test]
    fn optional_whitespace_is_always_valid(padding in "[ \t]{0,8}") {
        let validator = FormValidator::new();
        let rule = ValidationRule::new().min_length(3).phone().url().date();
        prop_assert_eq!(validator.validate_field("note", &json!(padding), &rule), None);
    }
}
