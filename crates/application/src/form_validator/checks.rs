use std::sync::LazyLock;

use regex::Regex;
use rentdesk_domain::field_value::{as_date, as_number, as_text, text_length};
use rentdesk_domain::{FormData, ValidationRule};
use serde_json::Value;
use url::Url;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").ok());

/// Non-blank value under validation.
pub(super) struct FieldInput<'a> {
    field_name: &'a str,
    value: &'a Value,
    text: String,
    rule: &'a ValidationRule,
    form_data: &'a FormData,
}

impl<'a> FieldInput<'a> {
    pub(super) fn new(
        field_name: &'a str,
        value: &'a Value,
        rule: &'a ValidationRule,
        form_data: &'a FormData,
    ) -> Self {
        Self {
            field_name,
            value,
            text: as_text(value),
            rule,
            form_data,
        }
    }
}

pub(super) type FieldCheck = fn(&FieldInput<'_>) -> Option<String>;

/// Checks after the required/blank gate, in precedence order.
pub(super) const FIELD_CHECKS: &[FieldCheck] = &[
    check_min_length,
    check_max_length,
    check_min,
    check_max,
    check_pattern,
    check_email,
    check_phone,
    check_url,
    check_date,
    check_custom,
];

fn check_min_length(input: &FieldInput<'_>) -> Option<String> {
    let min_length = input.rule.min_length?;
    (text_length(&input.text) < min_length).then(|| {
        format!(
            "{} must be at least {min_length} characters long",
            input.field_name
        )
    })
}

fn check_max_length(input: &FieldInput<'_>) -> Option<String> {
    let max_length = input.rule.max_length?;
    (text_length(&input.text) > max_length).then(|| {
        format!(
            "{} must be no more than {max_length} characters long",
            input.field_name
        )
    })
}

fn check_min(input: &FieldInput<'_>) -> Option<String> {
    let min = input.rule.min?;
    let number = as_number(input.value)?;
    (number < min).then(|| format!("{} must be at least {min}", input.field_name))
}

fn check_max(input: &FieldInput<'_>) -> Option<String> {
    let max = input.rule.max?;
    let number = as_number(input.value)?;
    (number > max).then(|| format!("{} must be no more than {max}", input.field_name))
}

fn check_pattern(input: &FieldInput<'_>) -> Option<String> {
    let pattern = input.rule.pattern.as_ref()?;
    (!pattern.is_match(&input.text)).then(|| format!("{} format is invalid", input.field_name))
}

fn check_email(input: &FieldInput<'_>) -> Option<String> {
    if !input.rule.email || pattern_matches(&EMAIL_PATTERN, &input.text) {
        return None;
    }

    Some(format!("{} must be a valid email address", input.field_name))
}

fn check_phone(input: &FieldInput<'_>) -> Option<String> {
    if !input.rule.phone {
        return None;
    }

    let digits: String = input
        .text
        .chars()
        .filter(|character| !character.is_whitespace() && !matches!(*character, '-' | '(' | ')'))
        .collect();

    (!pattern_matches(&PHONE_PATTERN, &digits))
        .then(|| format!("{} must be a valid phone number", input.field_name))
}

fn check_url(input: &FieldInput<'_>) -> Option<String> {
    if !input.rule.url {
        return None;
    }

    Url::parse(&input.text)
        .err()
        .map(|_| format!("{} must be a valid URL", input.field_name))
}

fn check_date(input: &FieldInput<'_>) -> Option<String> {
    if !input.rule.date || as_date(input.value).is_some() {
        return None;
    }

    Some(format!("{} must be a valid date", input.field_name))
}

fn check_custom(input: &FieldInput<'_>) -> Option<String> {
    let custom = input.rule.custom.as_ref()?;
    custom(input.value, input.form_data)
}

fn pattern_matches(pattern: &Option<Regex>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|pattern| pattern.is_match(text))
}
