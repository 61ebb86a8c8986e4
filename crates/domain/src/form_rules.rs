//! Static rule tables for the dashboard forms.
//!
//! Thresholds here are relied on by screens and tests; change them together.

use std::str::FromStr;
use std::sync::LazyLock;

use rentdesk_core::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field_value::{as_date, as_text, is_blank};
use crate::{FormData, FormRules, ValidationRule};

/// Accepted maintenance priority values.
pub const MAINTENANCE_PRIORITIES: &[&str] = &["LOW", "MEDIUM", "HIGH", "URGENT"];

/// Forms with a predefined rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// Rental contract editor.
    Contract,
    /// Payment record editor.
    Payment,
    /// Maintenance request form.
    Maintenance,
    /// Expense editor.
    Expense,
    /// Account registration.
    Registration,
    /// Sign-in.
    Login,
}

impl FormKind {
    /// Returns the stable form name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Payment => "payment",
            Self::Maintenance => "maintenance",
            Self::Expense => "expense",
            Self::Registration => "registration",
            Self::Login => "login",
        }
    }

    /// Returns all forms with rule tables.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[FormKind] = &[
            FormKind::Contract,
            FormKind::Payment,
            FormKind::Maintenance,
            FormKind::Expense,
            FormKind::Registration,
            FormKind::Login,
        ];

        ALL
    }

    /// Returns the rule table for this form.
    #[must_use]
    pub fn rules(&self) -> &'static FormRules {
        match self {
            Self::Contract => contract_validation_rules(),
            Self::Payment => payment_validation_rules(),
            Self::Maintenance => maintenance_validation_rules(),
            Self::Expense => expense_validation_rules(),
            Self::Registration => registration_validation_rules(),
            Self::Login => login_validation_rules(),
        }
    }
}

impl FromStr for FormKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "contract" => Ok(Self::Contract),
            "payment" => Ok(Self::Payment),
            "maintenance" => Ok(Self::Maintenance),
            "expense" => Ok(Self::Expense),
            "registration" => Ok(Self::Registration),
            "login" => Ok(Self::Login),
            _ => Err(AppError::NotFound(format!("unknown form '{value}'"))),
        }
    }
}

static CONTRACT_RULES: LazyLock<FormRules> = LazyLock::new(|| {
    FormRules::new()
        .field("renterId", ValidationRule::new().required())
        .field("roomId", ValidationRule::new().required())
        .field("startDate", ValidationRule::new().required().date())
        .field(
            "endDate",
            ValidationRule::new()
                .required()
                .date()
                .custom(end_date_after_start_date),
        )
        .field("monthlyRent", ValidationRule::new().required().min(0.0))
        .field("deposit", ValidationRule::new().min(0.0))
        .field("terms", ValidationRule::new().max_length(5000))
});

static PAYMENT_RULES: LazyLock<FormRules> = LazyLock::new(|| {
    FormRules::new()
        .field("contractId", ValidationRule::new().required())
        .field("amount", ValidationRule::new().required().min(0.01))
        .field("paymentDate", ValidationRule::new().required().date())
        .field("paymentMethod", ValidationRule::new().required())
        .field("notes", ValidationRule::new().max_length(500))
});

static MAINTENANCE_RULES: LazyLock<FormRules> = LazyLock::new(|| {
    FormRules::new()
        .field("roomId", ValidationRule::new().required())
        .field(
            "title",
            ValidationRule::new().required().min_length(3).max_length(100),
        )
        .field(
            "description",
            ValidationRule::new().required().min_length(10).max_length(1000),
        )
        .field(
            "priority",
            ValidationRule::new().required().custom(known_priority),
        )
});

static EXPENSE_RULES: LazyLock<FormRules> = LazyLock::new(|| {
    FormRules::new()
        .field("category", ValidationRule::new().required())
        .field("amount", ValidationRule::new().required().min(0.01))
        .field("date", ValidationRule::new().required().date())
        .field(
            "description",
            ValidationRule::new().required().min_length(3).max_length(500),
        )
});

static REGISTRATION_RULES: LazyLock<FormRules> = LazyLock::new(|| {
    FormRules::new()
        .field(
            "name",
            ValidationRule::new().required().min_length(2).max_length(50),
        )
        .field("email", ValidationRule::new().required().email())
        .field(
            "password",
            ValidationRule::new()
                .required()
                .min_length(8)
                .custom(password_complexity),
        )
        .field(
            "confirmPassword",
            ValidationRule::new().required().custom(matches_password),
        )
        .field("phone", ValidationRule::new().phone())
});

static LOGIN_RULES: LazyLock<FormRules> = LazyLock::new(|| {
    FormRules::new()
        .field("email", ValidationRule::new().required().email())
        .field("password", ValidationRule::new().required())
});

/// Rules for the contract editor.
#[must_use]
pub fn contract_validation_rules() -> &'static FormRules {
    &CONTRACT_RULES
}

/// Rules for the payment editor.
#[must_use]
pub fn payment_validation_rules() -> &'static FormRules {
    &PAYMENT_RULES
}

/// Rules for maintenance requests.
#[must_use]
pub fn maintenance_validation_rules() -> &'static FormRules {
    &MAINTENANCE_RULES
}

/// Rules for the expense editor.
#[must_use]
pub fn expense_validation_rules() -> &'static FormRules {
    &EXPENSE_RULES
}

/// Rules for account registration.
#[must_use]
pub fn registration_validation_rules() -> &'static FormRules {
    &REGISTRATION_RULES
}

/// Rules for sign-in.
#[must_use]
pub fn login_validation_rules() -> &'static FormRules {
    &LOGIN_RULES
}

fn end_date_after_start_date(value: &Value, form: &FormData) -> Option<String> {
    let start = form
        .get("startDate")
        .filter(|start| !is_blank(start))
        .and_then(as_date)?;
    let end = as_date(value)?;

    (end <= start).then(|| "End date must be after start date".to_owned())
}

fn known_priority(value: &Value, _form: &FormData) -> Option<String> {
    let priority = as_text(value);
    (!MAINTENANCE_PRIORITIES.contains(&priority.as_str()))
        .then(|| format!("Priority must be one of: {}", MAINTENANCE_PRIORITIES.join(", ")))
}

fn password_complexity(value: &Value, _form: &FormData) -> Option<String> {
    let password = as_text(value);
    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(|character| character.is_ascii_digit());

    (!(has_upper && has_lower && has_digit)).then(|| {
        "Password must contain at least one uppercase letter, one lowercase letter, and one number"
            .to_owned()
    })
}

fn matches_password(value: &Value, form: &FormData) -> Option<String> {
    let password = form.get("password").map(as_text).unwrap_or_default();
    (as_text(value) != password).then(|| "Passwords do not match".to_owned())
}
