//! Form field validation
//!
//! Pure validators for the sign-in / sign-up forms. Each validator returns
//! the failing [`ValidationError`] or `None`; [`validate_form`] collects the
//! errors for every failing field so a caller can surface all of them and
//! focus the first one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::utils::phone::FULL_MASK_LEN;

// Latin or Cyrillic letters and whitespace only
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ\s]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const PASSWORD_SPECIALS: &str = "!@#$%^&*_-";

/// Field-level validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    #[error("Please enter your first name")]
    FirstNameRequired,

    #[error("First name must be between 2 and 50 characters")]
    FirstNameLength,

    #[error("First name must not contain digits or special characters")]
    FirstNameFormat,

    #[error("Please enter your last name")]
    LastNameRequired,

    #[error("Last name must be between 2 and 50 characters")]
    LastNameLength,

    #[error("Last name must not contain digits or special characters")]
    LastNameFormat,

    #[error("Please enter your email")]
    EmailRequired,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Please enter your password")]
    PasswordRequired,

    #[error("Password must be at least 8 characters long and include an uppercase letter, a lowercase letter, a digit and one of !@#$%^&*-_")]
    WeakPassword,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Validate a first name: required, 2..=50 characters, letters only
pub fn validate_first_name(first_name: &str) -> Option<ValidationError> {
    if first_name.trim().is_empty() {
        return Some(ValidationError::FirstNameRequired);
    }
    let len = first_name.trim().chars().count();
    if !(2..=50).contains(&len) {
        return Some(ValidationError::FirstNameLength);
    }
    if !NAME_REGEX.is_match(first_name) {
        return Some(ValidationError::FirstNameFormat);
    }
    None
}

/// Validate a last name: required, 2..=50 characters, letters only
pub fn validate_last_name(last_name: &str) -> Option<ValidationError> {
    if last_name.trim().is_empty() {
        return Some(ValidationError::LastNameRequired);
    }
    let len = last_name.trim().chars().count();
    if !(2..=50).contains(&len) {
        return Some(ValidationError::LastNameLength);
    }
    if !NAME_REGEX.is_match(last_name) {
        return Some(ValidationError::LastNameFormat);
    }
    None
}

/// Validate an email address
pub fn validate_email(email: &str) -> Option<ValidationError> {
    if email.trim().is_empty() {
        return Some(ValidationError::EmailRequired);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Some(ValidationError::InvalidEmail);
    }
    None
}

/// Validate a masked phone number
///
/// Purely structural: the value passes once it reaches the full mask length
/// (`+7 (XXX) XXX-XX-XX`). Digit plausibility is enforced upstream by the
/// input mask itself.
pub fn validate_phone_number(phone: &str) -> Option<ValidationError> {
    if phone.trim().is_empty() || phone.chars().count() < FULL_MASK_LEN {
        return Some(ValidationError::InvalidPhone);
    }
    None
}

/// Validate a password for sign-up
///
/// Requires at least 8 characters including an uppercase letter, a lowercase
/// letter, a digit and one of `!@#$%^&*-_`.
pub fn validate_password(password: &str) -> Option<ValidationError> {
    if password.trim().is_empty() {
        return Some(ValidationError::PasswordRequired);
    }
    let strong = password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    if !strong {
        return Some(ValidationError::WeakPassword);
    }
    None
}

/// Validate a password for sign-in (length check only)
pub fn validate_password_for_sign_in(password: &str) -> Option<ValidationError> {
    if password.trim().is_empty() {
        return Some(ValidationError::PasswordRequired);
    }
    if password.chars().count() < 6 {
        return Some(ValidationError::PasswordTooShort);
    }
    None
}

/// Which form the fields belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormContext {
    SignIn,
    SignUp,
}

/// Form field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
}

/// A named field value to validate
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
}

impl FormField {
    pub fn new(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A failed field together with its error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldName,
    pub error: ValidationError,
}

impl FieldError {
    /// Human-readable message for the failure
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Validate every field of a form, returning all failures
///
/// Name and phone fields are only checked on sign-up; the password rule
/// depends on the form context.
pub fn validate_form(fields: &[FormField], context: FormContext) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|field| {
            let error = match field.name {
                FieldName::FirstName if context == FormContext::SignUp => {
                    validate_first_name(&field.value)
                }
                FieldName::LastName if context == FormContext::SignUp => {
                    validate_last_name(&field.value)
                }
                FieldName::Email => validate_email(&field.value),
                FieldName::PhoneNumber if context == FormContext::SignUp => {
                    validate_phone_number(&field.value)
                }
                FieldName::Password => match context {
                    FormContext::SignUp => validate_password(&field.value),
                    FormContext::SignIn => validate_password_for_sign_in(&field.value),
                },
                _ => None,
            };
            error.map(|error| FieldError {
                field: field.name,
                error,
            })
        })
        .collect()
}
