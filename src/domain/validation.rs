//! Field rules shared by the directory service and the request extractors.
//!
//! Each check returns the message of the first rule the value breaks.

use std::borrow::Cow;

use validator::{ValidateEmail, ValidationError};

use crate::config::{
    MAX_TEXT_LENGTH, MIN_FULL_NAME_LENGTH, MIN_PASSWORD_LENGTH, MSG_EMAIL_INVALID,
    MSG_EMAIL_REQUIRED, MSG_EMAIL_TOO_LONG, MSG_FULL_NAME_REQUIRED, MSG_FULL_NAME_TOO_LONG,
    MSG_FULL_NAME_TOO_SHORT, MSG_PASSWORD_NEEDS_DIGIT, MSG_PASSWORD_NEEDS_UPPERCASE,
    MSG_PASSWORD_REQUIRED, MSG_PASSWORD_TOO_SHORT,
};

/// Values longer than the database column are rejected before the write.
fn exceeds_column(value: &str) -> bool {
    value.chars().count() > MAX_TEXT_LENGTH as usize
}

pub fn check_email(email: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err(MSG_EMAIL_REQUIRED);
    }
    if !email.validate_email() {
        return Err(MSG_EMAIL_INVALID);
    }
    if exceeds_column(email) {
        return Err(MSG_EMAIL_TOO_LONG);
    }
    Ok(())
}

pub fn check_password(password: &str) -> Result<(), &'static str> {
    if password.trim().is_empty() {
        return Err(MSG_PASSWORD_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(MSG_PASSWORD_TOO_SHORT);
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(MSG_PASSWORD_NEEDS_UPPERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(MSG_PASSWORD_NEEDS_DIGIT);
    }
    Ok(())
}

pub fn check_full_name(full_name: &str) -> Result<(), &'static str> {
    if full_name.trim().is_empty() {
        return Err(MSG_FULL_NAME_REQUIRED);
    }
    if full_name.chars().count() < MIN_FULL_NAME_LENGTH {
        return Err(MSG_FULL_NAME_TOO_SHORT);
    }
    if exceeds_column(full_name) {
        return Err(MSG_FULL_NAME_TOO_LONG);
    }
    Ok(())
}

/// Lift a rule into a `validator` custom function result.
fn as_validation_error(
    code: &'static str,
    rule: Result<(), &'static str>,
) -> Result<(), ValidationError> {
    rule.map_err(|message| {
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Borrowed(message));
        error
    })
}

/// `#[validate(custom)]` adapter for email fields
pub fn email_rule(email: &str) -> Result<(), ValidationError> {
    as_validation_error("email", check_email(email))
}

/// `#[validate(custom)]` adapter for password fields
pub fn password_rule(password: &str) -> Result<(), ValidationError> {
    as_validation_error("password", check_password(password))
}

/// Like `password_rule`, but an empty value means "keep the current password".
pub fn optional_password_rule(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Ok(());
    }
    password_rule(password)
}

/// `#[validate(custom)]` adapter for full name fields
pub fn full_name_rule(full_name: &str) -> Result<(), ValidationError> {
    as_validation_error("full_name", check_full_name(full_name))
}
