//! Form checks shared by the login, registration and reset pages.
//!
//! Checks run in page order and stop at the first failure.

use formarte_config::AuthConfig;

use crate::error::AuthError;

/// Trimmed, lower-cased e-mail.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_institutional(email: &str, config: &AuthConfig) -> bool {
    normalize_email(email).ends_with(&config.institutional_domain.to_lowercase())
}

pub fn validate_login(email: &str, password: &str, config: &AuthConfig) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingFields);
    }
    if !is_institutional(email, config) {
        return Err(AuthError::NonInstitutionalEmail);
    }
    Ok(())
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    config: &AuthConfig,
) -> Result<(), AuthError> {
    if name.trim().is_empty() {
        return Err(AuthError::MissingFields);
    }
    validate_login(email, password, config)
}

/// First step of the forgot-password page.
pub fn validate_reset_email(email: &str, config: &AuthConfig) -> Result<(), AuthError> {
    if email.trim().is_empty() || !is_institutional(email, config) {
        return Err(AuthError::InvalidResetEmail);
    }
    Ok(())
}

/// Second step: both fields, matching, long enough.
pub fn validate_new_password(
    password: &str,
    confirm_password: &str,
    config: &AuthConfig,
) -> Result<(), AuthError> {
    if password.is_empty() || confirm_password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    if password.chars().count() < config.min_password_length {
        return Err(AuthError::PasswordTooShort(config.min_password_length));
    }
    Ok(())
}
