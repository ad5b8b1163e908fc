//! Forgot-password page: `request -> reset -> success`.

use formarte_config::AuthConfig;

use crate::error::AuthError;
use crate::models::ResetStep;
use crate::validation::{normalize_email, validate_new_password, validate_reset_email};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordFlow {
    step: ResetStep,
    email: String,
}

impl Default for ForgotPasswordFlow {
    fn default() -> Self {
        Self {
            step: ResetStep::Request,
            email: String::new(),
        }
    }
}

impl ForgotPasswordFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> ResetStep {
        self.step
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    fn expect(&self, expected: ResetStep) -> Result<(), AuthError> {
        if self.step != expected {
            return Err(AuthError::WrongStep {
                expected: expected.as_str(),
                actual: self.step.as_str(),
            });
        }
        Ok(())
    }

    /// Accepts the e-mail and moves to `reset`. No lookup happens here.
    pub fn request(&mut self, email: &str, config: &AuthConfig) -> Result<(), AuthError> {
        self.expect(ResetStep::Request)?;
        validate_reset_email(email, config)?;
        self.email = normalize_email(email);
        self.step = ResetStep::Reset;
        Ok(())
    }

    /// Checks the new password pair; the step is unchanged on failure.
    pub fn check_new_password(
        &self,
        password: &str,
        confirm_password: &str,
        config: &AuthConfig,
    ) -> Result<(), AuthError> {
        self.expect(ResetStep::Reset)?;
        validate_new_password(password, confirm_password, config)
    }

    /// Records the directory's answer. An unknown account sends the page
    /// back to `request`.
    pub fn complete(&mut self, result: Result<(), AuthError>) -> Result<(), AuthError> {
        self.expect(ResetStep::Reset)?;
        match result {
            Ok(()) => {
                self.step = ResetStep::Success;
                Ok(())
            }
            Err(AuthError::AccountNotFound) => {
                self.step = ResetStep::Request;
                Err(AuthError::AccountNotFound)
            }
            Err(e) => Err(e),
        }
    }
}
