// --- File: crates/formarte_auth/src/error.rs ---
use formarte_common::{HttpStatusCode, PortalError};
use formarte_storage::StorageError;
use thiserror::Error;

/// Account page errors. Validation variants display the exact message shown
/// under the form.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Por favor, completa todos los campos.")]
    MissingFields,

    #[error("Por favor, usa un correo institucional válido (ej: @edu.co).")]
    NonInstitutionalEmail,

    /// Forgot-password request step
    #[error("Por favor, ingresa un correo institucional válido.")]
    InvalidResetEmail,

    #[error("Este correo electrónico ya está registrado.")]
    EmailTaken,

    #[error("El correo electrónico o la contraseña son incorrectos.")]
    InvalidCredentials,

    #[error("Las contraseñas no coinciden.")]
    PasswordMismatch,

    #[error("La contraseña debe tener al menos {0} caracteres.")]
    PasswordTooShort(usize),

    #[error("No se encontró una cuenta con ese correo electrónico.")]
    AccountNotFound,

    /// A forgot-password action arrived in the wrong step
    #[error("Password reset is in step '{actual}', expected '{expected}'")]
    WrongStep {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to encode accounts: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<AuthError> for PortalError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Storage(e) => e.into(),
            AuthError::Encode(e) => PortalError::InternalError(e.to_string()),
            AuthError::InvalidCredentials => PortalError::AuthError(err.to_string()),
            AuthError::EmailTaken | AuthError::WrongStep { .. } => {
                PortalError::ConflictError(err.to_string())
            }
            AuthError::MissingFields
            | AuthError::NonInstitutionalEmail
            | AuthError::InvalidResetEmail
            | AuthError::PasswordMismatch
            | AuthError::PasswordTooShort(_)
            | AuthError::AccountNotFound => PortalError::ValidationError(err.to_string()),
        }
    }
}

impl HttpStatusCode for AuthError {
    fn status_code(&self) -> u16 {
        match self {
            AuthError::Storage(e) => e.status_code(),
            AuthError::Encode(_) => 500,
            AuthError::InvalidCredentials => 401,
            AuthError::EmailTaken | AuthError::WrongStep { .. } => 409,
            _ => 400,
        }
    }
}
