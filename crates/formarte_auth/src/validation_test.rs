#[cfg(test)]
mod tests {
    use formarte_config::AuthConfig;

    use crate::error::AuthError;
    use crate::validation::{
        is_institutional, normalize_email, validate_login, validate_new_password,
        validate_registration, validate_reset_email,
    };

    fn config() -> AuthConfig {
        AuthConfig::default()
    }

    #[test]
    fn emails_are_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Ana.Gomez@FormArte.EDU.CO "), "ana.gomez@formarte.edu.co");
    }

    #[test]
    fn institutional_suffix() {
        assert!(is_institutional("ana@formarte.edu.co", &config()));
        assert!(is_institutional("ANA@FORMARTE.EDU.CO", &config()));
        assert!(!is_institutional("ana@gmail.com", &config()));
        assert!(!is_institutional("ana@edu.co.com", &config()));
    }

    #[test]
    fn login_checks_in_order() {
        let cfg = config();
        assert!(matches!(
            validate_login("", "secreto", &cfg),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            validate_login("ana@formarte.edu.co", "   ", &cfg),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            validate_login("ana@gmail.com", "secreto", &cfg),
            Err(AuthError::NonInstitutionalEmail)
        ));
        assert!(validate_login("ana@formarte.edu.co", "x", &cfg).is_ok());
    }

    #[test]
    fn registration_requires_name() {
        let err = validate_registration(" ", "ana@formarte.edu.co", "secreto", &config()).unwrap_err();
        assert_eq!(err.to_string(), "Por favor, completa todos los campos.");

        let err = validate_registration("Ana", "ana@gmail.com", "secreto", &config()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Por favor, usa un correo institucional válido (ej: @edu.co)."
        );
    }

    #[test]
    fn reset_email_uses_its_own_message() {
        let err = validate_reset_email("", &config()).unwrap_err();
        assert_eq!(err.to_string(), "Por favor, ingresa un correo institucional válido.");
        assert!(validate_reset_email("ana@gmail.com", &config()).is_err());
        assert!(validate_reset_email("ana@formarte.edu.co", &config()).is_ok());
    }

    #[test]
    fn new_password_rules() {
        let cfg = config();
        assert!(matches!(
            validate_new_password("", "abcdef", &cfg),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            validate_new_password("abcdef", "abcdeg", &cfg),
            Err(AuthError::PasswordMismatch)
        ));
        let err = validate_new_password("abc", "abc", &cfg).unwrap_err();
        assert_eq!(err.to_string(), "La contraseña debe tener al menos 6 caracteres.");
        assert!(validate_new_password("ñandú1", "ñandú1", &cfg).is_ok());
    }
}
