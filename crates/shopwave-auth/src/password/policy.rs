//! Password policy enforcement for new accounts.

use shopwave_core::config::auth::AuthConfig;
use shopwave_core::error::AppError;

/// Sign-up password requirements.
///
/// Applied only when a password is chosen; sign-in verifies whatever hash
/// is stored, so tightening the policy never locks out existing accounts.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordPolicy {
    /// Build the policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Check a candidate password, reporting the first unmet requirement.
    ///
    /// Character-class checks run first; anything that survives them is
    /// scored with zxcvbn, which catches dictionary words and keyboard
    /// walks the class checks cannot.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        if !password.chars().any(char::is_uppercase) {
            return Err(AppError::validation(
                "Password needs at least one uppercase letter",
            ));
        }
        if !password.chars().any(char::is_lowercase) {
            return Err(AppError::validation(
                "Password needs at least one lowercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation("Password needs at least one digit"));
        }

        if zxcvbn::zxcvbn(password, &[]).score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too guessable, pick something less common",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PasswordPolicy {
        PasswordPolicy::new(&AuthConfig::default())
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(policy().validate("Ab1x").is_err());
    }

    #[test]
    fn test_missing_digit_rejected() {
        assert!(policy().validate("NoDigitsHereAtAll").is_err());
    }

    #[test]
    fn test_missing_uppercase_rejected() {
        assert!(policy().validate("alllowercase99").is_err());
    }

    #[test]
    fn test_common_password_rejected() {
        // Meets the character classes but zxcvbn scores it too low.
        assert!(policy().validate("Password123").is_err());
    }

    #[test]
    fn test_strong_password_accepted() {
        assert!(policy().validate("Tr4verse-Quiet-Lantern9").is_ok());
    }
}
