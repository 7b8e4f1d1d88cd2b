use super::errors::PolicyError;

/// Composition rules applied to a candidate password before hashing.
///
/// Checked exactly once, at registration time. The plaintext never leaves
/// the registration request; on success it flows directly into the hasher.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    const MIN_LENGTH: usize = 8;

    pub fn new() -> Self {
        Self {
            min_length: Self::MIN_LENGTH,
        }
    }

    /// Validate a candidate password against the policy.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than the minimum number of characters
    /// * `MissingLowercase` - No lowercase letter
    /// * `MissingUppercase` - No uppercase letter
    /// * `MissingDigit` - No digit
    pub fn validate(&self, password: &str) -> Result<(), PolicyError> {
        if password.chars().count() < self.min_length {
            return Err(PolicyError::TooShort {
                min: self.min_length,
            });
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PolicyError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PolicyError::MissingDigit);
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_conforming_password() {
        let policy = PasswordPolicy::new();
        assert!(policy.validate("Passw0rd1").is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        let policy = PasswordPolicy::new();
        assert_eq!(
            policy.validate("Pw1aBcd"),
            Err(PolicyError::TooShort { min: 8 })
        );
    }

    #[test]
    fn test_rejects_missing_lowercase() {
        let policy = PasswordPolicy::new();
        assert_eq!(
            policy.validate("PASSWORD1"),
            Err(PolicyError::MissingLowercase)
        );
    }

    #[test]
    fn test_rejects_missing_uppercase() {
        let policy = PasswordPolicy::new();
        assert_eq!(
            policy.validate("password1"),
            Err(PolicyError::MissingUppercase)
        );
    }

    #[test]
    fn test_rejects_missing_digit() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.validate("Passwords"), Err(PolicyError::MissingDigit));
    }
}
