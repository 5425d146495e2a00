//! Password strength rules for storefront accounts.

use super::error::DomainError;

/// Minimum requirements a new storefront password must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
        }
    }
}

impl PasswordPolicy {
    /// Check `password` against every rule.
    ///
    /// # Errors
    /// Returns [`DomainError::WeakPassword`] if any rule fails.
    pub fn check(&self, password: &str) -> Result<(), DomainError> {
        let long_enough = password.chars().count() >= self.min_length;
        let upper = !self.require_uppercase || password.chars().any(|c| c.is_ascii_uppercase());
        let lower = !self.require_lowercase || password.chars().any(|c| c.is_ascii_lowercase());
        let digit = !self.require_digit || password.chars().any(|c| c.is_ascii_digit());

        if long_enough && upper && lower && digit {
            Ok(())
        } else {
            Err(DomainError::WeakPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_password_meeting_all_rules() {
        assert!(PasswordPolicy::default().check("Area51ok").is_ok());
    }

    #[test]
    fn rejects_each_missing_rule() {
        let policy = PasswordPolicy::default();
        for weak in ["Ab1", "lowercase1", "UPPERCASE1", "NoDigitsHere"] {
            assert_eq!(policy.check(weak), Err(DomainError::WeakPassword), "{weak}");
        }
    }
}
