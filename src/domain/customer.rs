//! Storefront customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::CustomerId;
use super::password::PasswordPolicy;
use super::text::{contains_ignore_case, non_blank};

/// A customer record. Customers created from the dashboard have no password;
/// customers who sign up on the storefront do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Whether this customer matches a dashboard search (lowercased needle).
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        contains_ignore_case(&self.name, needle_lower)
            || contains_ignore_case(&self.email, needle_lower)
            || self
                .phone
                .as_deref()
                .is_some_and(|p| contains_ignore_case(p, needle_lower))
    }
}

/// Customer form used by the dashboard for both create and edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerDraft {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerDraft {
    fn required(&self) -> Result<(String, String), DomainError> {
        match (non_blank(self.email.clone()), non_blank(self.name.clone())) {
            (Some(email), Some(name)) => Ok((email, name)),
            _ => Err(DomainError::Required("Name and email are required")),
        }
    }

    /// Build a new customer without a password.
    ///
    /// # Errors
    /// Returns `Name and email are required` when either is blank.
    pub fn into_customer(self, now: DateTime<Utc>) -> Result<Customer, DomainError> {
        let (email, name) = self.required()?;
        Ok(Customer {
            id: CustomerId::new(),
            email,
            name,
            phone: non_blank(self.phone),
            address: non_blank(self.address),
            password_hash: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the editable fields of `customer`.
    ///
    /// # Errors
    /// Returns `Name and email are required` when either is blank.
    pub fn apply(self, customer: &mut Customer, now: DateTime<Utc>) -> Result<(), DomainError> {
        let (email, name) = self.required()?;
        customer.email = email;
        customer.name = name;
        customer.phone = non_blank(self.phone);
        customer.address = non_blank(self.address);
        customer.updated_at = now;
        Ok(())
    }
}

/// Storefront sign-up form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// A sign-up form that passed validation.
#[derive(Debug, Clone)]
pub struct ValidSignup {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Validate in the order the storefront reports problems: presence,
    /// confirmation, then strength.
    ///
    /// # Errors
    /// Returns the first failing rule.
    pub fn validate(self, policy: &PasswordPolicy) -> Result<ValidSignup, DomainError> {
        let (Some(full_name), Some(email), Some(password)) = (
            non_blank(self.full_name),
            non_blank(self.email),
            self.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(DomainError::Required("Please fill in all required fields"));
        };

        if self.confirm_password.as_deref() != Some(password.as_str()) {
            return Err(DomainError::PasswordMismatch);
        }
        policy.check(&password)?;

        Ok(ValidSignup {
            full_name,
            email: email.to_lowercase(),
            password,
        })
    }
}

impl ValidSignup {
    /// Build the customer row once the password has been hashed.
    #[must_use]
    pub fn into_customer(self, password_hash: String, now: DateTime<Utc>) -> Customer {
        Customer {
            id: CustomerId::new(),
            email: self.email,
            name: self.full_name,
            phone: None,
            address: None,
            password_hash: Some(password_hash),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            full_name: Some("Ripley".into()),
            email: Some("Ripley@Nostromo.test".into()),
            password: Some(password.into()),
            confirm_password: Some(confirm.into()),
        }
    }

    #[test]
    fn draft_requires_name_and_email() {
        let draft = CustomerDraft {
            name: Some("Dallas".into()),
            ..Default::default()
        };
        assert_eq!(
            draft.into_customer(Utc::now()).unwrap_err(),
            DomainError::Required("Name and email are required")
        );
    }

    #[test]
    fn draft_blank_optional_fields_become_none() {
        let customer = CustomerDraft {
            email: Some("kane@nostromo.test".into()),
            name: Some("Kane".into()),
            phone: Some(String::new()),
            address: Some("  Deck 2 ".into()),
        }
        .into_customer(Utc::now())
        .unwrap();

        assert!(customer.phone.is_none());
        assert_eq!(customer.address.as_deref(), Some("Deck 2"));
        assert!(customer.password_hash.is_none());
    }

    #[test]
    fn signup_rejects_mismatched_confirmation_before_strength() {
        let err = signup("short", "other").validate(&PasswordPolicy::default());
        assert_eq!(err.unwrap_err(), DomainError::PasswordMismatch);
    }

    #[test]
    fn signup_rejects_weak_password() {
        let err = signup("alllowercase1", "alllowercase1").validate(&PasswordPolicy::default());
        assert_eq!(err.unwrap_err(), DomainError::WeakPassword);
    }

    #[test]
    fn signup_normalizes_email() {
        let valid = signup("Xenomorph1", "Xenomorph1")
            .validate(&PasswordPolicy::default())
            .unwrap();
        assert_eq!(valid.email, "ripley@nostromo.test");
    }

    #[test]
    fn search_matches_name_email_or_phone() {
        let mut customer = CustomerDraft {
            email: Some("ash@nostromo.test".into()),
            name: Some("Ash".into()),
            phone: Some("555-0100".into()),
            address: None,
        }
        .into_customer(Utc::now())
        .unwrap();

        assert!(customer.matches("ash"));
        assert!(customer.matches("0100"));
        customer.phone = None;
        assert!(!customer.matches("0100"));
    }
}
