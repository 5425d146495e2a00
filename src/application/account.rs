//! Storefront customer accounts.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::auth::Credentials;
use super::session::{Principal, SessionSigner};
use crate::domain::customer::{Customer, SignupForm};
use crate::domain::id::CustomerId;
use crate::domain::password::PasswordPolicy;
use crate::error::{AuthError, Error, Result};
use crate::port::outbound::credential::PasswordHasher;
use crate::port::outbound::store::CustomerStore;

pub(crate) const EMAIL_TAKEN: &str = "An account with this email already exists";

/// A signed-in storefront customer.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSession {
    pub token: String,
    pub customer: Customer,
}

pub struct CustomerAccountService {
    customers: Arc<dyn CustomerStore>,
    hasher: Arc<dyn PasswordHasher>,
    signer: SessionSigner,
    policy: PasswordPolicy,
}

impl CustomerAccountService {
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        hasher: Arc<dyn PasswordHasher>,
        signer: SessionSigner,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            customers,
            hasher,
            signer,
            policy,
        }
    }

    /// Register a customer and sign them in.
    ///
    /// # Errors
    /// Returns the first failing form rule, or a conflict when the email is
    /// already registered.
    pub async fn signup(&self, form: SignupForm) -> Result<CustomerSession> {
        let signup = form.validate(&self.policy)?;
        if self.customers.find_by_email(&signup.email).await?.is_some() {
            return Err(Error::Conflict(EMAIL_TAKEN.into()));
        }

        let hash = self.hasher.hash(&signup.password).await?;
        let customer = signup.into_customer(hash, Utc::now());
        self.customers.insert(&customer).await?;
        info!(customer_id = %customer.id, "customer signed up");

        self.open(customer)
    }

    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] for unknown emails, wrong
    /// passwords and customers created without a password.
    pub async fn login(&self, credentials: Credentials) -> Result<CustomerSession> {
        let (email, password) = credentials.require()?;
        let customer = self
            .customers
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let Some(hash) = customer.password_hash.as_deref() else {
            warn!(customer_id = %customer.id, "login for customer without password");
            return Err(AuthError::InvalidCredentials.into());
        };
        if !self.hasher.verify(&password, hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }
        self.open(customer)
    }

    /// Resolve a bearer token to its customer.
    ///
    /// # Errors
    /// Returns an [`AuthError`] for invalid tokens or deleted customers.
    pub async fn authenticate(&self, token: &str) -> Result<Customer> {
        let claims = self.signer.verify(token, Principal::Customer, Utc::now())?;
        self.customers
            .get(&CustomerId::from(claims.sub))
            .await?
            .ok_or_else(|| AuthError::Unauthorized.into())
    }

    fn open(&self, customer: Customer) -> Result<CustomerSession> {
        let token =
            self.signer
                .issue(Principal::Customer, customer.id.as_str(), &customer.email, Utc::now())?;
        Ok(CustomerSession { token, customer })
    }
}
