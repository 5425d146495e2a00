//! Dashboard customer records.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::account::EMAIL_TAKEN;
use crate::domain::customer::{Customer, CustomerDraft};
use crate::domain::id::CustomerId;
use crate::domain::text::non_blank;
use crate::error::{Error, Result};
use crate::port::outbound::store::CustomerStore;

pub struct CustomerService {
    customers: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }

    /// Customers newest first, optionally narrowed by a name, email or
    /// phone search.
    pub async fn list(&self, search: Option<String>) -> Result<Vec<Customer>> {
        let customers = self.customers.list().await?;
        Ok(match non_blank(search) {
            Some(needle) => {
                let needle = needle.to_lowercase();
                customers.into_iter().filter(|c| c.matches(&needle)).collect()
            }
            None => customers,
        })
    }

    pub async fn create(&self, draft: CustomerDraft) -> Result<Customer> {
        let customer = draft.into_customer(Utc::now())?;
        if self.customers.find_by_email(&customer.email).await?.is_some() {
            return Err(Error::Conflict(EMAIL_TAKEN.into()));
        }
        self.customers.insert(&customer).await?;
        info!(customer_id = %customer.id, "customer created");
        Ok(customer)
    }

    pub async fn update(&self, id: &CustomerId, draft: CustomerDraft) -> Result<Customer> {
        let mut customer = self
            .customers
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("customer", id))?;
        draft.apply(&mut customer, Utc::now())?;

        if let Some(other) = self.customers.find_by_email(&customer.email).await? {
            if other.id != customer.id {
                return Err(Error::Conflict(EMAIL_TAKEN.into()));
            }
        }
        self.customers.update(&customer).await?;
        Ok(customer)
    }

    /// Delete a customer. Their orders stay, detached from the account.
    pub async fn delete(&self, id: &CustomerId) -> Result<()> {
        if !self.customers.delete(id).await? {
            return Err(Error::not_found("customer", id));
        }
        info!(customer_id = %id, "customer deleted");
        Ok(())
    }
}
