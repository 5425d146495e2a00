//! SQLite customer store.

use async_trait::async_trait;
use diesel::prelude::*;

use super::database::connection::{checkout, DbPool};
use super::database::model::CustomerRow;
use super::database::schema::customers;
use super::database::value::{count, database_error};
use crate::domain::customer::Customer;
use crate::domain::id::CustomerId;
use crate::error::Result;
use crate::port::outbound::store::CustomerStore;

/// SQLite-backed customer store. Emails compare case-insensitively.
pub struct SqliteCustomerStore {
    pool: DbPool,
}

impl SqliteCustomerStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for SqliteCustomerStore {
    async fn list(&self) -> Result<Vec<Customer>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<CustomerRow> = customers::table
            .order(customers::created_at.desc())
            .select(CustomerRow::as_select())
            .load(&mut conn)
            .map_err(database_error)?;
        rows.into_iter().map(Customer::try_from).collect()
    }

    async fn get(&self, id: &CustomerId) -> Result<Option<Customer>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<CustomerRow> = customers::table
            .find(id.as_str())
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(Customer::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<CustomerRow> = customers::table
            .filter(customers::email.eq(email.trim()))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(Customer::try_from).transpose()
    }

    async fn insert(&self, customer: &Customer) -> Result<()> {
        let mut conn = checkout(&self.pool)?;
        diesel::insert_into(customers::table)
            .values(CustomerRow::from(customer))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<bool> {
        let row = CustomerRow::from(customer);
        let mut conn = checkout(&self.pool)?;
        let updated = diesel::update(customers::table.find(customer.id.as_str()))
            .set(&row)
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &CustomerId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(customers::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(deleted > 0)
    }

    async fn count(&self) -> Result<u64> {
        let mut conn = checkout(&self.pool)?;
        let total: i64 = customers::table
            .count()
            .get_result(&mut conn)
            .map_err(database_error)?;
        Ok(count(total))
    }
}
