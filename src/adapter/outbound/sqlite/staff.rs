//! SQLite stores for roles and dashboard accounts.

use async_trait::async_trait;
use diesel::prelude::*;

use super::database::connection::{checkout, DbPool};
use super::database::model::{AdminUserRow, RoleRow};
use super::database::schema::{admin_users, roles};
use super::database::value::database_error;
use crate::domain::id::{AdminUserId, RoleId};
use crate::domain::staff::{AdminUser, AdminUserListing, Role};
use crate::error::Result;
use crate::port::outbound::store::{AdminUserStore, RoleStore};

/// SQLite-backed role store.
pub struct SqliteRoleStore {
    pool: DbPool,
}

impl SqliteRoleStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for SqliteRoleStore {
    async fn list(&self) -> Result<Vec<Role>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<RoleRow> = roles::table
            .order(roles::name.asc())
            .select(RoleRow::as_select())
            .load(&mut conn)
            .map_err(database_error)?;
        rows.into_iter().map(Role::try_from).collect()
    }

    async fn get(&self, id: &RoleId) -> Result<Option<Role>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<RoleRow> = roles::table
            .find(id.as_str())
            .select(RoleRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(Role::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<RoleRow> = roles::table
            .filter(roles::name.eq(name))
            .select(RoleRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(Role::try_from).transpose()
    }

    async fn insert(&self, role: &Role) -> Result<()> {
        let mut conn = checkout(&self.pool)?;
        diesel::insert_into(roles::table)
            .values(RoleRow::from(role))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(())
    }
}

/// SQLite-backed admin account store.
pub struct SqliteAdminUserStore {
    pool: DbPool,
}

impl SqliteAdminUserStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminUserStore for SqliteAdminUserStore {
    async fn list(&self) -> Result<Vec<AdminUserListing>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<(AdminUserRow, Option<RoleRow>)> = admin_users::table
            .left_join(roles::table)
            .order(admin_users::created_at.desc())
            .select((AdminUserRow::as_select(), Option::<RoleRow>::as_select()))
            .load(&mut conn)
            .map_err(database_error)?;

        rows.into_iter()
            .map(|(user, role)| {
                Ok(AdminUserListing {
                    user: AdminUser::try_from(user)?,
                    role: role.map(Role::try_from).transpose()?,
                })
            })
            .collect()
    }

    async fn get(&self, id: &AdminUserId) -> Result<Option<AdminUser>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<AdminUserRow> = admin_users::table
            .find(id.as_str())
            .select(AdminUserRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(AdminUser::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<AdminUserRow> = admin_users::table
            .filter(admin_users::email.eq(email.trim()))
            .select(AdminUserRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(AdminUser::try_from).transpose()
    }

    async fn insert(&self, user: &AdminUser) -> Result<()> {
        let mut conn = checkout(&self.pool)?;
        diesel::insert_into(admin_users::table)
            .values(AdminUserRow::from(user))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(())
    }

    async fn update(&self, user: &AdminUser) -> Result<bool> {
        let row = AdminUserRow::from(user);
        let mut conn = checkout(&self.pool)?;
        let updated = diesel::update(admin_users::table.find(user.id.as_str()))
            .set(&row)
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &AdminUserId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(admin_users::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(deleted > 0)
    }
}
