//! SQLite stores for categories and menu items.

use async_trait::async_trait;
use diesel::prelude::*;

use super::database::connection::{checkout, DbPool};
use super::database::model::{CategoryRow, MenuItemRow};
use super::database::schema::{categories, menu_items};
use super::database::value::{count, database_error};
use crate::domain::category::Category;
use crate::domain::id::{CategoryId, MenuItemId};
use crate::domain::menu::{MenuItem, MenuItemListing};
use crate::error::Result;
use crate::port::outbound::store::{CategoryStore, MenuItemStore};

/// SQLite-backed category store.
pub struct SqliteCategoryStore {
    pool: DbPool,
}

impl SqliteCategoryStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for SqliteCategoryStore {
    async fn list(&self) -> Result<Vec<Category>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<CategoryRow> = categories::table
            .order((categories::sort_order.asc(), categories::name.asc()))
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .map_err(database_error)?;
        rows.into_iter().map(Category::try_from).collect()
    }

    async fn get(&self, id: &CategoryId) -> Result<Option<Category>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<CategoryRow> = categories::table
            .find(id.as_str())
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(Category::try_from).transpose()
    }

    async fn insert(&self, category: &Category) -> Result<()> {
        let mut conn = checkout(&self.pool)?;
        diesel::insert_into(categories::table)
            .values(CategoryRow::from(category))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<bool> {
        let row = CategoryRow::from(category);
        let mut conn = checkout(&self.pool)?;
        let updated = diesel::update(categories::table.find(category.id.as_str()))
            .set(&row)
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(categories::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(deleted > 0)
    }
}

/// SQLite-backed menu item store.
pub struct SqliteMenuItemStore {
    pool: DbPool,
}

impl SqliteMenuItemStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemStore for SqliteMenuItemStore {
    async fn list(&self) -> Result<Vec<MenuItemListing>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<(MenuItemRow, Option<CategoryRow>)> = menu_items::table
            .left_join(categories::table)
            .order((menu_items::created_at.desc(), menu_items::name.asc()))
            .select((MenuItemRow::as_select(), Option::<CategoryRow>::as_select()))
            .load(&mut conn)
            .map_err(database_error)?;

        rows.into_iter()
            .map(|(item, category)| {
                Ok(MenuItemListing {
                    item: MenuItem::try_from(item)?,
                    category: category.map(Category::try_from).transpose()?,
                })
            })
            .collect()
    }

    async fn get(&self, id: &MenuItemId) -> Result<Option<MenuItem>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<MenuItemRow> = menu_items::table
            .find(id.as_str())
            .select(MenuItemRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(MenuItem::try_from).transpose()
    }

    async fn get_many(&self, ids: &[MenuItemId]) -> Result<Vec<MenuItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let keys: Vec<&str> = ids.iter().map(MenuItemId::as_str).collect();
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<MenuItemRow> = menu_items::table
            .filter(menu_items::id.eq_any(keys))
            .select(MenuItemRow::as_select())
            .load(&mut conn)
            .map_err(database_error)?;
        rows.into_iter().map(MenuItem::try_from).collect()
    }

    async fn insert(&self, item: &MenuItem) -> Result<()> {
        let mut conn = checkout(&self.pool)?;
        diesel::insert_into(menu_items::table)
            .values(MenuItemRow::from(item))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(())
    }

    async fn update(&self, item: &MenuItem) -> Result<bool> {
        let row = MenuItemRow::from(item);
        let mut conn = checkout(&self.pool)?;
        let updated = diesel::update(menu_items::table.find(item.id.as_str()))
            .set(&row)
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &MenuItemId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(menu_items::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(deleted > 0)
    }

    async fn count(&self) -> Result<u64> {
        let mut conn = checkout(&self.pool)?;
        let total: i64 = menu_items::table
            .count()
            .get_result(&mut conn)
            .map_err(database_error)?;
        Ok(count(total))
    }
}
