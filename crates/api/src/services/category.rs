use notekeeper_core::error::CoreError;
use notekeeper_core::types::DbId;
use notekeeper_db::models::category::{Category, CreateCategory, UpdateCategory};
use notekeeper_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::services::validate;
use crate::state::AppState;

/// Category operations with cache maintenance.
///
/// Every write clears the category cache and the note cache, since cached
/// notes embed category names.
pub struct CategoryService<'a> {
    state: &'a AppState,
}

impl<'a> CategoryService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Insert a category. A taken name is a [`CoreError::Conflict`].
    pub async fn create(&self, input: &CreateCategory) -> AppResult<Category> {
        validate(input)?;

        let category = CategoryRepo::create(&self.state.pool, input)
            .await?
            .ok_or_else(|| {
                CoreError::Conflict(format!("Category '{}' already exists", input.name))
            })?;

        self.invalidate().await;
        Ok(category)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Category> {
        if let Some(category) = self.state.category_cache.get(id).await {
            tracing::debug!(cache = self.state.category_cache.name(), id, "Cache hit");
            return Ok(category);
        }

        let category = CategoryRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?;

        self.state.category_cache.put(id, category.clone()).await;
        Ok(category)
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        if let Some(categories) = self.state.category_cache.get_all().await {
            tracing::debug!(cache = self.state.category_cache.name(), "Cache hit (all)");
            return Ok(categories);
        }

        let categories = CategoryRepo::list(&self.state.pool).await?;
        self.state.category_cache.put_all(categories.clone()).await;
        Ok(categories)
    }

    /// Rename a category. Renaming onto an existing name surfaces the unique
    /// violation as a conflict.
    pub async fn update(&self, id: DbId, input: &UpdateCategory) -> AppResult<Category> {
        validate(input)?;

        let category = CategoryRepo::update(&self.state.pool, id, input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?;

        self.invalidate().await;
        Ok(category)
    }

    /// Delete a category; its note links cascade. Returns whether a row was removed.
    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        let deleted = CategoryRepo::delete(&self.state.pool, id).await?;
        if deleted {
            self.invalidate().await;
        }
        Ok(deleted)
    }

    async fn invalidate(&self) {
        self.state.category_cache.invalidate().await;
        self.state.note_cache.invalidate().await;
    }
}
