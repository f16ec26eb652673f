use notekeeper_core::error::CoreError;
use notekeeper_core::types::DbId;
use notekeeper_db::models::tag::{CreateTag, Tag, UpdateTag};
use notekeeper_db::repositories::TagRepo;

use crate::error::AppResult;
use crate::services::validate;
use crate::state::AppState;

/// Tag operations with cache maintenance. Writes clear the tag and note caches.
pub struct TagService<'a> {
    state: &'a AppState,
}

impl<'a> TagService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn create(&self, input: &CreateTag) -> AppResult<Tag> {
        validate(input)?;

        let tag = TagRepo::create(&self.state.pool, input)
            .await?
            .ok_or_else(|| CoreError::Conflict(format!("Tag '{}' already exists", input.name)))?;

        self.invalidate().await;
        Ok(tag)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Tag> {
        if let Some(tag) = self.state.tag_cache.get(id).await {
            tracing::debug!(cache = self.state.tag_cache.name(), id, "Cache hit");
            return Ok(tag);
        }

        let tag = TagRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Tag", id })?;

        self.state.tag_cache.put(id, tag.clone()).await;
        Ok(tag)
    }

    pub async fn list(&self) -> AppResult<Vec<Tag>> {
        if let Some(tags) = self.state.tag_cache.get_all().await {
            tracing::debug!(cache = self.state.tag_cache.name(), "Cache hit (all)");
            return Ok(tags);
        }

        let tags = TagRepo::list(&self.state.pool).await?;
        self.state.tag_cache.put_all(tags.clone()).await;
        Ok(tags)
    }

    /// Rename a tag and optionally recolour it; an absent colour is kept.
    pub async fn update(&self, id: DbId, input: &UpdateTag) -> AppResult<Tag> {
        validate(input)?;

        let tag = TagRepo::update(&self.state.pool, id, input)
            .await?
            .ok_or(CoreError::NotFound { entity: "Tag", id })?;

        self.invalidate().await;
        Ok(tag)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        let deleted = TagRepo::delete(&self.state.pool, id).await?;
        if deleted {
            self.invalidate().await;
        }
        Ok(deleted)
    }

    async fn invalidate(&self) {
        self.state.tag_cache.invalidate().await;
        self.state.note_cache.invalidate().await;
    }
}
