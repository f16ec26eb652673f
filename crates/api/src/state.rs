use std::sync::Arc;

use notekeeper_core::cache::EntityCache;
use notekeeper_db::models::category::Category;
use notekeeper_db::models::note::NoteDetail;
use notekeeper_db::models::tag::Tag;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: notekeeper_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cached categories by id and the full category listing.
    pub category_cache: Arc<EntityCache<Category>>,
    /// Cached tags by id and the full tag listing.
    pub tag_cache: Arc<EntityCache<Tag>>,
    /// Cached notes (with associations) by id and the full note listing.
    pub note_cache: Arc<EntityCache<NoteDetail>>,
}

impl AppState {
    /// Build state with empty caches, enabled according to `config.cache_enabled`.
    pub fn new(pool: notekeeper_db::DbPool, config: ServerConfig) -> Self {
        let enabled = config.cache_enabled;
        Self {
            pool,
            config: Arc::new(config),
            category_cache: Arc::new(EntityCache::new("categories", enabled)),
            tag_cache: Arc::new(EntityCache::new("tags", enabled)),
            note_cache: Arc::new(EntityCache::new("notes", enabled)),
        }
    }
}
