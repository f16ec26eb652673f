//! Explicit read-through cache for entity lookups.
//!
//! Each entity type gets its own [`EntityCache`] holding single records keyed
//! by id plus the full listing under [`CacheKey::All`]. Writers never patch
//! cached values; every write to an entity type calls
//! [`EntityCache::invalidate`], which drops all entries for that type.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::types::DbId;

/// Key under which a cached value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// A single entity looked up by id.
    Id(DbId),
    /// The unfiltered listing of every entity of the type.
    All,
}

enum Entry<T> {
    One(T),
    Many(Vec<T>),
}

/// Cache for one entity type.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. A disabled cache accepts every call and
/// never returns a hit.
pub struct EntityCache<T> {
    name: &'static str,
    enabled: bool,
    entries: RwLock<HashMap<CacheKey, Entry<T>>>,
}

impl<T: Clone> EntityCache<T> {
    /// Create an empty cache. `name` is used in log events only.
    pub fn new(name: &'static str, enabled: bool) -> Self {
        Self {
            name,
            enabled,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cache name as given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cached entity for `id`, if present.
    pub async fn get(&self, id: DbId) -> Option<T> {
        if !self.enabled {
            return None;
        }
        match self.entries.read().await.get(&CacheKey::Id(id)) {
            Some(Entry::One(value)) => Some(value.clone()),
            _ => None,
        }
    }

    /// Cached full listing, if present.
    pub async fn get_all(&self) -> Option<Vec<T>> {
        if !self.enabled {
            return None;
        }
        match self.entries.read().await.get(&CacheKey::All) {
            Some(Entry::Many(values)) => Some(values.clone()),
            _ => None,
        }
    }

    /// Store the entity for `id`.
    pub async fn put(&self, id: DbId, value: T) {
        if self.enabled {
            self.entries
                .write()
                .await
                .insert(CacheKey::Id(id), Entry::One(value));
        }
    }

    /// Store the full listing.
    pub async fn put_all(&self, values: Vec<T>) {
        if self.enabled {
            self.entries
                .write()
                .await
                .insert(CacheKey::All, Entry::Many(values));
        }
    }

    /// Drop every entry of this entity type.
    pub async fn invalidate(&self) {
        if self.enabled {
            self.entries.write().await.clear();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
