//! Note operations: date defaulting, validation and cache maintenance.

use notekeeper_core::error::CoreError;
use notekeeper_core::types::{today, Date, DbId};
use notekeeper_db::models::note::{CreateNote, NewNote, NoteChanges, NoteDetail, UpdateNote};
use notekeeper_db::repositories::NoteRepo;

use crate::error::AppResult;
use crate::services::validate;
use crate::state::AppState;

pub struct NoteService<'a> {
    state: &'a AppState,
}

impl<'a> NoteService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Store a note, resolving or creating its categories and tags by name.
    ///
    /// Clears the category and tag caches as well, since resolve-or-create
    /// may have inserted new rows.
    pub async fn create(&self, input: &CreateNote) -> AppResult<NoteDetail> {
        validate(input)?;

        let record = new_note_record(input, today());
        let note =
            NoteRepo::create(&self.state.pool, &record, &input.categories, &input.tags).await?;

        self.state.note_cache.invalidate().await;
        self.state.category_cache.invalidate().await;
        self.state.tag_cache.invalidate().await;
        Ok(note)
    }

    pub async fn get(&self, id: DbId) -> AppResult<NoteDetail> {
        if let Some(note) = self.state.note_cache.get(id).await {
            tracing::debug!(cache = self.state.note_cache.name(), id, "Cache hit");
            return Ok(note);
        }

        let note = NoteRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Note", id })?;

        self.state.note_cache.put(id, note.clone()).await;
        Ok(note)
    }

    pub async fn list(&self) -> AppResult<Vec<NoteDetail>> {
        if let Some(notes) = self.state.note_cache.get_all().await {
            tracing::debug!(cache = self.state.note_cache.name(), "Cache hit (all)");
            return Ok(notes);
        }

        let notes = NoteRepo::list(&self.state.pool).await?;
        self.state.note_cache.put_all(notes.clone()).await;
        Ok(notes)
    }

    /// Overwrite the note's own fields. Associations are untouched.
    pub async fn update(&self, id: DbId, input: &UpdateNote) -> AppResult<NoteDetail> {
        validate(input)?;

        let changes = note_changes(input, today());
        let note = NoteRepo::update(&self.state.pool, id, &changes)
            .await?
            .ok_or(CoreError::NotFound { entity: "Note", id })?;

        self.state.note_cache.invalidate().await;
        Ok(note)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        let deleted = NoteRepo::delete(&self.state.pool, id).await?;
        if deleted {
            self.state.note_cache.invalidate().await;
        }
        Ok(deleted)
    }
}

/// Resolve the stored values for a new note.
///
/// Without a creation date both dates are `today`; without an update date
/// the update date equals the creation date. A missing done flag is `false`.
pub fn new_note_record(input: &CreateNote, today: Date) -> NewNote {
    let (date_of_creation, date_of_update) = match input.date_of_creation {
        None => (today, today),
        Some(created) => (created, input.date_of_update.unwrap_or(created)),
    };

    NewNote {
        name: input.name.clone(),
        date_of_creation,
        date_of_update,
        is_done: input.is_done.unwrap_or(false),
    }
}

/// Resolve the written values for a note update. A missing update date is
/// `today`; other missing fields keep what is stored.
pub fn note_changes(input: &UpdateNote, today: Date) -> NoteChanges {
    NoteChanges {
        name: input.name.clone(),
        date_of_creation: input.date_of_creation,
        date_of_update: input.date_of_update.unwrap_or(today),
        is_done: input.is_done,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
