//! Attach, replace and detach links between notes and categories or tags.

use notekeeper_core::error::CoreError;
use notekeeper_core::types::DbId;
use notekeeper_db::models::association::{AssociationKind, AssociationOutcome};
use notekeeper_db::models::note::NoteDetail;
use notekeeper_db::repositories::{NoteAssociationRepo, NoteRepo};

use crate::error::AppResult;
use crate::state::AppState;

pub struct AssociationService<'a> {
    state: &'a AppState,
    kind: AssociationKind,
}

impl<'a> AssociationService<'a> {
    pub fn new(state: &'a AppState, kind: AssociationKind) -> Self {
        Self { state, kind }
    }

    /// Link the note to `target_id` and return the re-read note.
    pub async fn attach(&self, note_id: DbId, target_id: DbId) -> AppResult<NoteDetail> {
        let outcome =
            NoteAssociationRepo::attach(&self.state.pool, self.kind, note_id, target_id).await?;
        self.check(outcome, note_id)?;

        self.state.note_cache.invalidate().await;
        self.reload(note_id).await
    }

    /// Move the note's link from `old_target_id` to `new_target_id` and
    /// return the re-read note.
    pub async fn replace(
        &self,
        note_id: DbId,
        old_target_id: DbId,
        new_target_id: DbId,
    ) -> AppResult<NoteDetail> {
        let outcome = NoteAssociationRepo::replace(
            &self.state.pool,
            self.kind,
            note_id,
            old_target_id,
            new_target_id,
        )
        .await?;
        self.check(outcome, note_id)?;

        self.state.note_cache.invalidate().await;
        self.reload(note_id).await
    }

    /// Remove the link. A missing link is [`CoreError::NotFound`].
    pub async fn detach(&self, note_id: DbId, target_id: DbId) -> AppResult<bool> {
        let outcome =
            NoteAssociationRepo::detach(&self.state.pool, self.kind, note_id, target_id).await?;
        self.check(outcome, note_id)?;

        self.state.note_cache.invalidate().await;
        Ok(true)
    }

    fn check(&self, outcome: AssociationOutcome, note_id: DbId) -> Result<(), CoreError> {
        match outcome {
            AssociationOutcome::Applied => Ok(()),
            AssociationOutcome::NoteMissing => Err(CoreError::NotFound {
                entity: "Note",
                id: note_id,
            }),
            AssociationOutcome::TargetMissing(id) => Err(CoreError::NotFound {
                entity: self.kind.target_entity(),
                id,
            }),
            AssociationOutcome::LinkMissing(id) => Err(CoreError::NotFound {
                entity: self.kind.link_entity(),
                id,
            }),
        }
    }

    async fn reload(&self, note_id: DbId) -> AppResult<NoteDetail> {
        let note = NoteRepo::find_by_id(&self.state.pool, note_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Note",
                id: note_id,
            })?;
        Ok(note)
    }
}
