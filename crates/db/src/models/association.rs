//! Note association kinds and outcomes.

use notekeeper_core::types::DbId;

/// Which join table an association operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    /// `note_category` rows pointing at `categories`.
    Category,
    /// `note_tag` rows pointing at `tags`.
    Tag,
}

impl AssociationKind {
    /// Join table name.
    pub fn join_table(self) -> &'static str {
        match self {
            AssociationKind::Category => "note_category",
            AssociationKind::Tag => "note_tag",
        }
    }

    /// Table holding the association targets.
    pub fn target_table(self) -> &'static str {
        match self {
            AssociationKind::Category => "categories",
            AssociationKind::Tag => "tags",
        }
    }

    /// Join-table column referencing the target table.
    pub fn target_column(self) -> &'static str {
        match self {
            AssociationKind::Category => "category_id",
            AssociationKind::Tag => "tag_id",
        }
    }

    /// Entity name of the target, used in not-found errors.
    pub fn target_entity(self) -> &'static str {
        match self {
            AssociationKind::Category => "Category",
            AssociationKind::Tag => "Tag",
        }
    }

    /// Entity name of the association itself, used in not-found errors.
    pub fn link_entity(self) -> &'static str {
        match self {
            AssociationKind::Category => "NoteCategory",
            AssociationKind::Tag => "NoteTag",
        }
    }
}

/// Result of an association write. Anything other than `Applied` means the
/// transaction was rolled back without changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationOutcome {
    /// The association change was written.
    Applied,
    /// No note with the given id.
    NoteMissing,
    /// No category / tag with the contained id.
    TargetMissing(DbId),
    /// The note is not linked to the contained category / tag id.
    LinkMissing(DbId),
}
