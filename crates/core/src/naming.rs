//! Name rules for notes, categories and tags.
//!
//! Category and tag names double as lookup keys for resolve-or-create, so
//! they are compared exactly as stored: no trimming or case folding happens
//! here, only rejection of names that could never be meaningful.

use validator::ValidationError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note name in characters (matches `VARCHAR(100)`).
pub const MAX_NOTE_NAME_LENGTH: usize = 100;

/// Colour assigned to a tag created without one.
pub const DEFAULT_TAG_COLOUR: &str = "#000000";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note name: non-blank and at most [`MAX_NOTE_NAME_LENGTH`] characters.
pub fn validate_note_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Note name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NOTE_NAME_LENGTH {
        return Err(format!(
            "Note name exceeds maximum length of {MAX_NOTE_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a category or tag name: must contain a non-whitespace character.
pub fn validate_label_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    Ok(())
}

/// Resolve the colour for a new tag, falling back to [`DEFAULT_TAG_COLOUR`].
pub fn tag_colour_or_default(colour: Option<&str>) -> &str {
    match colour {
        Some(c) if !c.trim().is_empty() => c,
        _ => DEFAULT_TAG_COLOUR,
    }
}

/// Resolve the colour written by a tag update. `None` keeps the stored
/// colour; a blank colour becomes [`DEFAULT_TAG_COLOUR`] as on create.
pub fn tag_colour_update(colour: Option<&str>) -> Option<&str> {
    colour.map(|c| tag_colour_or_default(Some(c)))
}

// ---------------------------------------------------------------------------
// `validator` adapters
// ---------------------------------------------------------------------------

/// `#[validate(custom(function = ...))]` adapter for [`validate_note_name`].
pub fn note_name(name: &str) -> Result<(), ValidationError> {
    validate_note_name(name)
        .map_err(|msg| ValidationError::new("note_name").with_message(msg.into()))
}

/// `#[validate(custom(function = ...))]` adapter for [`validate_label_name`].
pub fn label_name(name: &str) -> Result<(), ValidationError> {
    validate_label_name(name)
        .map_err(|msg| ValidationError::new("label_name").with_message(msg.into()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
