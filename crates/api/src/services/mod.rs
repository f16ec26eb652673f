//! Service layer between handlers and repositories.
//!
//! Services validate request DTOs, resolve defaults, translate absent rows
//! into [`CoreError::NotFound`] and keep the entity caches in step with
//! every write.

pub mod association;
pub mod category;
pub mod note;
pub mod tag;

pub use association::AssociationService;
pub use category::CategoryService;
pub use note::NoteService;
pub use tag::TagService;

use notekeeper_core::error::CoreError;
use validator::Validate;

/// Run derived `validator` rules, mapping failures to [`CoreError::Validation`].
pub fn validate<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
