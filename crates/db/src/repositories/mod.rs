//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Multi-statement writes open their own
//! transaction; helpers that join a caller's transaction take
//! `&mut Transaction<'_, Postgres>` instead.

pub mod category_repo;
pub mod note_association_repo;
pub mod note_repo;
pub mod tag_repo;

pub use category_repo::CategoryRepo;
pub use note_association_repo::NoteAssociationRepo;
pub use note_repo::NoteRepo;
pub use tag_repo::TagRepo;
