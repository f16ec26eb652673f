pub mod association;
pub mod category;
pub mod note;
pub mod tag;
