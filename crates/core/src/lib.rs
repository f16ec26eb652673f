//! Domain building blocks shared by the storage and HTTP crates.

pub mod cache;
pub mod error;
pub mod naming;
pub mod types;
