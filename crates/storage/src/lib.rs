//! Storage abstraction and implementations for PrepTrack.
//!
//! This crate provides a trait-based storage interface with JSON-file and
//! in-memory implementations.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory;

pub use trait_::{ProgressStore, Result, StorageError};
pub use json_storage::JsonStorage;
pub use memory::MemoryStorage;
