//! In-memory backend for the Reel video catalog.
//!
//! All state lives behind a single [`std::sync::RwLock`]; every store
//! operation takes the lock once and finishes its read-modify-write before
//! releasing it. Nothing survives a restart.

mod seed;
mod store;
mod table;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;
pub use table::{Record, Table};
