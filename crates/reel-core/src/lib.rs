//! Domain model for the Reel video catalog.
//!
//! Entities ([`video`], [`channel`], [`comment`]), their typed ids ([`id`]),
//! the per-user reaction ledger ([`ledger`]) and the [`store::VideoStore`]
//! trait every backend implements. No HTTP or storage code lives here.

pub mod channel;
pub mod comment;
pub mod error;
pub mod id;
pub mod ledger;
pub mod store;
pub mod video;

pub use error::{Error, Result};
