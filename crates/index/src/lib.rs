//! Shared table index infrastructure.
//!
//! This crate provides the pieces every static lookup table needs:
//! - [`TableRecord`]: Trait exposing the lookup key of a record
//! - [`IndexBuilder`]: Builds a [`RecordIndex`] over an ordered slice
//! - [`DuplicatePolicy`]: What happens when two records share a key
//! - [`Collision`]: Diagnostic for a record that lost its key
//!
//! Records are stored in the order they were authored. The index maps each
//! key to the position of its winning record, so shadowed records remain
//! visible through [`RecordIndex::items`] but are never returned by
//! [`RecordIndex::get`].

use std::fmt::Debug;
use std::hash::Hash;

/// Centralized index construction and lookup.
pub mod index;

pub use index::{Collision, DuplicatePolicy, IndexBuilder, InsertAction, RecordIndex};

/// Trait for accessing the lookup key of a table record.
///
/// Only the key participates in indexing. Everything else on the record is
/// payload and is never consulted by the index.
pub trait TableRecord {
	/// Key type used for lookups.
	type Key: Copy + Eq + Hash + Debug;

	/// Returns the lookup key for this record.
	fn key(&self) -> Self::Key;
}
