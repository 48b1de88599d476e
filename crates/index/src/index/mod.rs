//! Record index construction.
//!
//! Provides [`IndexBuilder`] and [`RecordIndex`]. Each table uses the same
//! pattern:
//!
//! ```rust,ignore
//! static STATUSES: LazyLock<RecordIndex<'static, StatusRecord>> = LazyLock::new(|| {
//!     IndexBuilder::new("ntstatus", STATUS_TABLE)
//!         .duplicate_policy(DuplicatePolicy::FirstWins)
//!         .build()
//! });
//! ```

mod build;
mod collision;

pub use build::IndexBuilder;
pub use collision::{Collision, DuplicatePolicy, InsertAction};
use rustc_hash::FxHashMap;

use crate::TableRecord;

#[cfg(test)]
mod tests;

/// Indexed view over an ordered slice of records with O(1) lookup.
///
/// Built via [`IndexBuilder`], provides:
/// - O(1) lookup by key via [`get`](Self::get)
/// - Authored-order iteration via [`items`](Self::items), shadowed records included
/// - Collision diagnostics via [`collisions`](Self::collisions)
pub struct RecordIndex<'a, T: TableRecord> {
	pub(crate) label: &'static str,
	pub(crate) items: &'a [T],
	pub(crate) by_key: FxHashMap<T::Key, usize>,
	pub(crate) collisions: Vec<Collision<T::Key>>,
}

impl<'a, T: TableRecord> RecordIndex<'a, T> {
	/// Looks up the winning record for a key.
	#[inline]
	pub fn get(&self, key: T::Key) -> Option<&'a T> {
		self.position(key).map(|pos| &self.items[pos])
	}

	/// Returns the table position of the winning record for a key.
	#[inline]
	pub fn position(&self, key: T::Key) -> Option<usize> {
		self.by_key.get(&key).copied()
	}

	/// Returns true if some record claims this key.
	#[inline]
	pub fn contains(&self, key: T::Key) -> bool {
		self.by_key.contains_key(&key)
	}

	/// Returns all records in authored order, including shadowed ones.
	#[inline]
	pub fn items(&self) -> &'a [T] {
		self.items
	}

	/// Returns an iterator over all records in authored order.
	#[inline]
	pub fn iter(&self) -> std::slice::Iter<'a, T> {
		self.items.iter()
	}

	/// Returns the number of records (not keys).
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the index holds no records.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the number of distinct keys.
	#[inline]
	pub fn key_count(&self) -> usize {
		self.by_key.len()
	}

	/// Returns every duplicate key resolved by the build policy, in the
	/// order they were encountered.
	#[inline]
	pub fn collisions(&self) -> &[Collision<T::Key>] {
		&self.collisions
	}

	/// Returns the label this index was built with.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}
}

impl<T: TableRecord> std::fmt::Debug for RecordIndex<'_, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RecordIndex")
			.field("label", &self.label)
			.field("records", &self.items.len())
			.field("keys", &self.by_key.len())
			.field("collisions", &self.collisions.len())
			.finish()
	}
}
