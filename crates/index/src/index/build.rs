use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::RecordIndex;
use super::collision::{Collision, DuplicatePolicy, InsertAction};
use crate::TableRecord;

/// Builder for constructing a [`RecordIndex`].
///
/// Walks the records in authored order, resolves duplicate keys according
/// to the configured policy, and keeps a [`Collision`] for every duplicate.
///
/// # Example
///
/// ```rust,ignore
/// let index = IndexBuilder::new("ntstatus", STATUS_TABLE)
///     .duplicate_policy(DuplicatePolicy::FirstWins)
///     .build();
/// ```
pub struct IndexBuilder<'a, T: TableRecord> {
	label: &'static str,
	items: &'a [T],
	policy: DuplicatePolicy,
}

impl<'a, T: TableRecord> IndexBuilder<'a, T> {
	/// Creates a new builder over `items` with the given label for
	/// diagnostics.
	///
	/// The policy defaults to [`DuplicatePolicy::for_build()`].
	pub fn new(label: &'static str, items: &'a [T]) -> Self {
		Self {
			label,
			items,
			policy: DuplicatePolicy::for_build(),
		}
	}

	/// Sets the duplicate key handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Builds the index, resolving duplicates according to policy.
	///
	/// # Panics
	///
	/// Panics if duplicate keys are found and policy is [`DuplicatePolicy::Panic`].
	pub fn build(self) -> RecordIndex<'a, T> {
		let mut by_key = FxHashMap::with_capacity_and_hasher(self.items.len(), Default::default());
		let mut collisions = Vec::new();

		for (pos, item) in self.items.iter().enumerate() {
			let key = item.key();
			if let Some(c) = self.insert_key(&mut by_key, key, pos) {
				trace!(
					table = self.label,
					key = ?c.key,
					existing = c.existing,
					new = c.new,
					action = %c.action,
					"duplicate table key"
				);
				collisions.push(c);
			}
		}

		debug!(
			table = self.label,
			records = self.items.len(),
			keys = by_key.len(),
			shadowed = collisions.len(),
			"built record index"
		);

		RecordIndex {
			label: self.label,
			items: self.items,
			by_key,
			collisions,
		}
	}

	fn insert_key(
		&self,
		map: &mut FxHashMap<T::Key, usize>,
		key: T::Key,
		pos: usize,
	) -> Option<Collision<T::Key>> {
		let mut slot = match map.entry(key) {
			Entry::Vacant(slot) => {
				slot.insert(pos);
				return None;
			}
			Entry::Occupied(slot) => slot,
		};
		let existing = *slot.get();

		let action = match self.policy {
			DuplicatePolicy::Panic => panic!(
				"duplicate table key in {}: key={:?} existing_pos={} new_pos={}",
				self.label, key, existing, pos
			),
			DuplicatePolicy::FirstWins => InsertAction::KeptExisting,
			DuplicatePolicy::LastWins => {
				slot.insert(pos);
				InsertAction::ReplacedExisting
			}
		};

		Some(Collision {
			key,
			existing,
			new: pos,
			winner: if action == InsertAction::ReplacedExisting {
				pos
			} else {
				existing
			},
			action,
			table: self.label,
		})
	}
}
