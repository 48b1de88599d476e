use std::sync::LazyLock;

use nterr_index::{Collision, DuplicatePolicy, IndexBuilder, RecordIndex};
use tracing::trace;

use crate::code::StatusCode;
use crate::error::StatusError;
use crate::record::{ResolvedStatus, StatusRecord};
use crate::table::STATUS_TABLE;

#[cfg(test)]
mod tests;

/// Process-wide registry over the built-in table.
static GLOBAL: LazyLock<StatusRegistry<'static>> =
	LazyLock::new(|| StatusRegistry::from_records("ntstatus", STATUS_TABLE));

/// Read-only mapping from status values to their translation.
///
/// Records keep their authored order. When several records share a status,
/// the earliest one answers every lookup and the rest are reported by
/// [`shadowed`](Self::shadowed).
#[derive(Debug)]
pub struct StatusRegistry<'a> {
	index: RecordIndex<'a, StatusRecord>,
}

impl StatusRegistry<'static> {
	/// Returns the registry over the built-in table.
	///
	/// The index is built on first call and shared for the rest of the
	/// process.
	pub fn global() -> &'static StatusRegistry<'static> {
		&GLOBAL
	}
}

impl<'a> StatusRegistry<'a> {
	/// Builds a registry over an ordered record slice.
	///
	/// Duplicate statuses never fail the build: the first record wins.
	pub fn from_records(label: &'static str, records: &'a [StatusRecord]) -> Self {
		let index = IndexBuilder::new(label, records)
			.duplicate_policy(DuplicatePolicy::FirstWins)
			.build();
		Self { index }
	}

	/// Looks up the translation of a status.
	#[inline]
	pub fn resolve(&self, status: u32) -> Option<ResolvedStatus> {
		self.index.get(status).map(StatusRecord::resolved)
	}

	/// Looks up the translation of a status, reporting a miss as an error.
	pub fn require(&self, status: u32) -> Result<ResolvedStatus, StatusError> {
		self.resolve(status).ok_or_else(|| {
			trace!(table = self.index.label(), status = %StatusCode(status), "status not in table");
			StatusError::NotFound(StatusCode(status))
		})
	}

	/// Returns the authoritative record for a status.
	#[inline]
	pub fn record(&self, status: u32) -> Option<&'a StatusRecord> {
		self.index.get(status)
	}

	/// Returns true if some record claims this status.
	#[inline]
	pub fn contains(&self, status: u32) -> bool {
		self.index.contains(status)
	}

	/// Returns every record in authored order, shadowed ones included.
	#[inline]
	pub fn records(&self) -> &'a [StatusRecord] {
		self.index.items()
	}

	/// Returns the records that answer lookups, in authored order.
	pub fn authoritative(&self) -> impl Iterator<Item = &'a StatusRecord> + '_ {
		self.index
			.items()
			.iter()
			.enumerate()
			.filter(|(pos, rec)| self.index.position(rec.status) == Some(*pos))
			.map(|(_, rec)| rec)
	}

	/// Returns the number of records, shadowed ones included.
	#[inline]
	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// Returns true if the registry holds no records.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	/// Returns the number of distinct statuses.
	#[inline]
	pub fn key_count(&self) -> usize {
		self.index.key_count()
	}

	/// Returns the duplicates that lost to an earlier record.
	#[inline]
	pub fn shadowed(&self) -> &[Collision<u32>] {
		self.index.collisions()
	}
}
