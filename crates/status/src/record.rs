use std::borrow::Cow;

use nterr_index::TableRecord;

use crate::code::StatusCode;
use crate::format::format_message;

/// Largest value in the legacy Win32 error range.
const DOS_ERROR_MAX: u32 = 0xFFFF;

/// One authored entry of the status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusRecord {
	/// Native status value, the lookup key.
	pub status: u32,
	/// Nearest legacy Win32 error, `0` when none is distinct.
	pub dos_error: u32,
	/// Nearest POSIX `errno`, `0` when none is defined.
	pub posix_error: i32,
	/// Message template, opaque to the registry.
	pub message: &'static str,
}

impl StatusRecord {
	/// Creates a record.
	pub const fn new(status: u32, dos_error: u32, posix_error: i32, message: &'static str) -> Self {
		Self {
			status,
			dos_error,
			posix_error,
			message,
		}
	}

	/// Returns the status as a [`StatusCode`].
	#[inline]
	pub const fn code(&self) -> StatusCode {
		StatusCode(self.status)
	}

	/// Returns the lookup payload of this record.
	#[inline]
	pub const fn resolved(&self) -> ResolvedStatus {
		ResolvedStatus {
			dos_error: self.dos_error,
			posix_error: self.posix_error,
			message: self.message,
		}
	}
}

impl TableRecord for StatusRecord {
	type Key = u32;

	#[inline]
	fn key(&self) -> u32 {
		self.status
	}
}

/// Payload of a matched record.
///
/// A zero `dos_error` or `posix_error` is data, not absence: the record was
/// found and carries no distinct mapping for that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedStatus {
	/// Nearest legacy Win32 error.
	pub dos_error: u32,
	/// Nearest POSIX `errno`.
	pub posix_error: i32,
	/// Message template borrowed from the table.
	pub message: &'static str,
}

impl ResolvedStatus {
	/// Returns true unless the record has no distinct legacy mapping.
	#[inline]
	pub const fn has_dos_mapping(&self) -> bool {
		self.dos_error != 0
	}

	/// Returns true unless the record has no POSIX equivalent.
	#[inline]
	pub const fn has_posix_mapping(&self) -> bool {
		self.posix_error != 0
	}

	/// Returns true if `dos_error` lies outside the 16-bit Win32 range and
	/// has the shape of a status or HRESULT value.
	///
	/// Such values are reported as-is. Resolving them again is left to the
	/// caller.
	#[inline]
	pub const fn dos_error_is_status_shaped(&self) -> bool {
		self.dos_error > DOS_ERROR_MAX
	}

	/// Returns the POSIX error name, if the value has one.
	#[inline]
	pub fn posix_name(&self) -> Option<&'static str> {
		crate::errno::name(self.posix_error)
	}

	/// Substitutes `%1`..`%9` in the message with `args`.
	pub fn format<S: AsRef<str>>(&self, args: &[S]) -> Cow<'static, str> {
		format_message(self.message, args)
	}
}
