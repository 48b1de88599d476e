//! Fallback translation of NTSTATUS codes.
//!
//! When the operating system cannot provide a message for a status value,
//! this crate answers from a built-in table: the nearest legacy Win32
//! error, the nearest POSIX `errno`, and a diagnostic message template.
//!
//! ```
//! let resolved = nterr_status::resolve(0xC000_0034).unwrap();
//! assert_eq!(resolved.dos_error, 2);
//! assert_eq!(resolved.posix_error, nterr_status::errno::ENOENT);
//! assert_eq!(resolved.message, "Object Name not found.");
//! ```
//!
//! Lookups never allocate and never fabricate records: a status missing from
//! the table resolves to `None`, and the caller picks its own fallback.

/// Status code bit layout decoding and parsing.
pub mod code;
/// POSIX error numbers used by the table.
pub mod errno;
/// Error types.
pub mod error;
/// Positional `%N` message substitution.
pub mod format;
/// Table record and lookup result types.
pub mod record;
/// The registry and its process-wide instance.
pub mod registry;
mod table;

pub use code::{Severity, StatusCode};
pub use error::{ParseStatusError, StatusError};
pub use format::format_message;
pub use nterr_index::{Collision, InsertAction};
pub use record::{ResolvedStatus, StatusRecord};
pub use registry::StatusRegistry;

/// Resolves a status against the built-in table.
///
/// Shortcut for [`StatusRegistry::global()`]`.resolve(status)`.
#[inline]
pub fn resolve(status: u32) -> Option<ResolvedStatus> {
	StatusRegistry::global().resolve(status)
}

/// Resolves a status against the built-in table, reporting a miss as an error.
#[inline]
pub fn require(status: u32) -> Result<ResolvedStatus, StatusError> {
	StatusRegistry::global().require(status)
}
