use thiserror::Error;

use crate::code::StatusCode;

/// Errors reported by registry lookups.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusError {
	/// The status has no entry in the table.
	#[error("status {0} not found in fallback table")]
	NotFound(StatusCode),
}

/// Errors from parsing a textual status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStatusError {
	/// The input was empty or whitespace.
	#[error("empty status code")]
	Empty,
	/// The input was not a 32-bit hex, decimal, or signed decimal value.
	#[error("invalid status code: {0:?}")]
	Invalid(String),
}
