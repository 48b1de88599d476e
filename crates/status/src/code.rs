use std::fmt;
use std::str::FromStr;

use crate::error::ParseStatusError;

/// Severity encoded in the top two bits of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
	/// `0b00`: the operation succeeded.
	Success,
	/// `0b01`: success with additional information.
	Informational,
	/// `0b10`: the operation may have partially succeeded.
	Warning,
	/// `0b11`: the operation failed.
	Error,
}

impl Severity {
	/// Returns the lowercase name used in listings.
	pub fn as_str(self) -> &'static str {
		match self {
			Severity::Success => "success",
			Severity::Informational => "informational",
			Severity::Warning => "warning",
			Severity::Error => "error",
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

/// A raw 32-bit status value with accessors for its bit fields.
///
/// Layout, most significant bit first:
///
/// ```text
///  3 3 2 2 2 2 2 2 2 2 2 2 1 1 1 1 1 1 1 1 1 1
///  1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
/// +---+-+-+-----------------------+-------------------------------+
/// |Sev|C|R|     Facility          |               Code            |
/// +---+-+-+-----------------------+-------------------------------+
/// ```
///
/// Any `u32` is a valid `StatusCode`; decoding never fails.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusCode(pub u32);

impl StatusCode {
	/// `STATUS_SUCCESS`.
	pub const SUCCESS: StatusCode = StatusCode(0);

	/// Returns the raw value.
	#[inline]
	pub const fn as_u32(self) -> u32 {
		self.0
	}

	/// Returns the value reinterpreted as signed, as most APIs declare it.
	#[inline]
	pub const fn as_i32(self) -> i32 {
		self.0 as i32
	}

	/// Returns the severity bits.
	#[inline]
	pub const fn severity(self) -> Severity {
		match self.0 >> 30 {
			0 => Severity::Success,
			1 => Severity::Informational,
			2 => Severity::Warning,
			_ => Severity::Error,
		}
	}

	/// Returns true if the customer bit is set.
	#[inline]
	pub const fn is_customer(self) -> bool {
		self.0 & 0x2000_0000 != 0
	}

	/// Returns the 12-bit facility.
	#[inline]
	pub const fn facility(self) -> u16 {
		((self.0 >> 16) & 0x0FFF) as u16
	}

	/// Returns the 16-bit facility-specific code.
	#[inline]
	pub const fn code(self) -> u16 {
		(self.0 & 0xFFFF) as u16
	}

	/// Success or informational, the `NT_SUCCESS` test.
	#[inline]
	pub const fn is_success(self) -> bool {
		self.as_i32() >= 0
	}

	/// Informational severity, the `NT_INFORMATION` test.
	#[inline]
	pub const fn is_information(self) -> bool {
		matches!(self.severity(), Severity::Informational)
	}

	/// Warning severity, the `NT_WARNING` test.
	#[inline]
	pub const fn is_warning(self) -> bool {
		matches!(self.severity(), Severity::Warning)
	}

	/// Error severity, the `NT_ERROR` test.
	#[inline]
	pub const fn is_error(self) -> bool {
		matches!(self.severity(), Severity::Error)
	}
}

impl From<u32> for StatusCode {
	fn from(value: u32) -> Self {
		Self(value)
	}
}

impl From<i32> for StatusCode {
	fn from(value: i32) -> Self {
		Self(value as u32)
	}
}

impl From<StatusCode> for u32 {
	fn from(code: StatusCode) -> Self {
		code.0
	}
}

impl fmt::Display for StatusCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{:08X}", self.0)
	}
}

impl fmt::Debug for StatusCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "StatusCode(0x{:08X})", self.0)
	}
}

impl FromStr for StatusCode {
	type Err = ParseStatusError;

	/// Accepts `0x`-prefixed hex, unsigned decimal, or negative decimal in
	/// the signed 32-bit range. An explicit `+` sign is rejected in every
	/// form.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.is_empty() {
			return Err(ParseStatusError::Empty);
		}

		let invalid = || ParseStatusError::Invalid(s.to_owned());

		if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
			let hex = hex.replace('_', "");
			if hex.is_empty() || hex.starts_with('+') {
				return Err(invalid());
			}
			return u32::from_str_radix(&hex, 16)
				.map(StatusCode)
				.map_err(|_| invalid());
		}

		if s.starts_with('+') {
			return Err(invalid());
		}

		if s.starts_with('-') {
			return s.parse::<i32>().map(StatusCode::from).map_err(|_| invalid());
		}

		s.parse::<u32>().map(StatusCode).map_err(|_| invalid())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_severity_bits() {
		assert_eq!(StatusCode(0).severity(), Severity::Success);
		assert_eq!(StatusCode(0x4000_0000).severity(), Severity::Informational);
		assert_eq!(StatusCode(0x8000_0005).severity(), Severity::Warning);
		assert_eq!(StatusCode(0xC000_0034).severity(), Severity::Error);
	}

	#[test]
	fn test_nt_predicates() {
		assert!(StatusCode(0x102).is_success());
		assert!(StatusCode(0x4000_0000).is_success());
		assert!(StatusCode(0x4000_0000).is_information());
		assert!(!StatusCode(0x8000_0005).is_success());
		assert!(StatusCode(0x8000_0005).is_warning());
		assert!(StatusCode(0xC000_0022).is_error());
		assert!(!StatusCode(0xC000_0022).is_warning());
	}

	#[test]
	fn test_fields() {
		// RPC_NT_SERVER_UNAVAILABLE: facility 2, code 0x1B
		let rpc = StatusCode(0xC002_001B);
		assert_eq!(rpc.facility(), 2);
		assert_eq!(rpc.code(), 0x1B);
		assert!(!rpc.is_customer());
		assert!(StatusCode(0xE000_0001).is_customer());
	}

	#[test]
	fn test_display() {
		assert_eq!(StatusCode(0xC000_0034).to_string(), "0xC0000034");
		assert_eq!(StatusCode(0x102).to_string(), "0x00000102");
		assert_eq!(format!("{:?}", StatusCode(1)), "StatusCode(0x00000001)");
	}

	#[test]
	fn test_parse() {
		assert_eq!("0xC0000034".parse(), Ok(StatusCode(0xC000_0034)));
		assert_eq!("0xc000_0034".parse(), Ok(StatusCode(0xC000_0034)));
		assert_eq!("258".parse(), Ok(StatusCode(258)));
		assert_eq!("-1073741772".parse(), Ok(StatusCode(0xC000_0034)));
		assert_eq!(" 0 ".parse(), Ok(StatusCode::SUCCESS));
	}

	#[test]
	fn test_parse_errors() {
		assert_eq!("".parse::<StatusCode>(), Err(ParseStatusError::Empty));
		assert!(matches!("0x".parse::<StatusCode>(), Err(ParseStatusError::Invalid(_))));
		assert!(matches!("0x1_0000_0000".parse::<StatusCode>(), Err(ParseStatusError::Invalid(_))));
		assert!(matches!("4294967296".parse::<StatusCode>(), Err(ParseStatusError::Invalid(_))));
		assert!(matches!("-2147483649".parse::<StatusCode>(), Err(ParseStatusError::Invalid(_))));
		assert!(matches!("STATUS_SUCCESS".parse::<StatusCode>(), Err(ParseStatusError::Invalid(_))));
		assert!(matches!("+5".parse::<StatusCode>(), Err(ParseStatusError::Invalid(_))));
		assert!(matches!("0x+5".parse::<StatusCode>(), Err(ParseStatusError::Invalid(_))));
		assert!(matches!("-+5".parse::<StatusCode>(), Err(ParseStatusError::Invalid(_))));
		assert_eq!("5".parse::<StatusCode>(), Ok(StatusCode(5)));
	}
}
