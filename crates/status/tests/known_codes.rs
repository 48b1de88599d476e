//! Integration tests against the built-in status table.
//!
//! These pin the translations callers rely on and check the table-wide
//! properties lookups depend on.

use nterr_status::{
	ResolvedStatus, Severity, StatusCode, StatusError, StatusRegistry, errno, format_message,
	require, resolve,
};
use pretty_assertions::assert_eq;

#[test]
fn test_success() {
	assert_eq!(
		resolve(0x0000_0000),
		Some(ResolvedStatus {
			dos_error: 0,
			posix_error: 0,
			message: "STATUS_SUCCESS",
		})
	);
}

#[test]
fn test_timeout() {
	let resolved = resolve(0x0000_0102).unwrap();
	assert_eq!(resolved.dos_error, 1460);
	assert_eq!(resolved.posix_error, 138);
	assert_eq!(resolved.posix_name(), Some("ETIMEDOUT"));
	assert_eq!(resolved.message, "STATUS_TIMEOUT");
}

#[test]
fn test_object_name_not_found() {
	assert_eq!(
		resolve(0xC000_0034),
		Some(ResolvedStatus {
			dos_error: 2,
			posix_error: errno::ENOENT,
			message: "Object Name not found.",
		})
	);
}

#[test]
fn test_all_ones_is_absent() {
	assert_eq!(resolve(0xFFFF_FFFF), None);
	assert_eq!(
		require(0xFFFF_FFFF),
		Err(StatusError::NotFound(StatusCode(0xFFFF_FFFF)))
	);
}

#[test]
fn test_common_error_mappings() {
	let cases: &[(u32, u32, i32)] = &[
		(0xC000_0022, 5, errno::EACCES),
		(0xC000_0008, 6, errno::EBADF),
		(0xC000_000D, 87, errno::EINVAL),
		(0xC000_0017, 8, errno::ENOMEM),
		(0xC000_003A, 3, errno::ENOENT),
		(0xC000_007F, 112, errno::ENOSPC),
		(0xC000_00B5, 121, errno::ETIMEDOUT),
		(0xC000_00D8, 554, errno::EWOULDBLOCK),
		(0xC000_0101, 145, errno::ENOTEMPTY),
		(0xC000_0103, 267, errno::ENOTDIR),
		(0xC000_0120, 995, errno::ECANCELED),
		(0xC000_014B, 109, errno::EPIPE),
		(0xC000_0236, 1225, errno::ECONNREFUSED),
		(0xC000_023D, 1232, errno::EHOSTUNREACH),
	];

	for &(status, dos, posix) in cases {
		let resolved = require(status).unwrap();
		assert_eq!(
			(resolved.dos_error, resolved.posix_error),
			(dos, posix),
			"mapping for {}",
			StatusCode(status)
		);
	}
}

#[test]
fn test_alias_resolves_to_first_record() {
	let registry = StatusRegistry::global();
	assert_eq!(registry.resolve(0x0000_0080).unwrap().message, "STATUS_ABANDONED");

	let shadowed: Vec<u32> = registry.shadowed().iter().map(|c| c.key).collect();
	assert!(shadowed.contains(&0x0000_0000));
	assert!(shadowed.contains(&0x0000_0080));
}

#[test]
fn test_lookups_are_deterministic() {
	let first = resolve(0xC000_0022).unwrap();
	for _ in 0..100 {
		let again = resolve(0xC000_0022).unwrap();
		assert_eq!(again, first);
		assert!(std::ptr::eq(again.message, first.message));
	}
}

#[test]
fn test_every_record_has_a_message() {
	for record in StatusRegistry::global().records() {
		assert!(
			!record.message.trim().is_empty(),
			"empty message for {}",
			record.code()
		);
	}
}

#[test]
fn test_every_record_resolves_to_itself_or_an_earlier_alias() {
	let registry = StatusRegistry::global();
	for record in registry.records() {
		let winner = registry.record(record.status).unwrap();
		assert_eq!(winner.status, record.status);
	}
	assert_eq!(registry.authoritative().count(), registry.key_count());
}

#[test]
fn test_posix_values_are_known_names() {
	for record in StatusRegistry::global().records() {
		if record.posix_error != 0 {
			assert!(
				errno::name(record.posix_error).is_some(),
				"unknown errno {} for {}",
				record.posix_error,
				record.code()
			);
		}
	}
}

#[test]
fn test_status_shaped_dos_errors() {
	let breakpoint = resolve(0x8000_0003).unwrap();
	assert!(breakpoint.dos_error_is_status_shaped());
	assert_eq!(breakpoint.dos_error, 0x8000_0003);

	let access_denied = resolve(0xC000_0022).unwrap();
	assert!(!access_denied.dos_error_is_status_shaped());

	for record in StatusRegistry::global().records() {
		let resolved = record.resolved();
		if resolved.dos_error_is_status_shaped() {
			assert_eq!(resolved.posix_error, 0, "{}", record.code());
		}
	}
}

#[test]
fn test_severity_spread() {
	let registry = StatusRegistry::global();
	for severity in [
		Severity::Success,
		Severity::Informational,
		Severity::Warning,
		Severity::Error,
	] {
		assert!(
			registry.records().iter().any(|r| r.code().severity() == severity),
			"no {severity} records"
		);
	}
}

#[test]
fn test_format_real_templates() {
	let resolved = resolve(0xC000_0361).unwrap();
	assert_eq!(
		resolved.format(&["C:\\tools\\app.exe"]),
		"Access to C:\\tools\\app.exe has been restricted by your Administrator by the default software restriction policy level."
	);

	// printf-style remnants survive untouched
	let access_violation = resolve(0xC000_0005).unwrap();
	assert_eq!(access_violation.format(&["x"]), access_violation.message);

	let missing = resolve(0xC000_0362).unwrap();
	assert_eq!(
		missing.format(&["app.exe"]),
		"Access to app.exe has been restricted by your Administrator by location with policy rule %2 placed on path %3"
	);
}

#[test]
fn test_format_preserves_paragraph_breaks() {
	let resolved = resolve(0xC000_0709).unwrap();
	assert!(resolved.message.contains("\n\n"));
	assert_eq!(format_message(resolved.message, &["unused"]), resolved.message);
}

#[test]
fn test_parsed_codes_resolve() {
	let code: StatusCode = "0xC0000034".parse().unwrap();
	assert!(resolve(code.as_u32()).is_some());

	let code: StatusCode = "-1073741772".parse().unwrap();
	assert_eq!(code, StatusCode(0xC000_0034));
}

#[test]
fn test_table_covers_the_full_status_space() {
	let registry = StatusRegistry::global();
	assert!(
		registry.key_count() >= 1900,
		"only {} distinct statuses",
		registry.key_count()
	);
}

#[test]
fn test_facility_representatives() {
	let cases: &[(u32, u32, u16, &str)] = &[
		(0xC000_0467, 4350, 0x000, "The file is temporarily unavailable."),
		(0xC00A_0001, 7001, 0x00A, "The specified session name is invalid."),
		(0xC013_0001, 5039, 0x013, "The cluster node is not valid."),
		(
			0xC01C_0001,
			0x801F_0001,
			0x01C,
			"A handler was not defined by the filter for this operation.",
		),
		(
			0xC01E_0100,
			0xC026_2100,
			0x01E,
			"Not enough video memory is available to complete the operation.",
		),
		(
			0xC021_0000,
			0x8031_0000,
			0x021,
			"The volume must be unlocked before it can be used.",
		),
		(0xC022_0001, 0x8032_0001, 0x022, "The callout does not exist."),
		(0xC023_0002, 0x8034_0002, 0x023, "An invalid version was specified."),
		(0xC01A_001D, 6629, 0x01A, "The log space is exhausted."),
		(0xC035_1000, 0xC035_1000, 0x035, "No hypervisor is present on this system."),
		(
			0xC036_8000,
			13910,
			0x036,
			"The SPI in the packet does not match a valid IPsec SA.",
		),
		(
			0xC03A_0004,
			0xC03A_0004,
			0x03A,
			"The system does not recognize the file format of this virtual hard disk.",
		),
	];

	for &(status, dos, facility, message) in cases {
		let code = StatusCode(status);
		assert_eq!(code.facility(), facility, "facility of {code}");
		let resolved = require(status).unwrap();
		assert_eq!((resolved.dos_error, resolved.message), (dos, message), "{code}");
	}
}

#[test]
fn test_facility_errors_without_win32_code_have_no_errno() {
	for status in [0xC01E_0100, 0xC021_0000, 0xC022_0001, 0xC023_0002, 0xC035_1000] {
		let resolved = require(status).unwrap();
		assert!(resolved.dos_error_is_status_shaped(), "{}", StatusCode(status));
		assert_eq!(resolved.posix_name(), None);
	}
}
