use super::*;
use crate::InsertAction;

static WITH_ALIAS: [StatusRecord; 4] = [
	StatusRecord::new(0x0000_0000, 0, 0, "STATUS_SUCCESS"),
	StatusRecord::new(0x0000_0000, 0, 0, "STATUS_WAIT_0"),
	StatusRecord::new(0x0000_0102, 1460, 138, "STATUS_TIMEOUT"),
	StatusRecord::new(0xC000_0034, 2, 2, "Object Name not found."),
];

static CONFLICTING: [StatusRecord; 3] = [
	StatusRecord::new(0xC000_0001, 31, 5, "newer meaning"),
	StatusRecord::new(0xC000_0002, 1, 22, "unrelated"),
	StatusRecord::new(0xC000_0001, 1, 22, "older meaning"),
];

#[test]
fn test_first_record_wins() {
	let registry = StatusRegistry::from_records("test", &WITH_ALIAS);

	let resolved = registry.resolve(0).unwrap();
	assert_eq!(resolved.message, "STATUS_SUCCESS");
	assert!(std::ptr::eq(registry.record(0).unwrap(), &WITH_ALIAS[0]));
}

#[test]
fn test_first_wins_with_different_payload() {
	let registry = StatusRegistry::from_records("test", &CONFLICTING);

	assert_eq!(
		registry.resolve(0xC000_0001),
		Some(ResolvedStatus {
			dos_error: 31,
			posix_error: 5,
			message: "newer meaning",
		})
	);
}

#[test]
fn test_shadowed_diagnostics() {
	let registry = StatusRegistry::from_records("test", &CONFLICTING);

	assert_eq!(registry.len(), 3);
	assert_eq!(registry.key_count(), 2);

	let shadowed = registry.shadowed();
	assert_eq!(shadowed.len(), 1);
	assert_eq!(shadowed[0].key, 0xC000_0001);
	assert_eq!(shadowed[0].winner, 0);
	assert_eq!(shadowed[0].loser(), 2);
	assert_eq!(shadowed[0].action, InsertAction::KeptExisting);
	assert_eq!(shadowed[0].table, "test");
}

#[test]
fn test_authoritative_skips_shadowed() {
	let registry = StatusRegistry::from_records("test", &WITH_ALIAS);

	let messages: Vec<_> = registry.authoritative().map(|r| r.message).collect();
	assert_eq!(
		messages,
		["STATUS_SUCCESS", "STATUS_TIMEOUT", "Object Name not found."]
	);
	assert_eq!(registry.records().len(), 4);
}

#[test]
fn test_miss_is_reported() {
	let registry = StatusRegistry::from_records("test", &WITH_ALIAS);

	assert_eq!(registry.resolve(0xFFFF_FFFF), None);
	assert!(!registry.contains(0xFFFF_FFFF));
	assert_eq!(
		registry.require(0xFFFF_FFFF),
		Err(StatusError::NotFound(StatusCode(0xFFFF_FFFF)))
	);
	assert_eq!(
		registry.require(0xFFFF_FFFF).unwrap_err().to_string(),
		"status 0xFFFFFFFF not found in fallback table"
	);
}

#[test]
fn test_zero_payload_is_not_a_miss() {
	let registry = StatusRegistry::from_records("test", &WITH_ALIAS);

	let success = registry.require(0).unwrap();
	assert!(!success.has_dos_mapping());
	assert!(!success.has_posix_mapping());

	let timeout = registry.require(0x102).unwrap();
	assert!(timeout.has_dos_mapping());
	assert!(timeout.has_posix_mapping());
	assert_eq!(timeout.posix_name(), Some("ETIMEDOUT"));
}

#[test]
fn test_empty_registry() {
	let registry = StatusRegistry::from_records("empty", &[]);
	assert!(registry.is_empty());
	assert_eq!(registry.resolve(0), None);
	assert!(registry.shadowed().is_empty());
}

#[test]
fn test_global_is_built_once() {
	let a = StatusRegistry::global();
	let b = StatusRegistry::global();
	assert!(std::ptr::eq(a, b));
	assert!(!a.is_empty());
}

#[test]
fn test_global_table_is_ordered() {
	let records = StatusRegistry::global().records();
	for pair in records.windows(2) {
		assert!(
			pair[0].status <= pair[1].status,
			"table out of order: {} before {}",
			pair[0].code(),
			pair[1].code()
		);
	}
}

#[test]
fn test_global_aliases_follow_their_winner() {
	let registry = StatusRegistry::global();
	assert!(!registry.shadowed().is_empty());
	for c in registry.shadowed() {
		assert_eq!(c.action, InsertAction::KeptExisting);
		assert!(c.winner < c.loser());
		assert_eq!(registry.records()[c.loser()].status, c.key);
	}
}

#[test]
fn test_concurrent_resolution() {
	let expected = StatusRegistry::global().resolve(0xC000_0034);
	let handles: Vec<_> = (0..8)
		.map(|_| {
			std::thread::spawn(move || {
				(0..1000)
					.map(|_| crate::resolve(0xC000_0034))
					.all(|r| r == expected)
			})
		})
		.collect();

	for h in handles {
		assert!(h.join().unwrap());
	}
}
