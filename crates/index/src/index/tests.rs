use proptest::prelude::*;

use super::*;

/// Test record type.
#[derive(Debug, PartialEq, Eq)]
struct TestRec {
	key: u32,
	payload: &'static str,
}

impl TableRecord for TestRec {
	type Key = u32;

	fn key(&self) -> u32 {
		self.key
	}
}

static UNIQUE: [TestRec; 3] = [
	TestRec { key: 1, payload: "one" },
	TestRec { key: 2, payload: "two" },
	TestRec { key: 3, payload: "three" },
];

static WITH_DUPLICATE: [TestRec; 4] = [
	TestRec { key: 0, payload: "zero" },
	TestRec { key: 7, payload: "seven (first)" },
	TestRec { key: 7, payload: "seven (second)" },
	TestRec { key: 9, payload: "nine" },
];

#[test]
fn test_index_lookup() {
	let index = IndexBuilder::new("test", &UNIQUE[..])
		.duplicate_policy(DuplicatePolicy::Panic)
		.build();

	assert_eq!(index.len(), 3);
	assert_eq!(index.key_count(), 3);
	assert_eq!(index.get(2).unwrap().payload, "two");
	assert_eq!(index.position(3), Some(2));
	assert!(index.contains(1));

	// Not found
	assert!(index.get(4).is_none());
	assert!(index.collisions().is_empty());
}

#[test]
fn test_first_wins() {
	let index = IndexBuilder::new("test", &WITH_DUPLICATE[..])
		.duplicate_policy(DuplicatePolicy::FirstWins)
		.build();

	assert!(std::ptr::eq(index.get(7).unwrap(), &WITH_DUPLICATE[1]));
	// The shadowed record is still in items.
	assert_eq!(index.len(), 4);
	assert_eq!(index.key_count(), 3);

	let collisions = index.collisions();
	assert_eq!(collisions.len(), 1);
	assert_eq!(
		collisions[0],
		Collision {
			key: 7,
			existing: 1,
			new: 2,
			winner: 1,
			action: InsertAction::KeptExisting,
			table: "test",
		}
	);
	assert_eq!(collisions[0].loser(), 2);
}

#[test]
fn test_last_wins() {
	let index = IndexBuilder::new("test", &WITH_DUPLICATE[..])
		.duplicate_policy(DuplicatePolicy::LastWins)
		.build();

	assert!(std::ptr::eq(index.get(7).unwrap(), &WITH_DUPLICATE[2]));
	assert_eq!(index.collisions()[0].action, InsertAction::ReplacedExisting);
	assert_eq!(index.collisions()[0].loser(), 1);
}

#[test]
fn test_repeated_duplicates_chain_winners() {
	let records: [(u32, usize); 3] = [(5, 0), (5, 1), (5, 2)];

	let first = IndexBuilder::new("chain", &records[..])
		.duplicate_policy(DuplicatePolicy::FirstWins)
		.build();
	let winners: Vec<_> = first.collisions().iter().map(|c| (c.existing, c.winner)).collect();
	assert_eq!(winners, [(0, 0), (0, 0)]);
	assert_eq!(first.position(5), Some(0));

	let last = IndexBuilder::new("chain", &records[..])
		.duplicate_policy(DuplicatePolicy::LastWins)
		.build();
	let winners: Vec<_> = last.collisions().iter().map(|c| (c.existing, c.winner)).collect();
	assert_eq!(winners, [(0, 1), (1, 2)]);
	assert_eq!(last.position(5), Some(2));
	assert_eq!(last.key_count(), 1);
}

#[test]
fn test_insert_action_display() {
	assert_eq!(InsertAction::KeptExisting.to_string(), "kept existing");
	assert_eq!(InsertAction::ReplacedExisting.to_string(), "replaced existing");
}

#[test]
#[should_panic(expected = "duplicate table key")]
fn test_panic_on_duplicate() {
	let _index = IndexBuilder::new("test", &WITH_DUPLICATE[..])
		.duplicate_policy(DuplicatePolicy::Panic)
		.build();
}

#[test]
fn test_empty_table() {
	let empty: &[TestRec] = &[];
	let index = IndexBuilder::new("empty", empty).build();
	assert!(index.is_empty());
	assert_eq!(index.key_count(), 0);
	assert!(index.get(0).is_none());
}

#[test]
fn test_iter_preserves_authored_order() {
	let index = IndexBuilder::new("test", &WITH_DUPLICATE[..])
		.duplicate_policy(DuplicatePolicy::FirstWins)
		.build();

	let payloads: Vec<_> = index.iter().map(|r| r.payload).collect();
	assert_eq!(
		payloads,
		["zero", "seven (first)", "seven (second)", "nine"]
	);
}

proptest! {
	#[test]
	fn first_wins_matches_earliest_position(keys in proptest::collection::vec(0u32..16, 0..64)) {
		let records: Vec<(u32, usize)> = keys.iter().copied().zip(0..).collect();
		let index = IndexBuilder::new("prop", &records[..])
			.duplicate_policy(DuplicatePolicy::FirstWins)
			.build();

		for &key in &keys {
			let earliest = keys.iter().position(|&k| k == key);
			prop_assert_eq!(index.position(key), earliest);
		}
		prop_assert_eq!(index.key_count() + index.collisions().len(), keys.len());
	}

	#[test]
	fn last_wins_matches_latest_position(keys in proptest::collection::vec(0u32..16, 0..64)) {
		let records: Vec<(u32, usize)> = keys.iter().copied().zip(0..).collect();
		let index = IndexBuilder::new("prop", &records[..])
			.duplicate_policy(DuplicatePolicy::LastWins)
			.build();

		for &key in &keys {
			let latest = keys.iter().rposition(|&k| k == key);
			prop_assert_eq!(index.position(key), latest);
		}
	}
}

impl TableRecord for (u32, usize) {
	type Key = u32;

	fn key(&self) -> u32 {
		self.0
	}
}
