/// How a duplicate key was resolved.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key existed; kept the existing record (policy chose existing).
	KeptExisting,
	/// Key existed; replaced with the new record (policy chose new).
	ReplacedExisting,
}

impl std::fmt::Display for InsertAction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			InsertAction::KeptExisting => write!(f, "kept existing"),
			InsertAction::ReplacedExisting => write!(f, "replaced existing"),
		}
	}
}

/// Records a duplicate key resolved by policy.
///
/// Positions refer to the slice the index was built over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision<K> {
	/// The colliding key.
	pub key: K,
	/// Position of the record that already held this key.
	pub existing: usize,
	/// Position of the record trying to claim this key.
	pub new: usize,
	/// Position of the record that holds the key after resolution.
	pub winner: usize,
	/// What action was taken.
	pub action: InsertAction,
	/// The table label where this collision occurred.
	pub table: &'static str,
}

impl<K> Collision<K> {
	/// Returns the position of the record that lost the key.
	pub fn loser(&self) -> usize {
		if self.winner == self.existing {
			self.new
		} else {
			self.existing
		}
	}
}

/// Policy for handling duplicate keys during index construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Panic with detailed error message.
	///
	/// Best for tables that must be unique: fails fast and loud.
	#[default]
	Panic,
	/// Keep the first record seen for a key.
	FirstWins,
	/// Overwrite with the last record seen.
	LastWins,
}

impl DuplicatePolicy {
	/// Returns the appropriate policy based on build configuration.
	///
	/// - Debug builds: `Panic` for immediate feedback
	/// - Release builds: `FirstWins` for graceful degradation
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::FirstWins
		}
	}
}
