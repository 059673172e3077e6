use indexmap::IndexMap;

use super::distribution::{Distribution, DistributionTable};

/// Occurrence count of one character following a window.
///
/// Only exists while training. The finalize pass turns every `CharCount`
/// into an immutable `CharEntry`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharCount {
	character: char,
	count: usize,
}

impl CharCount {
	fn new(character: char) -> Self {
		Self { character, count: 1 }
	}

	pub fn character(&self) -> char {
		self.character
	}

	pub fn count(&self) -> usize {
		self.count
	}
}

/// Counting table built during training.
///
/// Maps each observed window to the characters that followed it, in the
/// order those characters were first seen after that window.
///
/// ## Invariants
/// - Every key holds exactly the window length the owning trainer was built with
/// - Every entry list is non-empty and each count is >= 1
/// - No entry is ever removed and no `character` ever changes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextTable {
	windows: IndexMap<String, Vec<CharCount>>,
}

impl ContextTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `character` followed `window`.
	///
	/// - Unknown windows get a new, empty entry list.
	/// - A known character has its count increased.
	/// - Otherwise a new entry with a count of 1 is appended at the end.
	pub fn record_occurrence(&mut self, window: &str, character: char) {
		let index = match self.windows.get_index_of(window) {
			Some(index) => index,
			None => self.windows.insert_full(window.to_owned(), Vec::new()).0,
		};
		let entries = &mut self.windows[index];

		match entries.iter_mut().find(|entry| entry.character == character) {
			Some(entry) => entry.count += 1,
			None => entries.push(CharCount::new(character)),
		}
	}

	/// Returns the ordered entries recorded for `window`, if it was ever observed.
	pub fn entries_for(&self, window: &str) -> Option<&[CharCount]> {
		self.windows.get(window).map(Vec::as_slice)
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Iterates windows in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[CharCount])> {
		self.windows.iter().map(|(window, entries)| (window.as_str(), entries.as_slice()))
	}

	/// Converts every window's counts into a probability distribution.
	///
	/// Consumes the table: counts cannot be touched once probabilities exist.
	pub fn finalize(self) -> DistributionTable {
		self.windows
			.into_iter()
			.map(|(window, counts)| (window, Distribution::from_counts(&counts)))
			.collect()
	}
}
