use std::fmt;

use indexmap::IndexMap;

use super::context_table::CharCount;
use super::sampler;

/// A finalized character entry of one window's distribution.
///
/// Created once by [`Distribution::from_counts`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CharEntry {
	character: char,
	count: usize,
	probability: f64,
	cumulative_probability: f64,
}

impl CharEntry {
	pub fn character(&self) -> char {
		self.character
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Running sum of probabilities up to and including this entry.
	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}
}

impl fmt::Display for CharEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({} {} {} {})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}

/// Discrete distribution of the characters following one window.
///
/// Entries keep the first-seen order of the counting phase, so the CDF
/// partitions `[0, 1)` in that order rather than by character or frequency.
///
/// ## Invariants
/// - At least one entry
/// - `cumulative_probability` is non-decreasing and its last value is the
///   sum of all probabilities (1.0 up to rounding, never renormalized)
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
	entries: Vec<CharEntry>,
}

impl Distribution {
	/// Builds probabilities and cumulative probabilities from raw counts.
	///
	/// `counts` comes from a counting table, so its total is always >= 1.
	pub fn from_counts(counts: &[CharCount]) -> Self {
		let total: usize = counts.iter().map(CharCount::count).sum();

		let mut cumulative = 0.0;
		let entries = counts
			.iter()
			.map(|count| {
				let probability = count.count() as f64 / total as f64;
				cumulative += probability;
				CharEntry {
					character: count.character(),
					count: count.count(),
					probability,
					cumulative_probability: cumulative,
				}
			})
			.collect();

		Self { entries }
	}

	pub fn entries(&self) -> &[CharEntry] {
		&self.entries
	}

	/// Selects the character whose CDF slot contains `draw` (see [`sampler::sample`]).
	pub fn sample(&self, draw: f64) -> char {
		sampler::sample(&self.entries, draw)
	}
}

impl fmt::Display for Distribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{entry}")?;
		}
		f.write_str(")")
	}
}

/// Trained table: window to its finalized distribution.
///
/// Read-only once built. Windows iterate in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistributionTable {
	windows: IndexMap<String, Distribution>,
}

impl DistributionTable {
	pub fn get(&self, window: &str) -> Option<&Distribution> {
		self.windows.get(window)
	}

	/// Returns the ordered, finalized entries for `window`, if it was ever observed.
	pub fn entries_for(&self, window: &str) -> Option<&[CharEntry]> {
		self.get(window).map(Distribution::entries)
	}

	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Distribution)> {
		self.windows.iter().map(|(window, distribution)| (window.as_str(), distribution))
	}
}

impl FromIterator<(String, Distribution)> for DistributionTable {
	fn from_iter<I: IntoIterator<Item = (String, Distribution)>>(iter: I) -> Self {
		Self { windows: iter.into_iter().collect() }
	}
}

impl fmt::Display for DistributionTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, distribution) in &self.windows {
			writeln!(f, "{window} : {distribution}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::context_table::ContextTable;

	fn distribution_of(sequence: &str) -> Distribution {
		let mut table = ContextTable::new();
		for c in sequence.chars() {
			table.record_occurrence("w", c);
		}
		Distribution::from_counts(table.entries_for("w").unwrap())
	}

	#[test]
	fn probabilities_follow_counts_in_first_seen_order() {
		let distribution = distribution_of("baab");
		let entries = distribution.entries();

		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].character(), 'b');
		assert_eq!(entries[0].probability(), 0.5);
		assert_eq!(entries[0].cumulative_probability(), 0.5);
		assert_eq!(entries[1].character(), 'a');
		assert_eq!(entries[1].cumulative_probability(), 1.0);
	}

	#[test]
	fn cumulative_is_running_sum() {
		let distribution = distribution_of("abbccc");
		let mut running = 0.0;
		for entry in distribution.entries() {
			running += entry.probability();
			assert_eq!(entry.cumulative_probability(), running);
		}
		assert!((running - 1.0).abs() < 1e-12);
	}

	#[test]
	fn single_entry_is_certain() {
		let distribution = distribution_of("x");
		let entry = &distribution.entries()[0];

		assert_eq!(entry.count(), 1);
		assert_eq!(entry.probability(), 1.0);
		assert_eq!(entry.cumulative_probability(), 1.0);
	}

	#[test]
	fn display_lists_entries_per_window() {
		let mut table = ContextTable::new();
		table.record_occurrence("ab", 'c');
		table.record_occurrence("ab", 'd');
		table.record_occurrence("bc", 'a');

		let rendered = table.finalize().to_string();
		assert_eq!(rendered, "ab : ((c 1 0.5 0.5) (d 1 0.5 1))\nbc : ((a 1 1 1))\n");
	}
}
