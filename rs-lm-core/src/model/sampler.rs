use tracing::warn;

use super::distribution::CharEntry;

/// Returned when `draw` lands at or past the last cumulative value.
///
/// Rounding can leave the final cumulative probability slightly below 1.0.
/// Kept as a space for compatibility; this is a known rough edge rather
/// than a meaningful outcome.
pub const FALLBACK_CHAR: char = ' ';

/// Monte Carlo selection over a finalized distribution.
///
/// Scans `entries` in their stored order and returns the first character
/// with `draw < cumulative_probability`. `draw` is expected in `[0, 1)`.
pub fn sample(entries: &[CharEntry], draw: f64) -> char {
	for entry in entries {
		if draw < entry.cumulative_probability() {
			return entry.character();
		}
	}

	warn!(draw, "draw fell past the last cumulative probability, using fallback character");
	FALLBACK_CHAR
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::context_table::ContextTable;
	use crate::model::distribution::Distribution;

	fn distribution_of(sequence: &str) -> Distribution {
		let mut table = ContextTable::new();
		for c in sequence.chars() {
			table.record_occurrence("w", c);
		}
		Distribution::from_counts(table.entries_for("w").unwrap())
	}

	#[test]
	fn single_entry_always_wins() {
		let distribution = distribution_of("q");
		for draw in [0.0, 0.25, 0.5, 0.999_999] {
			assert_eq!(sample(distribution.entries(), draw), 'q');
		}
	}

	#[test]
	fn partitions_follow_first_seen_order() {
		// 'b' owns [0, 0.25), 'a' owns [0.25, 1)
		let distribution = distribution_of("baaa");
		let entries = distribution.entries();

		assert_eq!(sample(entries, 0.0), 'b');
		assert_eq!(sample(entries, 0.2499), 'b');
		assert_eq!(sample(entries, 0.25), 'a');
		assert_eq!(sample(entries, 0.99), 'a');
	}

	#[test]
	fn draw_past_the_cdf_falls_back() {
		let distribution = distribution_of("ab");
		assert_eq!(sample(distribution.entries(), 1.0), FALLBACK_CHAR);
	}

	#[test]
	fn empty_entries_fall_back() {
		assert_eq!(sample(&[], 0.3), FALLBACK_CHAR);
	}
}
