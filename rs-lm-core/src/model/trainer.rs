use std::collections::VecDeque;

use tracing::{debug, info};

use super::context_table::ContextTable;
use super::distribution::DistributionTable;

/// Summary of one training pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingStats {
	/// Characters pulled from the stream, initial window included.
	pub characters: usize,
	/// Distinct windows in the trained table.
	pub windows: usize,
	/// Distinct (window, next character) pairs.
	pub transitions: usize,
}

/// Sliding-window trainer.
///
/// Feeds characters one at a time: the first `window_length` characters
/// only fill the window, every following character is recorded as a
/// successor of the current window before the window advances by one.
///
/// # Invariants
/// - `window_length >= 1` (checked by the owning model)
/// - Once full, the window always holds exactly `window_length` characters
#[derive(Debug)]
pub struct Trainer {
	window_length: usize,
	window: VecDeque<char>,
	key: String,
	table: ContextTable,
	characters: usize,
}

impl Trainer {
	pub fn new(window_length: usize) -> Self {
		debug!(window_length, "starting training pass");
		Self {
			window_length,
			window: VecDeque::with_capacity(window_length),
			key: String::new(),
			table: ContextTable::new(),
			characters: 0,
		}
	}

	/// Consumes one character of the corpus.
	pub fn feed(&mut self, c: char) {
		self.characters += 1;

		if self.window.len() < self.window_length {
			self.window.push_back(c);
			return;
		}

		self.key.clear();
		self.key.extend(self.window.iter());
		self.table.record_occurrence(&self.key, c);

		self.window.pop_front();
		self.window.push_back(c);
	}

	/// Consumes every character of `chars`.
	pub fn feed_all<I: IntoIterator<Item = char>>(&mut self, chars: I) {
		for c in chars {
			self.feed(c);
		}
	}

	/// Read-only view of the counts gathered so far.
	pub fn table(&self) -> &ContextTable {
		&self.table
	}

	/// Ends the pass and finalizes every window's distribution exactly once.
	///
	/// A stream shorter than or equal to the window length yields an empty table.
	pub fn finish(self) -> (DistributionTable, TrainingStats) {
		let transitions = self.table.iter().map(|(_, entries)| entries.len()).sum();
		let stats = TrainingStats {
			characters: self.characters,
			windows: self.table.len(),
			transitions,
		};
		info!(
			characters = stats.characters,
			windows = stats.windows,
			transitions = stats.transitions,
			"training complete"
		);
		(self.table.finalize(), stats)
	}
}
