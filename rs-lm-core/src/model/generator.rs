use std::collections::VecDeque;

use rand::Rng;
use tracing::debug;

use super::distribution::DistributionTable;

/// Extends a seed text using a trained table and a random source.
///
/// # Responsibilities
/// - Look up the trailing `window_length` characters of the text so far
/// - Draw one uniform value per generated character and sample the next one
/// - Stop early, without error, as soon as a window was never seen in training
pub struct Generator<'a, R: Rng> {
	table: &'a DistributionTable,
	window_length: usize,
	rng: &'a mut R,
}

impl<'a, R: Rng> Generator<'a, R> {
	pub fn new(table: &'a DistributionTable, window_length: usize, rng: &'a mut R) -> Self {
		Self { table, window_length, rng }
	}

	/// Appends up to `desired_length` sampled characters to `initial_text`.
	///
	/// # Behavior
	/// - A seed shorter than the window length is returned unchanged.
	/// - An unseen window ends generation; the text so far is returned.
	/// - The random source advances exactly once per appended character.
	///
	/// # Notes
	/// - Lengths are counted in characters, not bytes.
	pub fn extend(&mut self, initial_text: &str, desired_length: usize) -> String {
		let seed_length = initial_text.chars().count();
		if seed_length < self.window_length {
			return initial_text.to_owned();
		}

		let mut text = initial_text.to_owned();
		let mut window: VecDeque<char> = initial_text.chars().skip(seed_length - self.window_length).collect();
		let mut key = String::with_capacity(text.len());

		for generated in 0..desired_length {
			key.clear();
			key.extend(window.iter());

			let Some(distribution) = self.table.get(&key) else {
				debug!(window = %key, generated, "unseen window, stopping generation");
				break;
			};

			let draw: f64 = self.rng.random();
			let next = distribution.sample(draw);
			text.push(next);

			window.pop_front();
			window.push_back(next);
		}

		text
	}
}
