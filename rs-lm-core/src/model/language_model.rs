use std::fmt;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{LmError, Result};
use crate::io::CorpusChars;

use super::distribution::DistributionTable;
use super::generator::Generator;
use super::trainer::{Trainer, TrainingStats};

/// Order-k character language model.
///
/// # Lifecycle
/// constructed empty → trained once → any number of `generate` calls.
///
/// # Invariants
/// - `window_length >= 1` and never changes
/// - The table is built exactly once and never mutated afterwards
/// - The random source is only advanced by generation, once per character
#[derive(Debug)]
pub struct LanguageModel {
	window_length: usize,
	table: DistributionTable,
	stats: Option<TrainingStats>,
	rng: StdRng,
}

impl LanguageModel {
	/// Creates an untrained model.
	///
	/// # Parameters
	/// - `window_length`: number of preceding characters used as context.
	/// - `seed`: `Some(seed)` for reproducible generation, `None` to seed
	///   from the operating system.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize, seed: Option<u64>) -> Result<Self> {
		if window_length == 0 {
			return Err(LmError::InvalidWindowLength(window_length));
		}

		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};

		Ok(Self { window_length, table: DistributionTable::default(), stats: None, rng })
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// The trained table (empty before training).
	pub fn table(&self) -> &DistributionTable {
		&self.table
	}

	pub fn is_trained(&self) -> bool {
		self.stats.is_some()
	}

	/// Statistics of the training pass, once trained.
	pub fn stats(&self) -> Option<TrainingStats> {
		self.stats
	}

	/// Builds the model from a character stream (the corpus).
	///
	/// # Errors
	/// Returns an error if the model was already trained.
	pub fn train<I: IntoIterator<Item = char>>(&mut self, corpus: I) -> Result<TrainingStats> {
		self.ensure_untrained()?;

		let mut trainer = Trainer::new(self.window_length);
		trainer.feed_all(corpus);
		Ok(self.install(trainer))
	}

	/// Builds the model from a UTF-8 text file, streamed character by character.
	///
	/// # Errors
	/// - Returns an error if the model was already trained.
	/// - Returns an error if the file cannot be opened or read; the model
	///   stays untrained in that case.
	pub fn train_file<P: AsRef<Path>>(&mut self, path: P) -> Result<TrainingStats> {
		self.ensure_untrained()?;

		let path = path.as_ref();
		let chars = CorpusChars::open(path)?;
		let mut trainer = Trainer::new(self.window_length);
		for c in chars {
			trainer.feed(c.map_err(|e| LmError::corpus(path, e))?);
		}
		Ok(self.install(trainer))
	}

	/// Generates text from the learned probabilities.
	///
	/// Starts from `initial_text` and appends up to `desired_length`
	/// characters. Returns `initial_text` unchanged when it is shorter than
	/// the window length, and stops early once the trailing window was never
	/// seen in the corpus.
	pub fn generate(&mut self, initial_text: &str, desired_length: usize) -> String {
		Generator::new(&self.table, self.window_length, &mut self.rng).extend(initial_text, desired_length)
	}

	fn ensure_untrained(&self) -> Result<()> {
		if self.is_trained() {
			return Err(LmError::AlreadyTrained);
		}
		Ok(())
	}

	fn install(&mut self, trainer: Trainer) -> TrainingStats {
		let (table, stats) = trainer.finish();
		self.table = table;
		self.stats = Some(stats);
		stats
	}
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.table)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_window_is_rejected() {
		assert!(matches!(LanguageModel::new(0, Some(1)), Err(LmError::InvalidWindowLength(0))));
	}

	#[test]
	fn second_training_is_rejected() {
		let mut model = LanguageModel::new(2, Some(20)).unwrap();
		model.train("abcabc".chars()).unwrap();

		assert!(matches!(model.train("xyz".chars()), Err(LmError::AlreadyTrained)));
		assert!(model.table().get("xy").is_none());
	}

	#[test]
	fn training_on_short_corpus_still_counts_as_trained() {
		let mut model = LanguageModel::new(4, Some(20)).unwrap();
		let stats = model.train("ab".chars()).unwrap();

		assert!(model.is_trained());
		assert_eq!(stats.windows, 0);
		assert_eq!(model.generate("abcd", 5), "abcd");
	}

	#[test]
	fn untrained_model_generates_nothing() {
		let mut model = LanguageModel::new(1, None).unwrap();

		assert!(!model.is_trained());
		assert_eq!(model.generate("hello", 5), "hello");
	}

	#[test]
	fn same_seed_same_text() {
		let corpus = "the quick brown fox jumps over the lazy dog, then the fox sleeps";
		let mut first = LanguageModel::new(2, Some(20)).unwrap();
		let mut second = LanguageModel::new(2, Some(20)).unwrap();
		first.train(corpus.chars()).unwrap();
		second.train(corpus.chars()).unwrap();

		assert_eq!(first.generate("th", 200), second.generate("th", 200));
	}

	#[test]
	fn generated_text_is_bounded() {
		let mut model = LanguageModel::new(3, None).unwrap();
		model.train("to be or not to be, that is the question".chars()).unwrap();

		let text = model.generate("to ", 25);
		assert!(text.starts_with("to "));
		assert!(text.chars().count() <= 3 + 25);
	}

	#[test]
	fn display_dumps_the_table() {
		let mut model = LanguageModel::new(1, Some(1)).unwrap();
		model.train("aab".chars()).unwrap();

		assert_eq!(model.to_string(), "a : ((a 1 0.5 0.5) (b 1 0.5 1))\n");
	}
}
