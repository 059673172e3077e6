use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// How the model's random source is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Seeded from the operating system, different text on every run.
	Random,
	/// Seeded with the configured fixed seed, reproducible text.
	Fixed,
}

impl Mode {
	pub fn seed(self, fixed_seed: u64) -> Option<u64> {
		match self {
			Mode::Random => None,
			Mode::Fixed => Some(fixed_seed),
		}
	}
}

impl FromStr for Mode {
	type Err = Infallible;

	/// `"random"` selects [`Mode::Random`], any other value [`Mode::Fixed`].
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(if s == "random" { Mode::Random } else { Mode::Fixed })
	}
}

#[derive(Parser, Debug)]
#[command(name = "rs-lm", version, about = "Character-level Markov text generator", long_about = None)]
pub struct Args {
	#[arg(value_name = "WINDOW_LENGTH", help = "Number of preceding characters used as context")]
	pub window_length: usize,

	#[arg(value_name = "INITIAL_TEXT", help = "Text to start generating from")]
	pub initial_text: String,

	#[arg(value_name = "LENGTH", help = "Number of characters to generate")]
	pub length: usize,

	#[arg(value_name = "MODE", help = "'random' for a different text on every run, anything else for a fixed seed")]
	pub mode: Mode,

	#[arg(value_name = "CORPUS", help = "Path to the training text")]
	pub corpus: PathBuf,

	#[arg(long, value_name = "PATH", help = "Settings file (defaults to ./rs-lm.toml when present)")]
	pub config: Option<PathBuf>,

	#[arg(long, help = "Print the trained model to stderr before generating")]
	pub show_model: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn five_positional_arguments() {
		let args = Args::try_parse_from(["rs-lm", "3", "Wha", "100", "random", "corpus.txt"]).unwrap();

		assert_eq!(args.window_length, 3);
		assert_eq!(args.initial_text, "Wha");
		assert_eq!(args.length, 100);
		assert_eq!(args.mode, Mode::Random);
		assert_eq!(args.corpus, PathBuf::from("corpus.txt"));
		assert!(args.config.is_none());
		assert!(!args.show_model);
	}

	#[test]
	fn non_numeric_lengths_are_rejected() {
		assert!(Args::try_parse_from(["rs-lm", "three", "abc", "10", "random", "c.txt"]).is_err());
		assert!(Args::try_parse_from(["rs-lm", "3", "abc", "-1", "random", "c.txt"]).is_err());
	}

	#[test]
	fn missing_argument_is_rejected() {
		assert!(Args::try_parse_from(["rs-lm", "3", "abc", "10", "random"]).is_err());
	}

	#[test]
	fn any_other_mode_is_fixed() {
		for value in ["fixed", "Random", "", "seeded"] {
			assert_eq!(value.parse::<Mode>().unwrap(), Mode::Fixed);
		}
		assert_eq!(Mode::Fixed.seed(20), Some(20));
		assert_eq!(Mode::Random.seed(20), None);
	}

	#[test]
	fn options_are_accepted() {
		let args = Args::try_parse_from([
			"rs-lm", "--show-model", "--config", "lm.toml", "2", "ab", "5", "fixed", "c.txt",
		])
		.unwrap();

		assert!(args.show_model);
		assert_eq!(args.config, Some(PathBuf::from("lm.toml")));
		assert_eq!(args.mode, Mode::Fixed);
	}
}
