use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LmError>;

/// Failures surfaced by the language model.
///
/// Running out of context during generation is not an error: it simply
/// ends the generated text early.
#[derive(Debug, Error)]
pub enum LmError {
	#[error("window length must be >= 1, got {0}")]
	InvalidWindowLength(usize),

	#[error("model is already trained")]
	AlreadyTrained,

	#[error("failed to read corpus {}: {source}", .path.display())]
	Corpus {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl LmError {
	pub(crate) fn corpus(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Corpus { path: path.into(), source }
	}
}
