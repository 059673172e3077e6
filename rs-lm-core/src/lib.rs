//! Character-level language model library.
//!
//! This crate provides an order-k Markov text generator, including:
//! - A sliding-window trainer that counts which character follows each window
//! - Per-window probability distributions with cumulative values
//! - Inverse-CDF sampling and a seedable generation loop
//! - A streaming character source for corpus files
//!
//! The crate has no process-lifecycle dependencies: reading arguments and
//! printing results is left to the caller.

/// Language model, training and generation.
pub mod model;

/// Corpus loading and character streaming.
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{LmError, Result};
pub use model::language_model::LanguageModel;
