//! Top-level module for the character language model.
//!
//! The pipeline runs leaf to root:
//! - Counting table filled during training (`ContextTable`)
//! - Finalized per-window distributions (`DistributionTable`)
//! - Inverse-CDF character selection (`sampler`)
//! - Sliding-window training pass (`Trainer`)
//! - Seed extension loop (`Generator`)
//! - The owning model (`LanguageModel`)

/// Window to first-seen-ordered character counts.
///
/// Only used while training; consumed by the finalize pass.
pub mod context_table;

/// Probabilities and cumulative probabilities for each window.
///
/// Built once from a `ContextTable` and read-only afterwards.
pub mod distribution;

/// Picks a character from a finalized distribution given a uniform draw.
pub mod sampler;

/// Sliding-window pass over a character stream.
pub mod trainer;

/// Extends a seed text one sampled character at a time.
pub mod generator;

/// The model: window length, trained table and random source.
pub mod language_model;
