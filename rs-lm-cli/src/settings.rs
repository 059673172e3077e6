use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Seed used when generation is not in `random` mode.
pub const DEFAULT_FIXED_SEED: u64 = 20;

/// Looked up in the working directory, any supported extension.
const DEFAULT_CONFIG_NAME: &str = "rs-lm";

const ENV_PREFIX: &str = "RS_LM";

/// Settings that are not part of the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
	/// Seed of the deterministic mode
	#[serde(default = "default_fixed_seed")]
	pub fixed_seed: u64,

	/// Log filter used when `RUST_LOG` is not set
	#[serde(default = "default_log_filter")]
	pub log_filter: String,
}

fn default_fixed_seed() -> u64 {
	DEFAULT_FIXED_SEED
}

fn default_log_filter() -> String {
	"warn".to_string()
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			fixed_seed: default_fixed_seed(),
			log_filter: default_log_filter(),
		}
	}
}

impl Settings {
	/// Loads settings from a file and `RS_LM_*` environment variables.
	///
	/// An explicit `path` must exist; otherwise `./rs-lm.<ext>` is used if present.
	/// Environment variables override the file.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let file = match path {
			Some(path) => File::from(path).required(true),
			None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
		};

		Config::builder()
			.add_source(file)
			.add_source(Environment::with_prefix(ENV_PREFIX))
			.build()?
			.try_deserialize()
	}
}
