use rs_lm_core::LmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Model(#[from] LmError),

	#[error("invalid settings: {0}")]
	Settings(#[from] config::ConfigError),
}
