//! `rs-lm WINDOW_LENGTH INITIAL_TEXT LENGTH MODE CORPUS`
//!
//! Trains a character language model on CORPUS and prints the generated
//! text on stdout. Logs go to stderr.

mod cli;
mod error;
mod settings;

use clap::Parser;
use rs_lm_core::LanguageModel;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::error::CliError;
use crate::settings::Settings;

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), CliError> {
	let args = Args::parse();
	let settings = Settings::load(args.config.as_deref())?;
	init_tracing(&settings);

	let seed = args.mode.seed(settings.fixed_seed);
	let mut model = LanguageModel::new(args.window_length, seed)?;
	model.train_file(&args.corpus)?;

	if args.show_model {
		eprint!("{model}");
	}

	info!(
		window_length = args.window_length,
		length = args.length,
		mode = ?args.mode,
		"generating"
	);
	println!("{}", model.generate(&args.initial_text, args.length));
	Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(settings: &Settings) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
