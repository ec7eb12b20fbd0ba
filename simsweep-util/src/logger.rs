//! Logger

// Imports
use {
	std::{fs, io, path::Path, sync::Mutex},
	tracing::metadata::LevelFilter,
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Pre-initialization logging.
///
/// Messages queued here are emitted as debug logs once [`init`] sets up
/// the logger, so early diagnostics aren't lost.
pub mod pre_init {
	// Imports
	use std::{mem, sync::Mutex};

	/// Queued messages
	static QUEUE: Mutex<Vec<String>> = Mutex::new(Vec::new());

	/// Queues a debug message to be emitted once the logger is initialized
	pub fn debug(msg: String) {
		if let Ok(mut queue) = QUEUE.lock() {
			queue.push(msg);
		}
	}

	/// Takes all queued messages
	pub(super) fn take_all() -> Vec<String> {
		match QUEUE.lock() {
			Ok(mut queue) => mem::take(&mut *queue),
			Err(_) => vec![],
		}
	}
}

/// Initializes the global logger.
///
/// Logs to stderr, filtered by the `RUST_LOG` environment variable
/// (`info` by default). If `log_file` is given, additionally performs
/// verbose logging to it, filtered by `RUST_LOG_FILE` (`debug` by
/// default), truncating the file unless `log_file_append` is set.
///
/// # Panics
/// Panics if a global logger was already initialized.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	// Create the stderr layer
	let stderr_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.with_env_var("RUST_LOG")
		.from_env_lossy();
	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(stderr_filter);

	// Create the file layer, if requested.
	// Note: If the file can't be created we keep going with just the
	//       stderr layer, logging shouldn't bring the program down.
	let file_layer = log_file.and_then(|path| {
		let file = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(path);
		let file = match file {
			Ok(file) => file,
			Err(err) => {
				eprintln!("Unable to create log file {path:?}: {err}");
				return None;
			},
		};

		let file_filter = EnvFilter::builder()
			.with_default_directive(LevelFilter::DEBUG.into())
			.with_env_var("RUST_LOG_FILE")
			.from_env_lossy();
		Some(
			tracing_subscriber::fmt::layer()
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.with_filter(file_filter),
		)
	});

	tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();

	// Then emit all pre-init messages
	for msg in pre_init::take_all() {
		tracing::debug!(target: "simsweep::pre_init", "{msg}");
	}
}
