//! Process running

// Imports
use {
	crate::invocation::Invocation,
	anyhow::Context,
	std::{path::PathBuf, process},
};

/// A runner for simulator invocations.
///
/// The sweep executes every invocation through this trait, so that real
/// spawning can be swapped out for a recording implementation.
pub trait ProcessRunner {
	/// Runs `invocation` to completion, returning its status.
	///
	/// # Errors
	/// Returns an error if the invocation couldn't be run at all.
	fn run(&mut self, invocation: &Invocation) -> Result<RunStatus, anyhow::Error>;
}

/// Status of a finished run
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RunStatus {
	/// Whether the run reported success
	pub success: bool,

	/// Exit code, if the process exited with one
	pub code: Option<i32>,
}

impl RunStatus {
	/// Status of a successful run
	pub const SUCCESS: Self = Self {
		success: true,
		code:    Some(0),
	};
}

impl From<process::ExitStatus> for RunStatus {
	fn from(status: process::ExitStatus) -> Self {
		Self {
			success: status.success(),
			code:    status.code(),
		}
	}
}

/// Process runner that spawns each invocation as a child process.
///
/// Children run with the engine directory as their working directory and
/// inherit this process' standard streams. Each child is waited on until
/// it exits, so no two invocations ever run at once.
#[derive(Clone, Debug)]
pub struct SpawnRunner {
	/// Child working directory
	working_dir: PathBuf,
}

impl SpawnRunner {
	/// Creates a spawn runner that runs children inside `working_dir`
	pub fn new(working_dir: impl Into<PathBuf>) -> Self {
		Self {
			working_dir: working_dir.into(),
		}
	}
}

impl ProcessRunner for SpawnRunner {
	fn run(&mut self, invocation: &Invocation) -> Result<RunStatus, anyhow::Error> {
		let status = process::Command::new(invocation.program())
			.args(invocation.args())
			.current_dir(&self.working_dir)
			.status()
			.context("Unable to launch simulator")?;

		Ok(status.into())
	}
}

/// Process runner that records invocations without spawning them.
///
/// Every run reports success. Backs `--dry-run` and the test suite.
#[derive(Clone, Debug, Default)]
pub struct DryRunner {
	/// Recorded invocations, in execution order
	invocations: Vec<Invocation>,
}

impl DryRunner {
	/// Creates a dry runner with no recorded invocations
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the recorded invocations
	pub fn invocations(&self) -> &[Invocation] {
		&self.invocations
	}
}

impl ProcessRunner for DryRunner {
	fn run(&mut self, invocation: &Invocation) -> Result<RunStatus, anyhow::Error> {
		tracing::info!("Would run: {invocation}");
		self.invocations.push(invocation.clone());

		Ok(RunStatus::SUCCESS)
	}
}
