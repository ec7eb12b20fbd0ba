//! Sweep

// Imports
use {
	crate::{experiment::Experiment, invocation::Invocation, runner::ProcessRunner},
	anyhow::Context,
	simsweep_util::HumanDuration,
	std::{
		path::PathBuf,
		time::{Duration, Instant},
	},
};

/// Sweep
///
/// Drives every configured experiment over its full parameter grid,
/// strictly sequentially: each invocation fully finishes before the next
/// one is built and launched.
#[derive(Clone, Debug)]
pub struct Sweep {
	/// Engine executable
	program: PathBuf,

	/// Experiments, in execution order
	experiments: Vec<Experiment>,

	/// Whether to abort at the first run reporting failure
	stop_on_failure: bool,
}

impl Sweep {
	/// Creates a new sweep
	pub fn new(program: impl Into<PathBuf>, experiments: Vec<Experiment>, stop_on_failure: bool) -> Self {
		Self {
			program: program.into(),
			experiments,
			stop_on_failure,
		}
	}

	/// Runs the sweep to completion through `runner`.
	///
	/// Experiments run in their configured order, each one's grid in
	/// enumeration order. A run reporting failure is logged and counted,
	/// but doesn't stop the sweep unless `stop_on_failure` was set. There
	/// are no retries and no timeouts: a hung engine blocks the sweep.
	///
	/// # Errors
	/// Returns an error if an invocation couldn't be run at all, or if a
	/// run fails with `stop_on_failure` set.
	pub fn run<R: ProcessRunner>(&self, runner: &mut R) -> Result<SweepOutput, anyhow::Error> {
		let start_time = Instant::now();
		let total_invocations = self.experiments.iter().map(Experiment::grid_len).sum::<usize>();

		let mut invocations_run = 0_usize;
		let mut failures = 0_usize;
		let mut run_durations = Vec::with_capacity(total_invocations);
		for experiment in &self.experiments {
			tracing::info!(family = ?experiment.family, runs = experiment.grid_len(), "Sweeping experiment");

			for tuple in experiment.grid() {
				let invocation = Invocation::new(&self.program, experiment, &tuple);
				let run_percentage = 100.0 * (invocations_run as f64 / total_invocations as f64);
				tracing::info!("[{run_percentage:.2}%] Running {invocation}");

				let run_start_time = Instant::now();
				let status = runner.run(&invocation).context("Unable to run invocation")?;
				run_durations.push(run_start_time.elapsed());
				invocations_run += 1;

				if !status.success {
					failures += 1;
					tracing::warn!(?status, "Run failed: {invocation}");
					if self.stop_on_failure {
						anyhow::bail!("Run failed: {invocation}");
					}
				}
			}
		}

		let elapsed = start_time.elapsed();
		let run_duration_secs = run_durations
			.iter()
			.map(Duration::as_secs_f64)
			.collect::<average::Variance>();
		tracing::info!(
			"Swept {invocations_run} runs ({failures} failed) in {}. Average run: {:.3}s ± {:.3}s",
			HumanDuration(elapsed),
			run_duration_secs.mean(),
			run_duration_secs.error()
		);

		Ok(SweepOutput {
			invocations_run,
			failures,
			elapsed,
		})
	}
}

/// Output for [`Sweep::run`]
#[derive(Clone, Debug)]
pub struct SweepOutput {
	/// Invocations executed
	pub invocations_run: usize,

	/// Runs that reported failure
	pub failures: usize,

	/// Total elapsed time
	pub elapsed: Duration,
}
