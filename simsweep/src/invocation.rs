//! Invocations

// Imports
use {
	crate::experiment::{Experiment, Family},
	simsweep_util::JoinCommandLine,
	std::{
		fmt,
		path::{Path, PathBuf},
	},
};

/// A single planned simulator run.
///
/// Pairs the engine executable with the exact argument list for one
/// parameter tuple of an experiment.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Invocation {
	/// Experiment family
	family: Family,

	/// Engine executable
	program: PathBuf,

	/// Arguments, in the order the engine expects them
	args: Vec<String>,
}

impl Invocation {
	/// Builds the invocation of `experiment` for `tuple`.
	///
	/// Emits the family's mode flag first, then each dimension's flag
	/// followed by the tuple value as a decimal string, in dimension order.
	/// Values are passed through as-is, without any validation.
	///
	/// # Panics
	/// Panics if `tuple` doesn't have one value per dimension.
	pub fn new(program: impl Into<PathBuf>, experiment: &Experiment, tuple: &[u64]) -> Self {
		assert_eq!(
			tuple.len(),
			experiment.dimensions.len(),
			"Tuple doesn't have one value per dimension"
		);

		let mut args = Vec::with_capacity(1 + 2 * experiment.dimensions.len());
		args.push(format!("{}=true", experiment.family.mode_flag()));
		for (dimension, value) in experiment.dimensions.iter().zip(tuple) {
			args.push(dimension.flag.to_owned());
			args.push(value.to_string());
		}

		Self {
			family:  experiment.family,
			program: program.into(),
			args,
		}
	}

	/// Returns the experiment family this invocation belongs to
	pub fn family(&self) -> Family {
		self.family
	}

	/// Returns the engine executable
	pub fn program(&self) -> &Path {
		&self.program
	}

	/// Returns the arguments
	pub fn args(&self) -> &[String] {
		&self.args
	}

	/// Renders the full command line of this invocation
	pub fn command_line(&self) -> String {
		format!("{} {}", self.program.display(), self.args.join_command_line())
	}
}

impl fmt::Display for Invocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.command_line())
	}
}

#[cfg(test)]
mod tests {
	// Imports
	use super::*;

	#[test]
	fn process_scheduling_arguments_match_the_engine_interface() {
		let experiment = Experiment::process_scheduling(vec![64], vec![0], vec![1]);
		let invocation = Invocation::new("./src", &experiment, &[64, 0, 1]);

		let expected = "--sim-processes=true --num-processes 64 --max-arrive-time 0 --max-execution-time 1";
		assert_eq!(invocation.args().join_command_line(), expected);
	}

	#[test]
	fn page_replacement_arguments_match_the_engine_interface() {
		let experiment = Experiment::page_replacement(vec![32], vec![256]);
		let invocation = Invocation::new("./src", &experiment, &[32, 256]);

		assert_eq!(
			invocation.args().join_command_line(),
			"--sim-pages=true --num-pages 32 --total-refs 256"
		);
	}

	#[test]
	fn command_line_starts_with_the_program() {
		let experiment = Experiment::page_replacement(vec![32], vec![256]);
		let invocation = Invocation::new(r".\src.exe", &experiment, &[32, 256]);

		assert_eq!(
			invocation.command_line(),
			r".\src.exe --sim-pages=true --num-pages 32 --total-refs 256"
		);
		assert_eq!(invocation.to_string(), invocation.command_line());
	}

	#[test]
	#[should_panic(expected = "Tuple doesn't have one value per dimension")]
	fn mismatched_tuple_arity_panics() {
		let experiment = Experiment::page_replacement(vec![32], vec![256]);
		let _ = Invocation::new("./src", &experiment, &[32]);
	}
}
