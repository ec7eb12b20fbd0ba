//! Configuration

// Imports
use {crate::experiment::Experiment, std::path::PathBuf};

/// Configuration
///
/// Every field has a default reproducing the built-in sweep, so a config
/// file only needs to specify what it overrides.
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
	/// Directory containing the simulator engine
	pub simulator_dir: PathBuf,

	/// Whether to stop the sweep at the first run reporting failure
	pub stop_on_failure: bool,

	/// Process scheduling sweep parameters
	pub process_scheduling: ProcessSchedulingConfig,

	/// Page replacement sweep parameters
	pub page_replacement: PageReplacementConfig,
}

impl Config {
	/// Returns the configured experiments, in sweep order.
	///
	/// Process scheduling always precedes page replacement.
	pub fn experiments(&self) -> Vec<Experiment> {
		vec![
			Experiment::process_scheduling(
				self.process_scheduling.process_amounts.clone(),
				self.process_scheduling.max_arrive_times.clone(),
				self.process_scheduling.max_execution_times.clone(),
			),
			Experiment::page_replacement(
				self.page_replacement.page_nums.clone(),
				self.page_replacement.page_reference_pattern_lengths.clone(),
			),
		]
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			simulator_dir:      PathBuf::from("src"),
			stop_on_failure:    false,
			process_scheduling: ProcessSchedulingConfig::default(),
			page_replacement:   PageReplacementConfig::default(),
		}
	}
}

/// Process scheduling sweep parameters
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProcessSchedulingConfig {
	/// Process counts
	pub process_amounts: Vec<u64>,

	/// Maximum arrival times
	pub max_arrive_times: Vec<u64>,

	/// Maximum execution times
	pub max_execution_times: Vec<u64>,
}

impl Default for ProcessSchedulingConfig {
	fn default() -> Self {
		Self {
			process_amounts:     vec![64, 128, 256],
			max_arrive_times:    vec![0, 128, 512],
			max_execution_times: vec![1, 16, 32],
		}
	}
}

/// Page replacement sweep parameters
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageReplacementConfig {
	/// Page frame counts
	pub page_nums: Vec<u64>,

	/// Reference string lengths
	pub page_reference_pattern_lengths: Vec<u64>,
}

impl Default for PageReplacementConfig {
	fn default() -> Self {
		Self {
			page_nums:                      vec![32, 64, 128],
			page_reference_pattern_lengths: vec![256, 512, 1024],
		}
	}
}
