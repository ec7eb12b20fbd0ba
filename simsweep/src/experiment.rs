//! Experiments

// Imports
use itertools::Itertools;

/// Experiment family
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Family {
	/// Cpu process scheduling
	ProcessScheduling,

	/// Page replacement
	PageReplacement,
}

impl Family {
	/// Returns the mode flag selecting this family on the simulator
	pub fn mode_flag(self) -> &'static str {
		match self {
			Self::ProcessScheduling => "--sim-processes",
			Self::PageReplacement => "--sim-pages",
		}
	}
}

/// A named parameter dimension of an experiment.
///
/// Holds the simulator flag the dimension is passed under and the
/// configured values to sweep over.
#[derive(Clone, Debug)]
pub struct Dimension {
	/// Simulator flag
	pub flag: &'static str,

	/// Configured values
	pub values: Vec<u64>,
}

/// Experiment.
///
/// A family together with its ordered parameter dimensions. The sweep
/// enumerates the full cartesian product of the dimension values.
#[derive(Clone, Debug)]
pub struct Experiment {
	/// Family
	pub family: Family,

	/// Parameter dimensions, outermost first
	pub dimensions: Vec<Dimension>,
}

impl Experiment {
	/// Creates the process scheduling experiment from its configured value lists
	pub fn process_scheduling(
		process_amounts: Vec<u64>,
		max_arrive_times: Vec<u64>,
		max_execution_times: Vec<u64>,
	) -> Self {
		Self {
			family:     Family::ProcessScheduling,
			dimensions: vec![
				Dimension {
					flag:   "--num-processes",
					values: process_amounts,
				},
				Dimension {
					flag:   "--max-arrive-time",
					values: max_arrive_times,
				},
				Dimension {
					flag:   "--max-execution-time",
					values: max_execution_times,
				},
			],
		}
	}

	/// Creates the page replacement experiment from its configured value lists
	pub fn page_replacement(page_nums: Vec<u64>, page_reference_pattern_lengths: Vec<u64>) -> Self {
		Self {
			family:     Family::PageReplacement,
			dimensions: vec![
				Dimension {
					flag:   "--num-pages",
					values: page_nums,
				},
				Dimension {
					flag:   "--total-refs",
					values: page_reference_pattern_lengths,
				},
			],
		}
	}

	/// Returns an iterator over the full parameter grid of this experiment.
	///
	/// Tuples are produced in nested-loop order: the first dimension varies
	/// slowest and the last dimension varies fastest. The iterator is a pure
	/// function of the configured values, so calling this repeatedly yields
	/// the identical sequence.
	pub fn grid(&self) -> impl Iterator<Item = Vec<u64>> + '_ {
		self.dimensions
			.iter()
			.map(|dimension| dimension.values.iter().copied())
			.multi_cartesian_product()
	}

	/// Returns the total number of tuples in this experiment's grid
	pub fn grid_len(&self) -> usize {
		self.dimensions.iter().map(|dimension| dimension.values.len()).product()
	}
}

#[cfg(test)]
mod tests {
	// Imports
	use super::*;

	/// Returns a small experiment with known dimensions
	fn small_experiment() -> Experiment {
		Experiment {
			family:     Family::ProcessScheduling,
			dimensions: vec![
				Dimension {
					flag:   "--a",
					values: vec![1, 2],
				},
				Dimension {
					flag:   "--b",
					values: vec![10, 20],
				},
				Dimension {
					flag:   "--c",
					values: vec![100, 200],
				},
			],
		}
	}

	#[test]
	fn grid_follows_nested_loop_order() {
		let experiment = small_experiment();
		let tuples = experiment.grid().collect::<Vec<_>>();

		assert_eq!(tuples, vec![
			vec![1, 10, 100],
			vec![1, 10, 200],
			vec![1, 20, 100],
			vec![1, 20, 200],
			vec![2, 10, 100],
			vec![2, 10, 200],
			vec![2, 20, 100],
			vec![2, 20, 200],
		]);
	}

	#[test]
	fn grid_yields_every_tuple_exactly_once() {
		let experiment = Experiment::process_scheduling(vec![64, 128, 256], vec![0, 128, 512], vec![1, 16, 32]);
		let tuples = experiment.grid().collect::<Vec<_>>();

		assert_eq!(tuples.len(), 27);
		assert_eq!(experiment.grid_len(), 27);
		for tuple in &tuples {
			assert_eq!(tuples.iter().filter(|other| *other == tuple).count(), 1);
		}

		// The first dimension varies slowest: the first 9 tuples all share it
		assert!(tuples[..9].iter().all(|tuple| tuple[0] == 64));
	}

	#[test]
	fn grid_is_restartable() {
		let experiment = small_experiment();
		assert_eq!(experiment.grid().collect::<Vec<_>>(), experiment.grid().collect::<Vec<_>>());
	}

	#[test]
	fn empty_value_list_empties_the_grid() {
		let experiment = Experiment::page_replacement(vec![], vec![256, 512]);
		assert_eq!(experiment.grid_len(), 0);
		assert_eq!(experiment.grid().count(), 0);
	}
}
