//! Experiment-sweep driver for an external simulator (`simsweep`)

// Modules
pub mod config;
pub mod experiment;
pub mod invocation;
pub mod platform;
pub mod runner;
pub mod sweep;

// Exports
pub use self::{
	config::Config,
	experiment::{Experiment, Family},
	invocation::Invocation,
	platform::{HostOs, SimulatorEngine},
	runner::{ProcessRunner, RunStatus},
	sweep::{Sweep, SweepOutput},
};
