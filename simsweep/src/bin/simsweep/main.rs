//! Experiment-sweep driver for an external simulator (`simsweep`)

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	simsweep::{
		runner::{DryRunner, SpawnRunner},
		Config,
		HostOs,
		SimulatorEngine,
		Sweep,
	},
	simsweep_util::logger,
	std::fs,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Read the config file, if any
	let config = match &args.config_file {
		Some(config_file) => {
			let config_file = fs::File::open(config_file).context("Unable to open config file")?;
			serde_json::from_reader::<_, Config>(config_file).context("Unable to parse config file")?
		},
		None => Config::default(),
	};
	tracing::debug!(?config, "Configuration");

	// Resolve the simulator engine
	let os = HostOs::current()?;
	let simulator_dir = args.simulator_dir.as_ref().unwrap_or(&config.simulator_dir);
	let engine = SimulatorEngine::resolve(simulator_dir, os).context("Unable to resolve simulator engine")?;
	tracing::debug!(?engine, "Resolved simulator engine");

	// Then run the sweep
	let sweep = Sweep::new(engine.executable(), config.experiments(), config.stop_on_failure);
	let output = match args.dry_run {
		true => sweep.run(&mut DryRunner::new()).context("Unable to run sweep")?,
		false => sweep
			.run(&mut SpawnRunner::new(engine.dir()))
			.context("Unable to run sweep")?,
	};
	tracing::debug!(?output, "Sweep output");

	Ok(())
}
