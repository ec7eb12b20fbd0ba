//! Host platform resolution

// Imports
use {
	anyhow::Context,
	std::{
		env,
		fs,
		path::{Path, PathBuf},
	},
};

/// Host operating system
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum HostOs {
	/// Windows
	Windows,

	/// Linux
	Linux,
}

impl HostOs {
	/// Resolves the host operating system from an identifier.
	///
	/// Accepts both the `uname`-style capitalized identifiers ("Windows",
	/// "Linux") and the lowercase identifiers reported by [`env::consts::OS`].
	///
	/// # Errors
	/// Returns an error for any identifier outside the supported set.
	pub fn from_identifier(identifier: &str) -> Result<Self, anyhow::Error> {
		match identifier.to_ascii_lowercase().as_str() {
			"windows" => Ok(Self::Windows),
			"linux" => Ok(Self::Linux),
			_ => anyhow::bail!("Unsupported OS: {identifier}"),
		}
	}

	/// Resolves the operating system this driver is running on.
	///
	/// # Errors
	/// Returns an error if the host isn't a supported operating system.
	pub fn current() -> Result<Self, anyhow::Error> {
		Self::from_identifier(env::consts::OS)
	}

	/// Returns the simulator executable path for this operating system,
	/// relative to the simulator directory
	pub fn executable_path(self) -> &'static str {
		match self {
			Self::Windows => r".\src.exe",
			Self::Linux => "./src",
		}
	}
}

/// Resolved simulator engine location.
///
/// Holds the canonicalized directory containing the engine and the
/// executable path within it. The directory is resolved exactly once,
/// before any invocation, and every invocation then uses it as the
/// engine's working directory instead of changing the driver's own.
#[derive(Clone, Debug)]
pub struct SimulatorEngine {
	/// Engine directory
	dir: PathBuf,

	/// Executable path
	executable: PathBuf,
}

impl SimulatorEngine {
	/// Resolves the engine within `dir` for the host operating system `os`.
	///
	/// # Errors
	/// Returns an error if the directory doesn't exist or can't be resolved.
	pub fn resolve(dir: &Path, os: HostOs) -> Result<Self, anyhow::Error> {
		let dir = fs::canonicalize(dir).context("Unable to resolve simulator directory")?;
		let executable = dir.join(os.executable_path());

		Ok(Self { dir, executable })
	}

	/// Returns the engine directory
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Returns the engine executable path
	pub fn executable(&self) -> &Path {
		&self.executable
	}
}

#[cfg(test)]
mod tests {
	// Imports
	use super::*;

	#[test]
	fn windows_and_linux_are_supported() {
		assert_eq!(HostOs::from_identifier("Windows").unwrap(), HostOs::Windows);
		assert_eq!(HostOs::from_identifier("windows").unwrap(), HostOs::Windows);
		assert_eq!(HostOs::from_identifier("Linux").unwrap(), HostOs::Linux);
		assert_eq!(HostOs::from_identifier("linux").unwrap(), HostOs::Linux);
	}

	#[test]
	fn other_platforms_are_rejected() {
		for identifier in ["Darwin", "macos", "freebsd", ""] {
			let err = HostOs::from_identifier(identifier).unwrap_err();
			assert!(err.to_string().starts_with("Unsupported OS"));
		}
	}

	#[test]
	fn executable_paths_are_relative_to_the_engine_directory() {
		assert_eq!(HostOs::Windows.executable_path(), r".\src.exe");
		assert_eq!(HostOs::Linux.executable_path(), "./src");
	}

	#[test]
	fn resolve_joins_the_executable_onto_the_directory() {
		let dir = env::temp_dir();
		let engine = SimulatorEngine::resolve(&dir, HostOs::Linux).expect("Unable to resolve engine");
		assert!(engine.executable().starts_with(engine.dir()));
		assert!(engine.executable().ends_with("src"));
	}

	#[test]
	fn resolve_fails_for_a_missing_directory() {
		let res = SimulatorEngine::resolve(Path::new("/simsweep-missing-dir"), HostOs::Linux);
		assert!(res.is_err());
	}
}
