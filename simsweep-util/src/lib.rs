//! Utilities

// Modules
pub mod duration;
pub mod logger;

// Exports
pub use duration::HumanDuration;

// Imports
use itertools::Itertools;

/// Extension trait for `[String]` slices to render them as a command line
#[extend::ext(name = JoinCommandLine)]
pub impl [String] {
	/// Joins these arguments into a single space-separated command line.
	///
	/// Arguments containing spaces are quoted, so the rendered line stays
	/// unambiguous when displayed.
	fn join_command_line(&self) -> String {
		self.iter()
			.map(|arg| match arg.contains(' ') {
				true => format!("\"{arg}\""),
				false => arg.clone(),
			})
			.join(" ")
	}
}

#[cfg(test)]
mod tests {
	// Imports
	use super::*;

	#[test]
	fn join_command_line_separates_with_spaces() {
		let args = ["--sim-pages=true".to_owned(), "--num-pages".to_owned(), "32".to_owned()];
		assert_eq!(args.join_command_line(), "--sim-pages=true --num-pages 32");
	}

	#[test]
	fn join_command_line_quotes_arguments_with_spaces() {
		let args = ["--name".to_owned(), "two words".to_owned()];
		assert_eq!(args.join_command_line(), "--name \"two words\"");
	}

	#[test]
	fn join_command_line_is_empty_for_no_arguments() {
		let args: &[String] = &[];
		assert_eq!(args.join_command_line(), "");
	}
}
