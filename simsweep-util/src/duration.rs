//! Duration formatting

// Imports
use std::{fmt, time::Duration};

/// Human-readable wrapper around [`Duration`].
///
/// Formats as hours, minutes and seconds, falling back to milliseconds
/// for sub-second durations.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HumanDuration(pub Duration);

impl fmt::Display for HumanDuration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let total_secs = self.0.as_secs();
		let secs = total_secs % 60;
		let mins = total_secs / 60 % 60;
		let hours = total_secs / 60 / 60;
		let millis = self.0.subsec_millis();

		match (hours, mins, secs) {
			// If we have no hours, mins or secs, format in milliseconds
			(0, 0, 0) => write!(f, "{millis}ms"),

			// Else format it as the decimal part
			(0, 0, _) => write!(f, "{secs}.{millis:03}s"),
			(0, ..) => write!(f, "{mins}m{secs:02}s"),
			(..) => write!(f, "{hours}h{mins:02}m{secs:02}s"),
		}
	}
}
