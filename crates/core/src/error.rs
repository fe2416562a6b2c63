use thiserror::Error;

use crate::orchestrator::LaunchAttempt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// One or more required asset files are absent from the document root.
	/// Carries every missing name so the operator sees all problems at once.
	#[error("missing required files: {}", missing.join(", "))]
	MissingAssets { missing: Vec<String> },

	/// The chosen backend failed, or auto mode exhausted every candidate.
	#[error("no server backend could be started: {last_cause}")]
	AllBackendsFailed {
		attempts: Vec<LaunchAttempt>,
		last_cause: String,
	},
}
