//! Backend selection and fallback.
//!
//! The launch sequence is an explicit state machine:
//!
//! ```text
//! CheckPrerequisites -> SelectPort -> Attempt(0) -> ... -> report | error
//! ```
//!
//! Prerequisite failure is terminal before any port or backend work. Port
//! selection always proceeds. Attempts consume an ordered candidate list one
//! backend at a time; a failure outcome advances to the next candidate, and
//! exhaustion is terminal failure carrying the last cause.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::assets;
use crate::backend::{BackendKind, Outcome, ProcessBackend, ServerBackend};
use crate::config::{LaunchConfig, serve_url};
use crate::error::{Error, Result};
use crate::port;

/// User-selected launch mode: one specific backend, or automatic fallback
/// through all of them in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
	Explicit(BackendKind),
	Auto,
}

impl ServerMode {
	/// Candidate backends for this mode, in the order they will be tried.
	///
	/// An explicit choice yields exactly that backend: the user's selection
	/// is never escalated to a backend they did not ask for.
	pub fn candidates(self) -> Vec<ProcessBackend> {
		match self {
			ServerMode::Explicit(kind) => vec![ProcessBackend::new(kind)],
			ServerMode::Auto => {
				BackendKind::AUTO_ORDER.iter().copied().map(ProcessBackend::new).collect()
			}
		}
	}
}

/// One backend try and how it ended.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchAttempt {
	pub backend: &'static str,
	pub port: u16,
	pub outcome: Outcome,
}

/// Terminal summary of a successful launch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchReport {
	/// Display name of the backend that served.
	pub backend: &'static str,
	pub port: u16,
	pub url: String,
	/// Every attempt made this run, the successful one last.
	pub attempts: Vec<LaunchAttempt>,
}

enum Step {
	CheckPrerequisites,
	SelectPort,
	Attempt { index: usize, port: u16 },
}

/// Drive the full launch sequence: prerequisite check, port selection, then
/// each candidate backend in order until one serves successfully.
///
/// `candidates` must already be ordered for the selected mode (see
/// [`ServerMode::candidates`]); tests inject scripted backends here instead
/// of spawning real processes.
pub async fn run_launch(
	config: &LaunchConfig,
	candidates: &[&dyn ServerBackend],
	cancel: &CancellationToken,
) -> Result<LaunchReport> {
	let mut attempts: Vec<LaunchAttempt> = Vec::new();
	let mut step = Step::CheckPrerequisites;

	loop {
		step = match step {
			Step::CheckPrerequisites => {
				assets::check_required_assets(&config.working_dir, &config.required_assets)?;
				Step::SelectPort
			}
			Step::SelectPort => {
				let port = port::find_free_port(config.port_range.clone(), config.fallback_port);
				info!(target = "devserve", port, url = %serve_url(port), "selected port");
				Step::Attempt { index: 0, port }
			}
			Step::Attempt { index, port } => {
				let Some(backend) = candidates.get(index) else {
					let last_cause = attempts
						.last()
						.and_then(|attempt| attempt.outcome.cause())
						.unwrap_or_else(|| "no server backends configured".to_string());
					return Err(Error::AllBackendsFailed { attempts, last_cause });
				};

				let name = backend.name();
				let outcome = backend.launch(port, &config.working_dir, cancel).await;
				let attempt = LaunchAttempt { backend: name, port, outcome };

				if attempt.outcome.is_success() {
					info!(target = "devserve", backend = name, port, "server run finished");
					attempts.push(attempt);
					return Ok(LaunchReport { backend: name, port, url: serve_url(port), attempts });
				}

				warn!(
					target = "devserve",
					backend = attempt.backend,
					cause = attempt.outcome.cause().as_deref().unwrap_or("unknown"),
					"backend failed"
				);
				if index + 1 < candidates.len() {
					info!(target = "devserve", "trying next server backend");
				}
				attempts.push(attempt);
				Step::Attempt { index: index + 1, port }
			}
		};
	}
}
