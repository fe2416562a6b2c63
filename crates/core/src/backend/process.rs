//! Process-backed [`ServerBackend`] implementation.

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::{BackendKind, Outcome, ServerBackend};

/// Runs a [`BackendKind`]'s program as a single foreground child process,
/// streaming its output to the operator's terminal.
#[derive(Debug, Clone, Copy)]
pub struct ProcessBackend {
	kind: BackendKind,
}

impl ProcessBackend {
	pub fn new(kind: BackendKind) -> Self {
		Self { kind }
	}

	pub fn kind(&self) -> BackendKind {
		self.kind
	}
}

#[async_trait]
impl ServerBackend for ProcessBackend {
	fn name(&self) -> &'static str {
		self.kind.name()
	}

	async fn launch(&self, port: u16, working_dir: &Path, cancel: &CancellationToken) -> Outcome {
		let program = match which::which(self.kind.program()) {
			Ok(path) => path,
			Err(err) => {
				return Outcome::Unavailable {
					cause: format!("`{}` not found in PATH: {err}", self.kind.program()),
				};
			}
		};

		info!(target = "devserve", backend = self.name(), port, "starting server");

		let mut child = match Command::new(&program)
			.args(self.kind.args(port))
			.current_dir(working_dir)
			.stdin(Stdio::null())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.spawn()
		{
			Ok(child) => child,
			Err(err) => {
				return Outcome::Unavailable {
					cause: format!("failed to spawn `{}`: {err}", program.display()),
				};
			}
		};

		tokio::select! {
			status = child.wait() => match status {
				Ok(status) => outcome_for_exit(status, cancel.is_cancelled()),
				Err(err) => Outcome::Unavailable {
					cause: format!("failed to wait for server process: {err}"),
				},
			},
			_ = cancel.cancelled() => {
				info!(target = "devserve", backend = self.name(), "stopping server");
				if let Err(err) = child.kill().await {
					warn!(target = "devserve", error = %err, "could not kill server process");
				}
				Outcome::Interrupted
			}
		}
	}
}

/// Classify a child exit. A terminal interrupt reaches the child (shared
/// process group) before our own signal watcher cancels the token, so a
/// SIGINT death is an operator stop even when `cancelled` is still false.
fn outcome_for_exit(status: ExitStatus, cancelled: bool) -> Outcome {
	if cancelled || interrupted_by_operator(status) {
		return Outcome::Interrupted;
	}
	Outcome::Exited { code: status.code() }
}

#[cfg(unix)]
fn interrupted_by_operator(status: ExitStatus) -> bool {
	use std::os::unix::process::ExitStatusExt;
	status.signal() == Some(libc::SIGINT)
}

#[cfg(not(unix))]
fn interrupted_by_operator(_status: ExitStatus) -> bool {
	false
}

#[cfg(all(test, unix))]
mod tests {
	use std::os::unix::process::ExitStatusExt;

	use super::*;

	// Raw wait statuses: low 7 bits are the killing signal, exit codes sit
	// in the second byte.
	fn status(raw: i32) -> ExitStatus {
		ExitStatus::from_raw(raw)
	}

	#[test]
	fn sigint_death_is_an_operator_interrupt() {
		assert_eq!(outcome_for_exit(status(libc::SIGINT), false), Outcome::Interrupted);
	}

	#[test]
	fn cancellation_wins_over_the_exit_status() {
		assert_eq!(outcome_for_exit(status(1 << 8), true), Outcome::Interrupted);
	}

	#[test]
	fn clean_exit_keeps_code_zero() {
		assert_eq!(outcome_for_exit(status(0), false), Outcome::Exited { code: Some(0) });
	}

	#[test]
	fn error_exit_keeps_its_code() {
		assert_eq!(outcome_for_exit(status(1 << 8), false), Outcome::Exited { code: Some(1) });
	}

	#[test]
	fn other_signal_deaths_are_not_interrupts() {
		assert_eq!(outcome_for_exit(status(libc::SIGKILL), false), Outcome::Exited { code: None });
	}
}
