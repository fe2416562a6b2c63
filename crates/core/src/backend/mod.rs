//! Interchangeable static-file server backends.
//!
//! Each backend wraps one external program that can serve the working
//! directory over HTTP. Backends are opaque: only their availability and
//! process-exit contract matters here.

mod process;

pub use process::ProcessBackend;

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// How a single launch attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
	/// The operator stopped the running server. Counts as success: the
	/// server did its job until the user chose to stop it.
	Interrupted,
	/// The child exited on its own. `code` is `None` when it was killed by
	/// a signal other than an operator interrupt.
	Exited { code: Option<i32> },
	/// The backend program could not be resolved or spawned.
	Unavailable { cause: String },
}

impl Outcome {
	pub fn is_success(&self) -> bool {
		matches!(self, Outcome::Interrupted | Outcome::Exited { code: Some(0) })
	}

	/// Human-readable cause, `None` for success outcomes.
	pub fn cause(&self) -> Option<String> {
		match self {
			Outcome::Interrupted | Outcome::Exited { code: Some(0) } => None,
			Outcome::Exited { code: Some(code) } => {
				Some(format!("server exited with status {code}"))
			}
			Outcome::Exited { code: None } => Some("server was killed by a signal".to_string()),
			Outcome::Unavailable { cause } => Some(cause.clone()),
		}
	}
}

/// A server backend: runs one child process serving `working_dir` on the
/// given port and stays at the await point until that child is done.
///
/// Implementations must report cancellation as [`Outcome::Interrupted`] and
/// must not leave the child running on any exit path.
#[async_trait]
pub trait ServerBackend: Send + Sync {
	/// Short display name, e.g. `"python http.server"`.
	fn name(&self) -> &'static str;

	async fn launch(&self, port: u16, working_dir: &Path, cancel: &CancellationToken) -> Outcome;
}

/// The known backend programs, in auto-mode priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
	/// Generic static-file HTTP server (`python3 -m http.server`).
	HttpServer,
	/// Node-ecosystem static server (`npx serve`).
	NodeStatic,
	/// PHP built-in web server (`php -S`).
	PhpBuiltin,
}

impl BackendKind {
	/// Fallback order for auto mode.
	pub const AUTO_ORDER: [BackendKind; 3] =
		[BackendKind::HttpServer, BackendKind::NodeStatic, BackendKind::PhpBuiltin];

	pub fn name(self) -> &'static str {
		match self {
			BackendKind::HttpServer => "python http.server",
			BackendKind::NodeStatic => "npx serve",
			BackendKind::PhpBuiltin => "php built-in server",
		}
	}

	pub(crate) fn program(self) -> &'static str {
		match self {
			BackendKind::HttpServer => "python3",
			BackendKind::NodeStatic => "npx",
			BackendKind::PhpBuiltin => "php",
		}
	}

	pub(crate) fn args(self, port: u16) -> Vec<String> {
		match self {
			BackendKind::HttpServer => {
				vec!["-m".to_string(), "http.server".to_string(), port.to_string()]
			}
			BackendKind::NodeStatic => {
				vec!["serve".to_string(), ".".to_string(), "-p".to_string(), port.to_string()]
			}
			BackendKind::PhpBuiltin => {
				vec!["-S".to_string(), format!("localhost:{port}")]
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn interrupt_and_clean_exit_are_success() {
		assert!(Outcome::Interrupted.is_success());
		assert!(Outcome::Exited { code: Some(0) }.is_success());
	}

	#[test]
	fn error_exit_and_unavailable_are_failures_with_a_cause() {
		let exited = Outcome::Exited { code: Some(1) };
		assert!(!exited.is_success());
		assert_eq!(exited.cause().as_deref(), Some("server exited with status 1"));

		let unavailable = Outcome::Unavailable { cause: "php not found".to_string() };
		assert!(!unavailable.is_success());
		assert_eq!(unavailable.cause().as_deref(), Some("php not found"));
	}

	#[test]
	fn success_outcomes_have_no_cause() {
		assert_eq!(Outcome::Interrupted.cause(), None);
		assert_eq!(Outcome::Exited { code: Some(0) }.cause(), None);
	}

	#[test]
	fn http_server_takes_the_port_as_final_argument() {
		assert_eq!(BackendKind::HttpServer.args(8005), vec!["-m", "http.server", "8005"]);
	}

	#[test]
	fn node_static_passes_the_port_flag() {
		assert_eq!(BackendKind::NodeStatic.args(8005), vec!["serve", ".", "-p", "8005"]);
	}

	#[test]
	fn php_binds_localhost_with_the_port() {
		assert_eq!(BackendKind::PhpBuiltin.args(8005), vec!["-S", "localhost:8005"]);
	}

	#[test]
	fn auto_order_is_python_node_php() {
		assert_eq!(
			BackendKind::AUTO_ORDER.map(BackendKind::program),
			["python3", "npx", "php"]
		);
	}
}
