//! Launch orchestration for local static-file development servers.
//!
//! Everything with decision-making lives here: verifying that a project's
//! required assets exist, probing for a free loopback port, launching one of
//! several interchangeable server backends as a foreground child process, and
//! falling back to the next candidate when one cannot run. The companion CLI
//! crate layers banners, the interactive menu, and exit-code reporting on top.
//!
//! All configuration is threaded explicitly through [`LaunchConfig`]; nothing
//! reads ambient process state beyond the working directory handed to it.

pub mod assets;
pub mod backend;
pub mod browser;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod port;

pub use backend::{BackendKind, Outcome, ProcessBackend, ServerBackend};
pub use config::{LaunchConfig, serve_url};
pub use error::{Error, Result};
pub use orchestrator::{LaunchAttempt, LaunchReport, ServerMode, run_launch};
