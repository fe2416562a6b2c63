//! Final result reporting.
//!
//! Human-readable lines by default; a JSON envelope on stdout for machine
//! consumption with `--format json`. Errors always get a line on stderr.

use colored::Colorize;
use devserve::{Error, LaunchAttempt, LaunchConfig, LaunchReport};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text
	#[default]
	Text,
	/// JSON envelope
	Json,
}

#[derive(Serialize)]
struct SuccessEnvelope<'a> {
	ok: bool,
	data: &'a LaunchReport,
}

#[derive(Serialize)]
struct FailureEnvelope<'a> {
	ok: bool,
	error: FailureBody<'a>,
}

#[derive(Serialize)]
struct FailureBody<'a> {
	code: &'static str,
	message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	attempts: Option<&'a [LaunchAttempt]>,
}

fn error_code(err: &Error) -> &'static str {
	match err {
		Error::MissingAssets { .. } => "MISSING_ASSETS",
		Error::AllBackendsFailed { .. } => "BACKENDS_EXHAUSTED",
	}
}

fn success_json(report: &LaunchReport) -> String {
	let envelope = SuccessEnvelope { ok: true, data: report };
	serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
}

fn failure_json(err: &Error) -> String {
	let attempts = match err {
		Error::AllBackendsFailed { attempts, .. } => Some(attempts.as_slice()),
		Error::MissingAssets { .. } => None,
	};
	let envelope = FailureEnvelope {
		ok: false,
		error: FailureBody { code: error_code(err), message: err.to_string(), attempts },
	};
	serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
}

pub fn print_banner(config: &LaunchConfig) {
	println!("{}", "devserve - local static-file server launcher".bold());
	println!("{}", "=".repeat(46).dimmed());
	println!("serving {}", config.working_dir.display().to_string().cyan());
	println!();
}

pub fn print_success(report: &LaunchReport, format: OutputFormat) {
	match format {
		OutputFormat::Text => {
			println!();
			println!("{} server run finished", "✓".green().bold());
			println!("  {} served {}", report.backend, report.url.cyan());
		}
		OutputFormat::Json => println!("{}", success_json(report)),
	}
}

pub fn print_failure(err: &Error, format: OutputFormat) {
	eprintln!("{} {err}", "✗".red().bold());
	if format == OutputFormat::Json {
		println!("{}", failure_json(err));
	}
}
