use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Parser, ValueEnum};
use devserve::{BackendKind, ServerMode};

use crate::output::OutputFormat;

/// Backend selection, mirroring the interactive menu choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
	/// Python http.server (recommended)
	#[value(name = "1", alias = "python")]
	Python,
	/// npx serve
	#[value(name = "2", alias = "node")]
	Node,
	/// PHP built-in server
	#[value(name = "3", alias = "php")]
	Php,
	/// Try each backend in order
	#[value(name = "4", alias = "auto")]
	Auto,
}

impl From<ModeArg> for ServerMode {
	fn from(arg: ModeArg) -> Self {
		match arg {
			ModeArg::Python => ServerMode::Explicit(BackendKind::HttpServer),
			ModeArg::Node => ServerMode::Explicit(BackendKind::NodeStatic),
			ModeArg::Php => ServerMode::Explicit(BackendKind::PhpBuiltin),
			ModeArg::Auto => ServerMode::Auto,
		}
	}
}

#[derive(Parser, Debug)]
#[command(name = "devserve")]
#[command(about = "Launch a local static-file dev server with automatic fallback")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v debug, -vv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format for the final result
	#[arg(short = 'f', long, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// Backend to launch (1/python, 2/node, 3/php, 4/auto); prompts when omitted
	#[arg(short, long, value_enum)]
	pub mode: Option<ModeArg>,

	/// Directory to serve (defaults to the current directory)
	#[arg(long, value_name = "PATH")]
	pub dir: Option<PathBuf>,

	/// Do not open the browser after a successful run
	#[arg(long)]
	pub no_browser: bool,
}

/// Cargo-style help colors.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
}
