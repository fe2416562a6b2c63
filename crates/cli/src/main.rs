use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use devserve::{LaunchConfig, ServerBackend, ServerMode};
use devserve_cli::cli::Cli;
use devserve_cli::{logging, output, prompt};
use tokio_util::sync::CancellationToken;
use tracing::warn;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	// One interrupt watcher for the whole run; every suspension point
	// (menu read, child process wait) races against this token.
	let cancel = CancellationToken::new();
	{
		let cancel = cancel.clone();
		tokio::spawn(async move {
			if tokio::signal::ctrl_c().await.is_ok() {
				cancel.cancel();
			}
		});
	}

	let working_dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
	let config = LaunchConfig::new(working_dir);

	output::print_banner(&config);

	let mode: ServerMode = match cli.mode {
		Some(arg) => arg.into(),
		None => match prompt::read_mode(&cancel).await {
			Some(mode) => mode,
			None => {
				println!();
				println!("{}", "cancelled".yellow());
				return;
			}
		},
	};

	println!("{}", "press Ctrl+C to stop the server".dimmed());

	let candidates = mode.candidates();
	let refs: Vec<&dyn ServerBackend> = candidates.iter().map(|b| b as &dyn ServerBackend).collect();

	match devserve::run_launch(&config, &refs, &cancel).await {
		Ok(report) => {
			output::print_success(&report, cli.format);
			if !cli.no_browser {
				if let Err(err) =
					devserve::browser::open_after_delay(&report.url, config.browser_delay).await
				{
					warn!(error = %err, "could not open browser");
					println!("{} open {} manually", "!".yellow().bold(), report.url.cyan());
				}
			}
		}
		Err(err) => {
			output::print_failure(&err, cli.format);
			std::process::exit(1);
		}
	}
}
