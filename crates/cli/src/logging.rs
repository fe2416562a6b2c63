use tracing_subscriber::EnvFilter;

/// 0 = progress (info), 1 (-v) = debug, 2+ = trace.
///
/// Logs go to stderr without timestamps so stdout stays clean for the result
/// envelope and the child server's own output.
pub fn init_logging(verbosity: u8) {
	let filter = match verbosity {
		0 => "info",
		1 => "debug",
		_ => "trace",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.compact()
		.init();
}
