//! Launch configuration.
//!
//! A single explicit value carries everything the launch sequence needs, so
//! components never read module-level or ambient state.

use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

/// Asset files that must exist in the document root before any server is
/// launched. Fixed and case-sensitive for the life of the program.
pub const DEFAULT_REQUIRED_ASSETS: [&str; 3] = ["index.html", "script.js", "style.css"];

/// Ports probed for availability, in ascending order.
pub const DEFAULT_PORT_RANGE: Range<u16> = 8000..8010;

/// Port used unverified when nothing in the range binds.
pub const DEFAULT_FALLBACK_PORT: u16 = 8000;

/// Pause before asking the OS to open the browser.
pub const DEFAULT_BROWSER_DELAY: Duration = Duration::from_secs(2);

/// Everything one launch run needs, owned for the life of that run.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
	/// Asset root and served document root.
	pub working_dir: PathBuf,
	/// File names that must exist under `working_dir`.
	pub required_assets: Vec<String>,
	/// Candidate ports, probed in ascending order.
	pub port_range: Range<u16>,
	/// Used unverified when no port in the range binds.
	pub fallback_port: u16,
	/// Delay before the browser is opened.
	pub browser_delay: Duration,
}

impl LaunchConfig {
	/// Default configuration serving `working_dir`.
	pub fn new(working_dir: PathBuf) -> Self {
		Self {
			working_dir,
			required_assets: DEFAULT_REQUIRED_ASSETS.iter().map(|s| s.to_string()).collect(),
			port_range: DEFAULT_PORT_RANGE,
			fallback_port: DEFAULT_FALLBACK_PORT,
			browser_delay: DEFAULT_BROWSER_DELAY,
		}
	}
}

impl Default for LaunchConfig {
	fn default() -> Self {
		Self::new(PathBuf::from("."))
	}
}

/// URL the launched server is reachable at.
pub fn serve_url(port: u16) -> String {
	format!("http://localhost:{port}")
}
