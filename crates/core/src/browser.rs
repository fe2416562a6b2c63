//! Best-effort browser launch.

use std::io;
use std::time::Duration;

use tracing::info;

/// Wait `delay`, then ask the OS to open `url` in the default browser.
///
/// Callers treat failure as a warning; it never changes the exit status.
pub async fn open_after_delay(url: &str, delay: Duration) -> io::Result<()> {
	tokio::time::sleep(delay).await;
	info!(target = "devserve", url, "opening browser");
	open::that(url)
}
