//! Loopback port probing.

use std::net::TcpListener;
use std::ops::Range;

use tracing::debug;

/// Return the first port in `range` that accepts a loopback bind, probing in
/// ascending order. The probe listener is dropped as soon as the bind
/// succeeds; nothing holds the port between selection and use, so another
/// process can still grab it first.
///
/// When no port in the range binds, `fallback` is returned without being
/// re-validated. Best effort, inherited from the tool this replaces.
pub fn find_free_port(range: Range<u16>, fallback: u16) -> u16 {
	for port in range {
		match TcpListener::bind(("127.0.0.1", port)) {
			Ok(_probe) => {
				debug!(target = "devserve", port, "port is free");
				return port;
			}
			Err(err) => {
				debug!(target = "devserve", port, error = %err, "port unavailable");
			}
		}
	}
	fallback
}
