//! Interactive backend selection.

use std::io::Write;

use colored::Colorize;
use devserve::{BackendKind, ServerMode};
use tokio_util::sync::CancellationToken;

/// Map a menu entry to its mode. Anything unrecognized (including blank)
/// falls back to the default choice.
pub fn parse_choice(input: &str) -> ServerMode {
	match input.trim() {
		"2" => ServerMode::Explicit(BackendKind::NodeStatic),
		"3" => ServerMode::Explicit(BackendKind::PhpBuiltin),
		"4" => ServerMode::Auto,
		_ => ServerMode::Explicit(BackendKind::HttpServer),
	}
}

/// Print the menu and read one selection, racing the blocking stdin read
/// against cancellation. Returns `None` when the operator interrupts; the
/// caller exits 0 in that case.
pub async fn read_mode(cancel: &CancellationToken) -> Option<ServerMode> {
	println!("Select a server backend:");
	println!("  {} Python http.server {}", "1.".cyan(), "(recommended)".dimmed());
	println!("  {} npx serve", "2.".cyan());
	println!("  {} PHP built-in server", "3.".cyan());
	println!("  {} Auto (try each in order)", "4.".cyan());
	print!("Choice [1-4, default 1]: ");
	let _ = std::io::stdout().flush();

	let read = tokio::task::spawn_blocking(|| {
		let mut input = String::new();
		std::io::stdin().read_line(&mut input).ok().map(|_| input)
	});

	tokio::select! {
		line = read => line.ok().flatten().map(|input| parse_choice(&input)),
		_ = cancel.cancelled() => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbered_choices_map_to_their_backend() {
		assert_eq!(parse_choice("1"), ServerMode::Explicit(BackendKind::HttpServer));
		assert_eq!(parse_choice("2"), ServerMode::Explicit(BackendKind::NodeStatic));
		assert_eq!(parse_choice("3"), ServerMode::Explicit(BackendKind::PhpBuiltin));
		assert_eq!(parse_choice("4"), ServerMode::Auto);
	}

	#[test]
	fn blank_input_selects_the_default() {
		assert_eq!(parse_choice(""), ServerMode::Explicit(BackendKind::HttpServer));
		assert_eq!(parse_choice("\n"), ServerMode::Explicit(BackendKind::HttpServer));
	}

	#[test]
	fn surrounding_whitespace_is_ignored() {
		assert_eq!(parse_choice("  4  \n"), ServerMode::Auto);
	}

	#[test]
	fn unknown_input_falls_back_to_the_default() {
		assert_eq!(parse_choice("9"), ServerMode::Explicit(BackendKind::HttpServer));
		assert_eq!(parse_choice("nope"), ServerMode::Explicit(BackendKind::HttpServer));
	}
}
