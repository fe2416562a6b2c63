//! Prerequisite asset checks.

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// Verify that every name in `required` exists under `working_dir`.
///
/// Collects all missing names, in input order, instead of stopping at the
/// first miss, so one run surfaces every problem.
pub fn check_required_assets(working_dir: &Path, required: &[String]) -> Result<()> {
	let missing: Vec<String> = required
		.iter()
		.filter(|name| !working_dir.join(name.as_str()).exists())
		.cloned()
		.collect();

	if missing.is_empty() {
		info!(target = "devserve", "all required files present");
		Ok(())
	} else {
		Err(Error::MissingAssets { missing })
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	fn names(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn reports_every_missing_file_in_input_order() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("script.js"), "// app").unwrap();

		let err = check_required_assets(dir.path(), &names(&["index.html", "script.js", "style.css"]))
			.unwrap_err();
		match err {
			Error::MissingAssets { missing } => {
				assert_eq!(missing, vec!["index.html", "style.css"]);
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn succeeds_when_all_files_present() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["index.html", "script.js", "style.css"] {
			fs::write(dir.path().join(name), "").unwrap();
		}

		check_required_assets(dir.path(), &names(&["index.html", "script.js", "style.css"]))
			.unwrap();
	}

	#[test]
	fn present_files_never_appear_in_the_error() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

		let err = check_required_assets(dir.path(), &names(&["index.html", "style.css"])).unwrap_err();
		match err {
			Error::MissingAssets { missing } => {
				assert_eq!(missing, vec!["style.css"]);
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn empty_requirement_list_always_succeeds() {
		let dir = tempfile::tempdir().unwrap();
		check_required_assets(dir.path(), &[]).unwrap();
	}
}
