//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Load and parse a JSON fixture.
pub fn fixture_json(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let raw = std::fs::read(&path).unwrap_or_else(|err| panic!("read fixture {}: {err}", path.display()));
	serde_json::from_slice(&raw).unwrap_or_else(|err| panic!("parse fixture {}: {err}", path.display()))
}

/// Render bytes as space-separated lowercase hex pairs.
pub fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect::<Vec<_>>().join(" ")
}

/// Parse whitespace-separated hex pairs, as written in byte-layout tables.
pub fn unhex(text: &str) -> Vec<u8> {
	text.split_whitespace()
		.map(|pair| u8::from_str_radix(pair, 16).unwrap_or_else(|_| panic!("invalid hex byte {pair:?}")))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_and_unhex_agree() {
		let bytes = unhex("01 00 ff\n 7a");
		assert_eq!(bytes, [0x01, 0x00, 0xff, 0x7a]);
		assert_eq!(hex(&bytes), "01 00 ff 7a");
	}
}
