use std::path::Path;

use bytetree::tree::Result;
use serde::Serialize;
use serde_json::Value;

/// Read and parse a JSON document from `path`.
pub(crate) fn load_document(path: &Path) -> Result<Value> {
	let raw = std::fs::read(path)?;
	Ok(serde_json::from_slice(&raw)?)
}

/// Render bytes as space-separated lowercase hex pairs.
pub(crate) fn hex(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 3);
	for (idx, byte) in bytes.iter().enumerate() {
		if idx > 0 {
			out.push(' ');
		}
		out.push_str(&format!("{byte:02x}"));
	}
	out
}

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
