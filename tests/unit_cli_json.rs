#![allow(missing_docs)]

use std::process::{Command, Output};

use bytetree_testkit::{fixture_path, hex, unhex};
use serde_json::Value;

#[test]
fn encode_prints_hex_stream_by_default() {
	let output = run(&["encode", &fixture("point.json")]);

	assert!(output.status.success(), "encode should succeed");
	let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
	assert_eq!(stdout.trim(), "01 00 00 00 02 00 00 00 04 00 00 00 01 00 00 00 04 00 00 00 02 00 00 00");
}

#[test]
fn encode_json_summary_reports_structure() {
	let json = run_json(&["encode", &fixture("module.json"), "--version", "3", "--json"]);

	assert_eq!(json["version"], 3);
	assert_eq!(json["objects"], 4);
	assert_eq!(json["scalars"], 9);
	assert_eq!(json["max_depth"], 3);
	let hex_text = json["hex"].as_str().expect("hex string");
	assert!(hex_text.starts_with("03 00 00 00 04 00 00 00"), "version then root field count");
	assert_eq!(json["bytes"].as_u64(), Some(unhex(hex_text).len() as u64));
}

#[test]
fn encode_out_writes_raw_stream() {
	let out = std::env::temp_dir().join(format!("bytetree-cli-{}.bin", std::process::id()));
	let out_arg = out.display().to_string();
	let output = run(&["encode", &fixture("point.json"), "--out", &out_arg]);

	assert!(output.status.success(), "encode --out should succeed");
	assert!(output.stdout.is_empty(), "no hex when writing a file");
	let written = std::fs::read(&out).expect("output file exists");
	let _ = std::fs::remove_file(&out);
	assert_eq!(hex(&written), "01 00 00 00 02 00 00 00 04 00 00 00 01 00 00 00 04 00 00 00 02 00 00 00");
}

#[test]
fn encode_out_with_json_writes_file_and_summary() {
	let out = std::env::temp_dir().join(format!("bytetree-cli-json-{}.bin", std::process::id()));
	let out_arg = out.display().to_string();
	let json = run_json(&["encode", &fixture("point.json"), "--out", &out_arg, "--json"]);

	let written = std::fs::read(&out).expect("output file exists");
	let _ = std::fs::remove_file(&out);
	assert_eq!(json["hex"].as_str(), Some(hex(&written).as_str()));
	assert_eq!(json["bytes"].as_u64(), Some(written.len() as u64));
}

#[test]
fn stats_json_matches_encode_summary() {
	let json = run_json(&["stats", &fixture("module.json"), "--json"]);

	assert_eq!(json["objects"], 4);
	assert_eq!(json["scalars"], 9);
	assert_eq!(json["max_depth"], 3);
}

#[test]
fn scalar_root_fails_with_error_message() {
	let output = run(&["encode", &fixture("scalar_root.json")]);

	assert!(!output.status.success(), "scalar root should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: document root must be an object or array, got string"), "stderr: {stderr}");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_bytetree")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(output.status.success(), "command should succeed");
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}
