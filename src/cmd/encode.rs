use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use bytetree::tree::{JsonStats, Result, Sink, StreamSink, encode_json, encode_json_into};
use log::info;
use serde::Serialize;

use crate::cmd::util::{emit_json, hex, load_document};

#[derive(clap::Args)]
pub struct Args {
	/// JSON document to encode.
	pub path: PathBuf,
	/// Version tag written ahead of the root object.
	#[arg(long = "version", default_value_t = 1)]
	pub format_version: u32,
	/// Write the raw stream to this file instead of printing hex.
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct EncodeJson {
	path: String,
	version: u32,
	bytes: usize,
	objects: usize,
	scalars: usize,
	max_depth: usize,
	hex: String,
}

/// Encode one JSON document and print or store the stream.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		format_version,
		out,
		json,
	} = args;

	let document = load_document(&path)?;

	if let (Some(out), false) = (out.as_deref(), json) {
		let mut sink = StreamSink::new(BufWriter::new(File::create(out)?));
		encode_json_into(format_version, &document, &mut sink)?;
		let written = sink.offset();
		sink.into_inner()?;
		info!("wrote {written} bytes to {}", out.display());
		return Ok(());
	}

	let bytes = encode_json(format_version, &document)?;
	info!("encoded {} into {} bytes", path.display(), bytes.len());

	if let Some(out) = out.as_deref() {
		let mut sink = StreamSink::new(BufWriter::new(File::create(out)?));
		sink.write_bytes(&bytes)?;
		sink.into_inner()?;
		info!("wrote {}", out.display());
	}

	if json {
		let stats = JsonStats::collect(&document);
		return emit_json(&EncodeJson {
			path: path.display().to_string(),
			version: format_version,
			bytes: bytes.len(),
			objects: stats.objects,
			scalars: stats.scalars,
			max_depth: stats.max_depth,
			hex: hex(&bytes),
		});
	}

	println!("{}", hex(&bytes));
	Ok(())
}
