use std::path::PathBuf;

use bytetree::tree::{JsonStats, Result};

use crate::cmd::util::{emit_json, load_document};

#[derive(clap::Args)]
pub struct Args {
	/// JSON document to inspect.
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the object/scalar counts a document would encode to.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let document = load_document(&path)?;
	let stats = JsonStats::collect(&document);

	if json {
		return emit_json(&stats);
	}

	println!("path: {}", path.display());
	println!("objects: {}", stats.objects);
	println!("scalars: {}", stats.scalars);
	println!("max_depth: {}", stats.max_depth);
	Ok(())
}
