#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "bytetree", about = "Encode JSON documents as ByteTree streams")]
struct Cli {
	/// Increase log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a JSON document into a ByteTree stream.
	Encode(cmd::encode::Args),
	/// Report the structure a JSON document would encode to.
	Stats(cmd::stats::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> bytetree::tree::Result<()> {
	match command {
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Stats(args) => cmd::stats::run(args),
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	env_logger::Builder::new().filter_level(level).parse_env("RUST_LOG").init();
}
