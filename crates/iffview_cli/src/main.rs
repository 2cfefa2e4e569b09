#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

/// Log directive used when `RUST_LOG` is unset; matches every `iffview*` target.
const DEFAULT_LOG_FILTER: &str = "iffview=warn";

#[derive(Parser)]
#[command(name = "iffview", about = "IFF chunk inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize the top-level chunk and whole-tree statistics.
	Info(cmd::info::Args),
	/// Print the chunk tree depth-first.
	Tree(cmd::tree::Args),
	/// Show one chunk selected by path, with a payload hex dump.
	Show(cmd::show::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run() -> iffview::iff::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Show(args) => cmd::show::run(args),
	}
}
