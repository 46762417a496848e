#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "glbframe", about = "Binary glTF (GLB) container inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print container kind, header fields, and chunk statistics.
	Info(cmd::info::Args),
	/// List every chunk with its offset, length, and type.
	Chunks(cmd::chunks::Args),
	/// Write one chunk payload to a file or stdout.
	Extract(cmd::extract::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> glbframe::glb::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Chunks(args) => cmd::chunks::run(args),
		Commands::Extract(args) => cmd::extract::run(args),
	}
}
