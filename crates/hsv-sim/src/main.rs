use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    benchmark::{self, BenchmarkArgs},
    optimize::{self, OptimizeArgs},
    shell::{self, ShellArgs},
    version,
};
use tracing_subscriber::filter::LevelFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "hsv-sim", about = "Hyperstate relaxation engine CLI")]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive shell (default).
    Shell(ShellArgs),
    /// Draw one instance, anneal it and print both totals.
    Optimize(OptimizeArgs),
    /// Compare the engine with the exhaustive and hill climbing oracles.
    Benchmark(BenchmarkArgs),
    /// Print the crate version.
    Version,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Shell(ShellArgs::default())) {
        Command::Shell(args) => shell::run(&args),
        Command::Optimize(args) => optimize::run(&args),
        Command::Benchmark(args) => benchmark::run(&args),
        Command::Version => version::run(),
    }
}
