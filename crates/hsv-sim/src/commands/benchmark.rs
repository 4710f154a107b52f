use std::error::Error;
use std::io;

use clap::Args;
use hsv_core::Task;
use hsv_sim::report;

use super::InstanceArgs;

#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    #[command(flatten)]
    pub instance: InstanceArgs,
    /// Objective (ising or maxcut).
    #[arg(long, default_value = "ising")]
    pub task: Task,
    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &BenchmarkArgs) -> Result<(), Box<dyn Error>> {
    let mut session = args.instance.session()?;
    let report = session.benchmark(args.task)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        report::write_benchmark(&mut io::stdout().lock(), &report)?;
    }
    Ok(())
}
