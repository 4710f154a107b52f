use std::error::Error;
use std::io;

use clap::Args;
use hsv_core::Task;
use hsv_relax::AnnealConfig;
use hsv_sim::report;

use super::InstanceArgs;

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub instance: InstanceArgs,
    /// Annealing steps to run.
    #[arg(long)]
    pub iterations: usize,
    /// Schedule scale; defaults to the config's `anneal.initial_temperature`.
    #[arg(long)]
    pub temperature: Option<f64>,
    /// Objective (ising or maxcut); defaults to the config's `anneal.task`.
    #[arg(long)]
    pub task: Option<Task>,
    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &OptimizeArgs) -> Result<(), Box<dyn Error>> {
    let mut session = args.instance.session()?;
    let defaults = &session.config().anneal;
    let config = AnnealConfig {
        iterations: args.iterations,
        initial_temperature: args.temperature.unwrap_or(defaults.initial_temperature),
        task: args.task.unwrap_or(defaults.task),
    };
    let report = session.optimize(&config)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        report::write_optimize(&mut io::stdout().lock(), &report)?;
    }
    Ok(())
}
