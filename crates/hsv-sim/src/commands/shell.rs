use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Args;
use hsv_sim::{run_shell, Session};
use tracing::info;

use super::load_config;

#[derive(Args, Debug, Default)]
pub struct ShellArgs {
    /// YAML session configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed; overrides the config file.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &ShellArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref(), args.seed)?;
    info!(master_seed = config.seed_policy.master_seed, "starting shell");
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&mut session, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
