pub mod benchmark;
pub mod optimize;
pub mod shell;
pub mod version;

use std::path::{Path, PathBuf};

use clap::Args;
use hsv_core::{HsvError, TopologyKind};
use hsv_relax::SessionConfig;
use hsv_sim::Session;

/// Loads the YAML config if given and applies a seed override.
pub fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<SessionConfig, HsvError> {
    let mut config = match path {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed_policy.master_seed = seed;
    }
    Ok(config)
}

/// Problem instance shared by the one-shot subcommands.
#[derive(Args, Debug)]
pub struct InstanceArgs {
    /// Number of nodes in the layer.
    #[arg(long)]
    pub nodes: usize,
    /// Number of discrete states per node.
    #[arg(long)]
    pub states: usize,
    /// Coupling topology (fully_connected or ring).
    #[arg(long, default_value = "fully_connected")]
    pub topology: TopologyKind,
    /// Master seed; overrides the config file.
    #[arg(long)]
    pub seed: Option<u64>,
    /// YAML session configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl InstanceArgs {
    /// Builds a session holding a freshly drawn layer.
    pub fn session(&self) -> Result<Session, HsvError> {
        let mut session = Session::new(load_config(self.config.as_deref(), self.seed)?);
        session.init(self.nodes, self.states)?;
        if self.topology != TopologyKind::FullyConnected {
            session.set_topology(self.topology)?;
        }
        Ok(session)
    }
}
