#![deny(missing_docs)]
#![doc = "Core identifiers, problem tags, errors and random sources for the hyperstate engine."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, HsvError};
pub use rng::{derive_substream_seed, RandomSource, RngHandle, ScriptedSource};
pub use types::{Task, TopologyKind};

/// Identifier for a node within a relaxation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a new identifier from its raw index.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw index of the identifier.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
