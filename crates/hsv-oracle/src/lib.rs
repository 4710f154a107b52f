#![deny(missing_docs)]

//! Reference optimisers for comparing against [`hsv_relax::Layer::anneal`].
//!
//! Both oracles read the layer's fields and couplings and score joint
//! assignments with [`hsv_relax::Layer::assignment_score`]; neither touches the
//! layer's hyperstates.

use serde::{Deserialize, Serialize};

/// Exhaustive enumeration of every joint assignment.
pub mod exhaustive;
/// Greedy single-node hill climbing.
pub mod hill_climb;

pub use exhaustive::{assignment_count, exhaustive_search};
pub use hill_climb::hill_climb;

/// Which reference algorithm produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OracleMethod {
    /// Full enumeration of the joint state space.
    Exhaustive,
    /// Random single-node replacement accepted on strict improvement.
    HillClimbing,
}

/// Best total found by an oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleOutcome {
    /// Algorithm that produced the result.
    pub method: OracleMethod,
    /// Lowest score total reached.
    pub score: f64,
    /// Joint assignment achieving `score`.
    pub assignment: Vec<usize>,
    /// Assignments visited (exhaustive) or iterations performed (hill climbing).
    pub iterations: u64,
    /// Wall time spent.
    pub elapsed_seconds: f64,
}
