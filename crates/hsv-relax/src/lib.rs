#![deny(missing_docs)]

//! Mean-field relaxation of discrete pairwise optimisation problems.
//!
//! Each node carries a distribution over its states. A [`Layer`] step first
//! recomputes every distribution from a Boltzmann weighting of local energies
//! and then diffuses probability mass along the couplings, both phases in
//! ascending node order with in-place writes. [`Layer::anneal`] repeats the
//! step under a decaying temperature and reads out the summed node scores.

/// YAML configuration schema and defaults.
pub mod config;
/// Annealing entry point producing serialisable reports.
pub mod kernel;
/// Node collection, two-phase step and annealing loop.
pub mod layer;
/// Per-node update, diffusion and scoring rules.
pub mod node;
/// Stable softmax, clipping and distribution checks.
pub mod numeric;
/// Temperature schedules.
pub mod schedule;
/// Neighbour derivation and coupling sampling.
pub mod topology;

pub use config::{AnnealConfig, BenchmarkConfig, FieldRange, LayerConfig, SeedPolicy, SessionConfig};
pub use kernel::{run, AnnealReport};
pub use layer::Layer;
pub use node::{Link, Node};
pub use schedule::{Schedule, ScheduleKind, TEMPERATURE_FLOOR};
pub use topology::CouplingRule;
