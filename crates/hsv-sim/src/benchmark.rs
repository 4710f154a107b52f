//! Engine-versus-oracle comparison on a single problem instance.

use hsv_core::{ErrorInfo, HsvError, RandomSource, Task};
use hsv_oracle::{assignment_count, exhaustive_search, hill_climb, OracleOutcome};
use hsv_relax::{kernel, AnnealConfig, AnnealReport, BenchmarkConfig, Layer};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Results of relaxing a layer and running both oracles on its instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Objective compared.
    pub task: Task,
    /// Nodes in the benchmarked layer.
    pub num_nodes: usize,
    /// States per node.
    pub num_states: usize,
    /// Engine run, including the zero-iteration baseline.
    pub relax: AnnealReport,
    /// Exhaustive optimum, absent when the joint state space exceeded the cap.
    pub exhaustive: Option<OracleOutcome>,
    /// `num_states ^ num_nodes`, absent on overflow.
    pub assignment_count: Option<u64>,
    /// Enumeration cap in force.
    pub max_assignments: u64,
    /// Hill climbing result.
    pub hill_climbing: OracleOutcome,
}

impl BenchmarkReport {
    /// Oracle iterations per engine iteration.
    pub fn advantage(&self, outcome: &OracleOutcome) -> Option<f64> {
        (self.relax.iterations > 0).then(|| outcome.iterations as f64 / self.relax.iterations as f64)
    }

    /// `score` as a percentage of the exhaustive optimum.
    ///
    /// `None` when `score` is zero, when the exhaustive run was skipped, or
    /// when the optimum itself is zero.
    pub fn percentage_of_optimal(&self, score: f64) -> Option<f64> {
        let optimum = self.exhaustive.as_ref()?.score;
        if score == 0.0 || optimum == 0.0 {
            return None;
        }
        Some(score / optimum * 100.0)
    }

    /// Serialises the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, HsvError> {
        serde_json::to_string_pretty(self).map_err(|err| {
            HsvError::Config(ErrorInfo::new("report-serialize", err.to_string()))
        })
    }
}

/// Anneals `layer` in place, then scores its instance with both oracles.
///
/// The oracles only read fields and couplings, so running them after the
/// engine does not change what they see.
pub fn run_benchmark(
    layer: &mut Layer,
    task: Task,
    config: &BenchmarkConfig,
    source: &mut impl RandomSource,
) -> Result<BenchmarkReport, HsvError> {
    let relax = kernel::run(
        layer,
        &AnnealConfig {
            iterations: config.relax_iterations,
            initial_temperature: config.relax_temperature,
            task,
        },
    );

    let count = assignment_count(layer.num_nodes(), layer.num_states());
    let exhaustive = match count {
        Some(total) if total <= config.max_assignments => {
            Some(exhaustive_search(layer, task, config.max_assignments)?)
        }
        _ => {
            info!(
                num_nodes = layer.num_nodes(),
                num_states = layer.num_states(),
                cap = config.max_assignments,
                "skipping exhaustive search"
            );
            None
        }
    };
    let hill_climbing = hill_climb(layer, task, config.hill_climb_iterations, source)?;

    Ok(BenchmarkReport {
        task,
        num_nodes: layer.num_nodes(),
        num_states: layer.num_states(),
        relax,
        exhaustive,
        assignment_count: count,
        max_assignments: config.max_assignments,
        hill_climbing,
    })
}
