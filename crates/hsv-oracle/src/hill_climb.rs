use std::time::Instant;

use hsv_core::{HsvError, RandomSource, Task};
use hsv_relax::Layer;
use tracing::debug;

use crate::{OracleMethod, OracleOutcome};

/// Greedy search over joint assignments from a random start.
///
/// Each iteration redraws the state of one random node and keeps it only when
/// the total strictly decreases. Always runs `max_iterations` iterations.
pub fn hill_climb(
    layer: &Layer,
    task: Task,
    max_iterations: usize,
    source: &mut impl RandomSource,
) -> Result<OracleOutcome, HsvError> {
    let num_nodes = layer.num_nodes();
    let num_states = layer.num_states();
    debug!(%task, max_iterations, "hill climbing");

    let start = Instant::now();
    let mut assignment: Vec<usize> = (0..num_nodes).map(|_| source.index(num_states)).collect();
    let mut current = layer.assignment_score(&assignment, task)?;
    let mut iterations = 0u64;
    for _ in 0..max_iterations {
        iterations += 1;
        let node = source.index(num_nodes);
        let previous = assignment[node];
        assignment[node] = source.index(num_states);
        let candidate = layer.assignment_score(&assignment, task)?;
        if candidate < current {
            current = candidate;
        } else {
            assignment[node] = previous;
        }
    }

    Ok(OracleOutcome {
        method: OracleMethod::HillClimbing,
        score: current,
        assignment,
        iterations,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    })
}
