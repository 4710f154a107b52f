use std::time::Instant;

use hsv_core::{ErrorInfo, HsvError, Task};
use hsv_relax::Layer;
use tracing::debug;

use crate::{OracleMethod, OracleOutcome};

/// Size of the joint state space, `num_states ^ num_nodes`, if it fits in a `u64`.
pub fn assignment_count(num_nodes: usize, num_states: usize) -> Option<u64> {
    let exponent = u32::try_from(num_nodes).ok()?;
    (num_states as u64).checked_pow(exponent)
}

/// Scores every joint assignment and returns the lowest total.
///
/// Assignments are visited in lexicographic order with the last node varying
/// fastest; the first minimum wins ties. For MAX-CUT the lowest total is the
/// largest cut.
pub fn exhaustive_search(
    layer: &Layer,
    task: Task,
    max_assignments: u64,
) -> Result<OracleOutcome, HsvError> {
    let num_nodes = layer.num_nodes();
    let num_states = layer.num_states();
    let total = match assignment_count(num_nodes, num_states) {
        Some(total) if total <= max_assignments => total,
        _ => {
            return Err(HsvError::InvalidArguments(
                ErrorInfo::new(
                    "enumeration-too-large",
                    "joint state space exceeds the enumeration cap",
                )
                .with_context("num_nodes", num_nodes.to_string())
                .with_context("num_states", num_states.to_string())
                .with_context("max_assignments", max_assignments.to_string()),
            ))
        }
    };
    debug!(%task, total, "exhaustive search");

    let start = Instant::now();
    let mut assignment = vec![0usize; num_nodes];
    let mut best_score = f64::INFINITY;
    let mut best_assignment = assignment.clone();
    let mut visited = 0u64;
    loop {
        visited += 1;
        let score = layer.assignment_score(&assignment, task)?;
        if score < best_score {
            best_score = score;
            best_assignment.copy_from_slice(&assignment);
        }
        if !advance(&mut assignment, num_states) {
            break;
        }
    }

    Ok(OracleOutcome {
        method: OracleMethod::Exhaustive,
        score: best_score,
        assignment: best_assignment,
        iterations: visited,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    })
}

/// Odometer increment; returns `false` once every digit has wrapped.
fn advance(assignment: &mut [usize], num_states: usize) -> bool {
    for digit in assignment.iter_mut().rev() {
        *digit += 1;
        if *digit < num_states {
            return true;
        }
        *digit = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odometer_visits_in_lexicographic_order() {
        let mut digits = vec![0, 0];
        let mut seen = vec![digits.clone()];
        while advance(&mut digits, 3) {
            seen.push(digits.clone());
        }
        assert_eq!(seen.len(), 9);
        assert_eq!(seen[1], vec![0, 1]);
        assert_eq!(seen[3], vec![1, 0]);
        assert_eq!(seen[8], vec![2, 2]);
    }

    #[test]
    fn counts_overflow_to_none() {
        assert_eq!(assignment_count(2, 2), Some(4));
        assert_eq!(assignment_count(3, 1), Some(1));
        assert_eq!(assignment_count(64, 4), None);
    }
}
