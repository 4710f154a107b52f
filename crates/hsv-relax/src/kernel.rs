use std::time::Instant;

use hsv_core::{ErrorInfo, HsvError, Task};
use serde::{Deserialize, Serialize};

use crate::config::AnnealConfig;
use crate::layer::Layer;
use crate::schedule::Schedule;

/// Summary returned to callers after an annealing run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealReport {
    /// Objective that was optimised.
    pub task: Task,
    /// Steps executed.
    pub iterations: usize,
    /// Schedule scale supplied by the caller.
    pub initial_temperature: f64,
    /// Temperature of the last executed step, if any ran.
    pub final_temperature: Option<f64>,
    /// Score total before the first step.
    pub initial_score: f64,
    /// Score total after the last step.
    pub final_score: f64,
    /// Wall time covering both readouts and all steps.
    pub elapsed_seconds: f64,
}

impl AnnealReport {
    /// Serialises the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, HsvError> {
        serde_json::to_string_pretty(self).map_err(|err| {
            HsvError::Config(ErrorInfo::new("report-serialize", err.to_string()))
        })
    }
}

/// Reads the baseline, anneals the layer in place and reports both totals.
pub fn run(layer: &mut Layer, config: &AnnealConfig) -> AnnealReport {
    let start = Instant::now();
    let initial_score = layer.anneal(0, config.initial_temperature, config.task);
    let final_score = layer.anneal(config.iterations, config.initial_temperature, config.task);
    let elapsed_seconds = start.elapsed().as_secs_f64();
    let final_temperature = config
        .iterations
        .checked_sub(1)
        .map(|last| Schedule::for_task(config.task, config.initial_temperature).temperature(last));
    AnnealReport {
        task: config.task,
        iterations: config.iterations,
        initial_temperature: config.initial_temperature,
        final_temperature,
        initial_score,
        final_score,
        elapsed_seconds,
    }
}
