use hsv_core::Task;
use serde::{Deserialize, Serialize};

/// Additive floor keeping every scheduled temperature strictly positive.
pub const TEMPERATURE_FLOOR: f64 = 0.01;
/// Decay rate of the exponential schedule.
pub const EXPONENTIAL_RATE: f64 = 0.01;
/// Decay rate of the hyperbolic schedule.
pub const HYPERBOLIC_RATE: f64 = 0.05;

/// Shape of the temperature decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleKind {
    /// `T0 * exp(-0.01 i) + 0.01`.
    Exponential,
    /// `T0 / (1 + 0.05 i) + 0.01`.
    Hyperbolic,
}

/// Maps a step index onto an annealing temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Decay shape.
    pub kind: ScheduleKind,
    /// Temperature scale at step zero.
    pub initial_temperature: f64,
}

impl Schedule {
    /// Exponential decay for Ising, hyperbolic for every other task.
    pub fn for_task(task: Task, initial_temperature: f64) -> Self {
        let kind = match task {
            Task::Ising => ScheduleKind::Exponential,
            Task::Maxcut => ScheduleKind::Hyperbolic,
        };
        Self {
            kind,
            initial_temperature,
        }
    }

    /// Temperature for the 0-indexed step `index`.
    ///
    /// Never below [`TEMPERATURE_FLOOR`], even for a negative or NaN scale.
    pub fn temperature(&self, index: usize) -> f64 {
        let i = index as f64;
        let decayed = match self.kind {
            ScheduleKind::Exponential => self.initial_temperature * (-EXPONENTIAL_RATE * i).exp(),
            ScheduleKind::Hyperbolic => self.initial_temperature / (1.0 + HYPERBOLIC_RATE * i),
        };
        (decayed + TEMPERATURE_FLOOR).max(TEMPERATURE_FLOOR)
    }
}
