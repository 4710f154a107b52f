use std::fs;
use std::path::Path;

use hsv_core::{ErrorInfo, HsvError, Task};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters for an interactive or one-shot session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Problem-instance generation settings.
    #[serde(default)]
    pub layer: LayerConfig,
    /// Defaults for `optimize` arguments that the caller omits.
    #[serde(default)]
    pub anneal: AnnealConfig,
    /// Benchmark sizing.
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

impl SessionConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, HsvError> {
        serde_yaml::from_str(text).map_err(|err| {
            HsvError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })
    }

    /// Loads a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, HsvError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            HsvError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_yaml::from_str(&contents).map_err(|err| {
            HsvError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}

/// Settings used when drawing a fresh problem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Range for per-state local field samples.
    #[serde(default)]
    pub field_range: FieldRange,
    /// Signed strength selecting the coupling sampling range.
    ///
    /// Positive values sample from `[0.5, strength)`, everything else from
    /// `[strength, -strength)`.
    #[serde(default = "default_coupling_strength")]
    pub coupling_strength: f64,
}

/// Coupling strength applied by every topology rebind.
///
/// The sign rule keys off a topology tag that is never `maxcut`, so the
/// positive branch is unreachable and the negative strength always applies.
pub const DEFAULT_COUPLING_STRENGTH: f64 = -1.0;

fn default_coupling_strength() -> f64 {
    DEFAULT_COUPLING_STRENGTH
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            field_range: FieldRange::default(),
            coupling_strength: default_coupling_strength(),
        }
    }
}

/// Half-open sampling range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    /// Inclusive lower bound.
    #[serde(default = "default_field_low")]
    pub low: f64,
    /// Exclusive upper bound.
    #[serde(default = "default_field_high")]
    pub high: f64,
}

fn default_field_low() -> f64 {
    -0.5
}

fn default_field_high() -> f64 {
    0.5
}

impl Default for FieldRange {
    fn default() -> Self {
        Self {
            low: default_field_low(),
            high: default_field_high(),
        }
    }
}

/// Parameters of one annealing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealConfig {
    /// Number of steps to execute.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Temperature at step zero before the schedule floor is added.
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f64,
    /// Objective to optimise.
    #[serde(default)]
    pub task: Task,
}

fn default_iterations() -> usize {
    100
}

fn default_initial_temperature() -> f64 {
    0.5
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            initial_temperature: default_initial_temperature(),
            task: Task::default(),
        }
    }
}

/// Sizing of the benchmark comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Relaxation steps executed by the engine.
    #[serde(default = "default_relax_iterations")]
    pub relax_iterations: usize,
    /// Initial temperature of the engine run.
    #[serde(default = "default_initial_temperature")]
    pub relax_temperature: f64,
    /// Iterations granted to the hill climbing oracle.
    #[serde(default = "default_hill_climb_iterations")]
    pub hill_climb_iterations: usize,
    /// Largest joint state space the exhaustive oracle will enumerate.
    #[serde(default = "default_max_assignments")]
    pub max_assignments: u64,
}

fn default_relax_iterations() -> usize {
    300
}

fn default_hill_climb_iterations() -> usize {
    1000
}

fn default_max_assignments() -> u64 {
    1 << 22
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            relax_iterations: default_relax_iterations(),
            relax_temperature: default_initial_temperature(),
            hill_climb_iterations: default_hill_climb_iterations(),
            max_assignments: default_max_assignments(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the session.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label echoed in reports.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    42
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}
