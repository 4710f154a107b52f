use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HsvError};

/// Optimisation objective driving the local update, diffusion and scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Pairwise Ising energy minimisation.
    #[default]
    Ising,
    /// MAX-CUT maximisation, scored as the negated cut weight.
    Maxcut,
}

impl Task {
    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Ising => "ising",
            Task::Maxcut => "maxcut",
        }
    }

    /// Word used when reporting a score for this task.
    pub fn score_label(&self) -> &'static str {
        match self {
            Task::Ising => "energy",
            Task::Maxcut => "cut value",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = HsvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ising" => Ok(Task::Ising),
            "maxcut" => Ok(Task::Maxcut),
            other => Err(HsvError::InvalidArguments(
                ErrorInfo::new("unknown-task", "Task must be 'ising' or 'maxcut'")
                    .with_context("task", other),
            )),
        }
    }
}

/// Coupling graph shape applied to every node of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    /// Every node couples to every other node.
    #[default]
    FullyConnected,
    /// Every node couples to its predecessor and successor modulo the node count.
    Ring,
}

impl TopologyKind {
    /// Canonical tag accepted by the shell.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopologyKind::FullyConnected => "fully_connected",
            TopologyKind::Ring => "ring",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyKind {
    type Err = HsvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fully_connected" => Ok(TopologyKind::FullyConnected),
            "ring" => Ok(TopologyKind::Ring),
            other => Err(HsvError::UnsupportedTopology(
                ErrorInfo::new("unsupported-topology", "Unsupported topology")
                    .with_context("topology", other),
            )),
        }
    }
}
