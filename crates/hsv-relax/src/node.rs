use hsv_core::{ErrorInfo, HsvError, NodeId, RandomSource, Task};
use serde::{Deserialize, Serialize};

use crate::config::FieldRange;
use crate::numeric;

/// Diffusion blend strength for the Ising task.
pub const ISING_DIFFUSION: f64 = 0.2;
/// Diffusion blend strength for the MAX-CUT task.
pub const MAXCUT_DIFFUSION: f64 = 0.3;

/// Blend strength used by [`Node::diffused`] for the given task.
pub fn diffusion_strength(task: Task) -> f64 {
    match task {
        Task::Ising => ISING_DIFFUSION,
        Task::Maxcut => MAXCUT_DIFFUSION,
    }
}

/// Maps a state index onto the signed scale `state - num_states / 2`.
pub fn centered(state: usize, num_states: usize) -> f64 {
    state as f64 - num_states as f64 / 2.0
}

/// Directed coupling from a node towards one of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Neighbour the weight points at.
    pub neighbor: NodeId,
    /// Coupling weight as seen from the owning node.
    pub weight: f64,
}

/// One relaxed discrete variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    hyperstate: Vec<f64>,
    local_field: Vec<f64>,
    links: Vec<Link>,
}

impl Node {
    /// Creates a node with a uniform hyperstate and a local field drawn from `source`.
    pub fn new(
        id: NodeId,
        num_states: usize,
        field_range: &FieldRange,
        source: &mut impl RandomSource,
    ) -> Self {
        let local_field = (0..num_states)
            .map(|_| source.uniform(field_range.low, field_range.high))
            .collect();
        Self {
            id,
            hyperstate: numeric::uniform(num_states),
            local_field,
            links: Vec::new(),
        }
    }

    /// Creates a node with an explicit local field and a uniform hyperstate.
    pub fn with_field(id: NodeId, local_field: Vec<f64>) -> Result<Self, HsvError> {
        if local_field.is_empty() {
            return Err(HsvError::InvalidArguments(
                ErrorInfo::new("empty-field", "a node needs at least one state")
                    .with_context("node", id.to_string()),
            ));
        }
        if local_field.iter().any(|value| !value.is_finite()) {
            return Err(HsvError::InvalidArguments(
                ErrorInfo::new("non-finite-field", "local field entries must be finite")
                    .with_context("node", id.to_string()),
            ));
        }
        Ok(Self {
            id,
            hyperstate: numeric::uniform(local_field.len()),
            local_field,
            links: Vec::new(),
        })
    }

    /// Identifier of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Number of discrete states.
    pub fn num_states(&self) -> usize {
        self.local_field.len()
    }

    /// Current distribution over states.
    pub fn hyperstate(&self) -> &[f64] {
        &self.hyperstate
    }

    /// Fixed per-state bias.
    pub fn local_field(&self) -> &[f64] {
        &self.local_field
    }

    /// Outgoing couplings in neighbour order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Neighbour identifiers in coupling order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.links.iter().map(|link| link.neighbor)
    }

    /// Coupling weight towards `neighbor`, if linked.
    pub fn coupling(&self, neighbor: NodeId) -> Option<f64> {
        self.links
            .iter()
            .find(|link| link.neighbor == neighbor)
            .map(|link| link.weight)
    }

    /// Most probable state.
    pub fn mode(&self) -> usize {
        numeric::argmax(&self.hyperstate)
    }

    pub(crate) fn set_links(&mut self, links: Vec<Link>) {
        self.links = links;
    }

    pub(crate) fn replace_hyperstate(&mut self, hyperstate: Vec<f64>) {
        self.hyperstate = hyperstate;
    }

    /// Energy of placing this node in `state` while its neighbours sit in
    /// `neighbor_states` (aligned with [`Node::links`]).
    ///
    /// The same expression serves as the local-update energy and the score.
    pub fn state_energy(&self, state: usize, task: Task, neighbor_states: &[usize]) -> f64 {
        let pairs = self.links.iter().zip(neighbor_states);
        match task {
            Task::Ising => {
                let k = self.num_states();
                let own = centered(state, k);
                pairs.fold(self.local_field[state], |acc, (link, &other)| {
                    acc + link.weight * own * centered(other, k)
                })
            }
            Task::Maxcut => -pairs
                .filter(|(_, &other)| other != state)
                .map(|(link, _)| link.weight)
                .sum::<f64>(),
        }
    }

    /// Current modes of the linked neighbours, in link order.
    pub fn neighbor_modes(&self, nodes: &[Node]) -> Vec<usize> {
        self.links
            .iter()
            .map(|link| nodes[link.neighbor.as_raw()].mode())
            .collect()
    }

    /// Energy estimate for every candidate state given the neighbours' current modes.
    pub fn local_energies(&self, nodes: &[Node], task: Task) -> Vec<f64> {
        let modes = self.neighbor_modes(nodes);
        (0..self.num_states())
            .map(|state| self.state_energy(state, task, &modes))
            .collect()
    }

    /// Boltzmann distribution `p[s] ∝ exp(-energy[s] / temperature)` over the local energies.
    ///
    /// `temperature` must be strictly positive.
    pub fn relaxed(&self, nodes: &[Node], temperature: f64, task: Task) -> Vec<f64> {
        let logits: Vec<f64> = self
            .local_energies(nodes, task)
            .into_iter()
            .map(|energy| -energy / temperature)
            .collect();
        numeric::stable_softmax(&logits)
    }

    /// Hyperstate blended with the coupling-weighted sum of neighbour hyperstates.
    ///
    /// Falls back to the current hyperstate when clipping leaves no mass.
    pub fn diffused(&self, nodes: &[Node], task: Task) -> Vec<f64> {
        let mut interaction = vec![0.0; self.num_states()];
        for link in &self.links {
            let neighbor = &nodes[link.neighbor.as_raw()];
            for (slot, &p) in interaction.iter_mut().zip(neighbor.hyperstate()) {
                *slot += link.weight * p;
            }
        }
        let alpha = diffusion_strength(task);
        let blended: Vec<f64> = self
            .hyperstate
            .iter()
            .zip(&interaction)
            .map(|(&own, &mix)| (1.0 - alpha) * own + alpha * mix)
            .collect();
        numeric::clip_and_normalize(&blended).unwrap_or_else(|| self.hyperstate.clone())
    }

    /// Point estimate of quality at the current mode.
    pub fn score(&self, nodes: &[Node], task: Task) -> f64 {
        self.state_energy(self.mode(), task, &self.neighbor_modes(nodes))
    }
}
