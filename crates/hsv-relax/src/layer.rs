use hsv_core::{ErrorInfo, HsvError, NodeId, RandomSource, Task, TopologyKind};
use tracing::{debug, trace};

use crate::config::LayerConfig;
use crate::node::{Link, Node};
use crate::numeric;
use crate::schedule::Schedule;
use crate::topology::{self, CouplingRule};

/// Collection of nodes relaxed together under a shared topology.
///
/// Nodes are stored by id, so `nodes[i].id() == i`. Every phase visits them in
/// that order and writes each update back before the next node reads it.
#[derive(Debug, Clone)]
pub struct Layer {
    num_states: usize,
    nodes: Vec<Node>,
    topology: Option<TopologyKind>,
    coupling: CouplingRule,
}

impl Layer {
    /// Draws a fresh instance and binds the fully-connected topology.
    pub fn new(
        num_nodes: usize,
        num_states: usize,
        config: &LayerConfig,
        source: &mut impl RandomSource,
    ) -> Result<Self, HsvError> {
        let mut layer = Self::unconfigured(num_nodes, num_states, config, source)?;
        layer.configure_topology(TopologyKind::FullyConnected, source);
        Ok(layer)
    }

    /// Draws local fields for every node but leaves them without neighbours.
    pub fn unconfigured(
        num_nodes: usize,
        num_states: usize,
        config: &LayerConfig,
        source: &mut impl RandomSource,
    ) -> Result<Self, HsvError> {
        check_dimensions(num_nodes, num_states)?;
        let nodes = (0..num_nodes)
            .map(|id| Node::new(NodeId::from_raw(id), num_states, &config.field_range, source))
            .collect();
        Ok(Self {
            num_states,
            nodes,
            topology: None,
            coupling: CouplingRule::new(config.coupling_strength),
        })
    }

    /// Assembles a layer from explicitly constructed nodes.
    ///
    /// Ids must be `0..n` in order and every node must share one state count.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, HsvError> {
        let num_states = nodes.first().map(Node::num_states).unwrap_or(0);
        check_dimensions(nodes.len(), num_states)?;
        for (index, node) in nodes.iter().enumerate() {
            if node.id().as_raw() != index {
                return Err(HsvError::InvalidArguments(
                    ErrorInfo::new("node-order", "node ids must match their position")
                        .with_context("position", index.to_string())
                        .with_context("node", node.id().to_string()),
                ));
            }
            if node.num_states() != num_states {
                return Err(HsvError::InvalidArguments(
                    ErrorInfo::new("state-count-mismatch", "all nodes must share one state count")
                        .with_context("node", node.id().to_string())
                        .with_context("expected", num_states.to_string())
                        .with_context("found", node.num_states().to_string()),
                ));
            }
        }
        Ok(Self {
            num_states,
            nodes,
            topology: None,
            coupling: CouplingRule::new(LayerConfig::default().coupling_strength),
        })
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// State count shared by every node.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Topology last bound with [`Layer::configure_topology`], if any.
    pub fn topology(&self) -> Option<TopologyKind> {
        self.topology
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Result<&Node, HsvError> {
        self.nodes.get(id.as_raw()).ok_or_else(|| unknown_node(id, self.nodes.len()))
    }

    /// Rebinds every node's neighbours and draws fresh couplings.
    pub fn configure_topology(&mut self, kind: TopologyKind, source: &mut impl RandomSource) {
        let links = topology::build_links(kind, self.nodes.len(), &self.coupling, source);
        for (node, node_links) in self.nodes.iter_mut().zip(links) {
            node.set_links(node_links);
        }
        self.topology = Some(kind);
        debug!(
            topology = %kind,
            nodes = self.nodes.len(),
            strength = self.coupling.strength(),
            "bound topology"
        );
    }

    /// Replaces one node's outgoing links, e.g. to inject fixed couplings.
    pub fn set_links(&mut self, id: NodeId, links: Vec<Link>) -> Result<(), HsvError> {
        let num_nodes = self.nodes.len();
        let index = self.node(id)?.id().as_raw();
        for (position, link) in links.iter().enumerate() {
            if link.neighbor == id {
                return Err(HsvError::InvalidArguments(
                    ErrorInfo::new("self-loop", "a node cannot couple to itself")
                        .with_context("node", id.to_string()),
                ));
            }
            if link.neighbor.as_raw() >= num_nodes {
                return Err(unknown_node(link.neighbor, num_nodes));
            }
            if links[..position].iter().any(|prev| prev.neighbor == link.neighbor) {
                return Err(HsvError::InvalidArguments(
                    ErrorInfo::new("duplicate-neighbor", "neighbour listed twice")
                        .with_context("node", id.to_string())
                        .with_context("neighbor", link.neighbor.to_string()),
                ));
            }
            if !link.weight.is_finite() {
                return Err(HsvError::InvalidArguments(
                    ErrorInfo::new("non-finite-coupling", "coupling weights must be finite")
                        .with_context("node", id.to_string())
                        .with_context("neighbor", link.neighbor.to_string()),
                ));
            }
        }
        self.nodes[index].set_links(links);
        Ok(())
    }

    /// Overwrites one node's hyperstate with a validated distribution.
    pub fn set_hyperstate(&mut self, id: NodeId, hyperstate: Vec<f64>) -> Result<(), HsvError> {
        let index = self.node(id)?.id().as_raw();
        if hyperstate.len() != self.num_states || !numeric::is_distribution(&hyperstate) {
            return Err(HsvError::InvalidArguments(
                ErrorInfo::new(
                    "invalid-hyperstate",
                    "hyperstate must be a probability vector over every state",
                )
                .with_context("node", id.to_string())
                .with_context("len", hyperstate.len().to_string()),
            ));
        }
        self.nodes[index].replace_hyperstate(hyperstate);
        Ok(())
    }

    /// Recomputes one node's hyperstate from its neighbours' current modes.
    pub fn local_update(
        &mut self,
        id: NodeId,
        temperature: f64,
        task: Task,
    ) -> Result<(), HsvError> {
        let index = self.node(id)?.id().as_raw();
        self.update_at(index, temperature, task);
        Ok(())
    }

    /// Blends one node's hyperstate with its neighbours' current hyperstates.
    pub fn diffuse(&mut self, id: NodeId, task: Task) -> Result<(), HsvError> {
        let index = self.node(id)?.id().as_raw();
        self.diffuse_at(index, task);
        Ok(())
    }

    fn update_at(&mut self, index: usize, temperature: f64, task: Task) {
        let next = self.nodes[index].relaxed(&self.nodes, temperature, task);
        self.nodes[index].replace_hyperstate(next);
    }

    fn diffuse_at(&mut self, index: usize, task: Task) {
        let next = self.nodes[index].diffused(&self.nodes, task);
        self.nodes[index].replace_hyperstate(next);
    }

    /// One tick: local update over all nodes, then diffusion over all nodes.
    pub fn step(&mut self, temperature: f64, task: Task) {
        for index in 0..self.nodes.len() {
            self.update_at(index, temperature, task);
        }
        for index in 0..self.nodes.len() {
            self.diffuse_at(index, task);
        }
    }

    /// Runs `iterations` scheduled steps and returns the summed node scores.
    ///
    /// With `iterations == 0` nothing is mutated and the current total is returned.
    pub fn anneal(&mut self, iterations: usize, initial_temperature: f64, task: Task) -> f64 {
        let schedule = Schedule::for_task(task, initial_temperature);
        if iterations > 0 {
            debug!(
                %task,
                iterations,
                initial_temperature,
                nodes = self.nodes.len(),
                "annealing"
            );
        }
        for index in 0..iterations {
            let temperature = schedule.temperature(index);
            trace!(step = index, temperature, "step");
            self.step(temperature, task);
        }
        let total = self.score_total(task);
        if iterations > 0 {
            debug!(%task, total, "anneal finished");
        }
        total
    }

    /// Score of one node at its current mode.
    pub fn score(&self, id: NodeId, task: Task) -> Result<f64, HsvError> {
        Ok(self.node(id)?.score(&self.nodes, task))
    }

    /// Sum of every node's score; each coupled pair contributes from both ends.
    pub fn score_total(&self, task: Task) -> f64 {
        self.nodes
            .iter()
            .map(|node| node.score(&self.nodes, task))
            .sum()
    }

    /// Current mode of every node, in id order.
    pub fn modes(&self) -> Vec<usize> {
        self.nodes.iter().map(Node::mode).collect()
    }

    /// Total score the layer would report if its modes were `assignment`.
    pub fn assignment_score(&self, assignment: &[usize], task: Task) -> Result<f64, HsvError> {
        if assignment.len() != self.nodes.len() {
            return Err(HsvError::InvalidArguments(
                ErrorInfo::new("assignment-length", "assignment must cover every node")
                    .with_context("expected", self.nodes.len().to_string())
                    .with_context("found", assignment.len().to_string()),
            ));
        }
        if let Some(position) = assignment.iter().position(|&state| state >= self.num_states) {
            return Err(HsvError::InvalidArguments(
                ErrorInfo::new("state-out-of-range", "assigned state exceeds the state count")
                    .with_context("node", position.to_string())
                    .with_context("state", assignment[position].to_string())
                    .with_context("num_states", self.num_states.to_string()),
            ));
        }
        let mut neighbor_states = Vec::new();
        let total = self
            .nodes
            .iter()
            .zip(assignment)
            .map(|(node, &state)| {
                neighbor_states.clear();
                neighbor_states.extend(node.neighbors().map(|id| assignment[id.as_raw()]));
                node.state_energy(state, task, &neighbor_states)
            })
            .sum();
        Ok(total)
    }
}

fn check_dimensions(num_nodes: usize, num_states: usize) -> Result<(), HsvError> {
    if num_nodes == 0 || num_states == 0 {
        return Err(HsvError::InvalidArguments(
            ErrorInfo::new("empty-layer", "layers need at least one node and one state")
                .with_context("num_nodes", num_nodes.to_string())
                .with_context("num_states", num_states.to_string()),
        ));
    }
    Ok(())
}

fn unknown_node(id: NodeId, num_nodes: usize) -> HsvError {
    HsvError::InvalidArguments(
        ErrorInfo::new("unknown-node", "node id outside the layer")
            .with_context("node", id.to_string())
            .with_context("num_nodes", num_nodes.to_string()),
    )
}
