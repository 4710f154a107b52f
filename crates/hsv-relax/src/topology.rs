use hsv_core::{NodeId, RandomSource, TopologyKind};

use crate::node::Link;

/// Sampling rule for directed coupling weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouplingRule {
    strength: f64,
}

impl CouplingRule {
    /// Creates a rule from a signed strength.
    pub fn new(strength: f64) -> Self {
        Self { strength }
    }

    /// Signed strength the rule was built from.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Draws one weight.
    ///
    /// Positive strengths sample `[0.5, strength)`; otherwise the interval
    /// runs from `-strength` towards `strength`.
    pub fn sample(&self, source: &mut impl RandomSource) -> f64 {
        if self.strength > 0.0 {
            source.uniform(0.5, self.strength)
        } else {
            source.uniform(-self.strength, self.strength)
        }
    }
}

/// Neighbour ids of `id` in a layer of `num_nodes` nodes.
///
/// The ring list is `[pred, succ]` with duplicates and self-loops dropped, so
/// one node has no neighbours and two nodes see each other once.
pub fn neighbors_of(kind: TopologyKind, id: usize, num_nodes: usize) -> Vec<NodeId> {
    match kind {
        TopologyKind::FullyConnected => (0..num_nodes)
            .filter(|&other| other != id)
            .map(NodeId::from_raw)
            .collect(),
        TopologyKind::Ring => {
            if num_nodes == 0 {
                return Vec::new();
            }
            let pred = (id + num_nodes - 1) % num_nodes;
            let succ = (id + 1) % num_nodes;
            let mut neighbors = Vec::with_capacity(2);
            for candidate in [pred, succ] {
                if candidate != id && !neighbors.contains(&NodeId::from_raw(candidate)) {
                    neighbors.push(NodeId::from_raw(candidate));
                }
            }
            neighbors
        }
    }
}

/// Builds the outgoing links of every node, drawing one weight per directed edge.
///
/// Draw order is ascending node id, then neighbour order.
pub fn build_links(
    kind: TopologyKind,
    num_nodes: usize,
    rule: &CouplingRule,
    source: &mut impl RandomSource,
) -> Vec<Vec<Link>> {
    (0..num_nodes)
        .map(|id| {
            neighbors_of(kind, id, num_nodes)
                .into_iter()
                .map(|neighbor| Link {
                    neighbor,
                    weight: rule.sample(source),
                })
                .collect()
        })
        .collect()
}
