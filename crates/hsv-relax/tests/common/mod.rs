#![allow(dead_code)]

use hsv_core::NodeId;
use hsv_relax::{Layer, Link, Node};

pub fn id(raw: usize) -> NodeId {
    NodeId::from_raw(raw)
}

/// Layer with zero local fields and explicit directed couplings `(from, to, weight)`.
pub fn fixed_layer(num_nodes: usize, num_states: usize, couplings: &[(usize, usize, f64)]) -> Layer {
    let nodes = (0..num_nodes)
        .map(|raw| Node::with_field(id(raw), vec![0.0; num_states]).unwrap())
        .collect();
    let mut layer = Layer::from_nodes(nodes).unwrap();
    for from in 0..num_nodes {
        let links = couplings
            .iter()
            .filter(|(source, _, _)| *source == from)
            .map(|&(_, to, weight)| Link {
                neighbor: id(to),
                weight,
            })
            .collect();
        layer.set_links(id(from), links).unwrap();
    }
    layer
}

/// One-hot distribution over `num_states` states.
pub fn one_hot(state: usize, num_states: usize) -> Vec<f64> {
    let mut hyperstate = vec![0.0; num_states];
    hyperstate[state] = 1.0;
    hyperstate
}

pub fn assert_distribution(values: &[f64]) {
    assert!(values.iter().all(|p| p.is_finite() && *p >= 0.0), "{values:?}");
    let total: f64 = values.iter().sum();
    assert!((total - 1.0).abs() <= 1e-9, "sum {total} for {values:?}");
}
