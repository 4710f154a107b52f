mod common;

use common::assert_distribution;
use hsv_core::{NodeId, RngHandle, Task, TopologyKind};
use hsv_relax::{Layer, LayerConfig};
use proptest::prelude::*;

fn task_strategy() -> impl Strategy<Value = Task> {
    prop_oneof![Just(Task::Ising), Just(Task::Maxcut)]
}

fn topology_strategy() -> impl Strategy<Value = TopologyKind> {
    prop_oneof![Just(TopologyKind::FullyConnected), Just(TopologyKind::Ring)]
}

fn check_layer(layer: &Layer) {
    for node in layer.nodes() {
        assert_distribution(node.hyperstate());
    }
}

proptest! {
    #[test]
    fn every_phase_keeps_valid_distributions(
        seed in any::<u64>(),
        nodes in 1usize..7,
        states in 1usize..5,
        strength in -5.0f64..5.0,
        topology in topology_strategy(),
        task in task_strategy(),
        temperature in 0.01f64..3.0,
    ) {
        let config = LayerConfig { coupling_strength: strength, ..LayerConfig::default() };
        let mut rng = RngHandle::from_seed(seed);
        let mut layer = Layer::new(nodes, states, &config, &mut rng).unwrap();
        layer.configure_topology(topology, &mut rng);

        layer.local_update(NodeId::from_raw(0), temperature, task).unwrap();
        check_layer(&layer);
        layer.diffuse(NodeId::from_raw(nodes - 1), task).unwrap();
        check_layer(&layer);
        for _ in 0..3 {
            layer.step(temperature, task);
            check_layer(&layer);
        }
        let total = layer.anneal(5, temperature, task);
        check_layer(&layer);
        prop_assert!(total.is_finite());
    }

    #[test]
    fn score_total_equals_assignment_score_of_modes(
        seed in any::<u64>(),
        nodes in 2usize..6,
        states in 2usize..4,
        task in task_strategy(),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let mut layer = Layer::new(nodes, states, &LayerConfig::default(), &mut rng).unwrap();
        layer.anneal(4, 0.5, task);
        let modes = layer.modes();
        let direct = layer.score_total(task);
        let via_assignment = layer.assignment_score(&modes, task).unwrap();
        prop_assert!((direct - via_assignment).abs() < 1e-12);
    }
}
