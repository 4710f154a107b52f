mod common;

use common::{assert_distribution, fixed_layer, id};
use hsv_core::Task;

#[test]
fn step_reads_already_updated_neighbours() {
    let mut layer = fixed_layer(2, 2, &[(0, 1, 1.0), (1, 0, 1.0)]);
    layer.set_hyperstate(id(0), vec![0.6, 0.4]).unwrap();
    layer.set_hyperstate(id(1), vec![0.6, 0.4]).unwrap();

    layer.step(1.0, Task::Maxcut);

    // Node 0 flips to 1 first; node 1 then sees that flip and settles on 0.
    // A simultaneous update would have flipped both nodes to 1.
    assert_eq!(layer.modes(), vec![1, 0]);

    let low = 1.0 / (1.0 + 1.0_f64.exp());
    let high = 1.0 - low;
    let node0 = [0.7 * low + 0.3 * high, 0.7 * high + 0.3 * low];
    let node1 = [0.7 * high + 0.3 * node0[0], 0.7 * low + 0.3 * node0[1]];
    let h0 = layer.node(id(0)).unwrap().hyperstate();
    let h1 = layer.node(id(1)).unwrap().hyperstate();
    for (got, want) in h0.iter().zip(node0).chain(h1.iter().zip(node1)) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn per_node_calls_in_id_order_reproduce_step() {
    let couplings = [(0, 1, 0.4), (0, 2, -0.7), (1, 0, 0.9), (1, 2, 0.3), (2, 0, -0.2), (2, 1, 0.8)];
    let mut stepped = fixed_layer(3, 3, &couplings);
    stepped.set_hyperstate(id(0), vec![0.5, 0.3, 0.2]).unwrap();
    stepped.set_hyperstate(id(1), vec![0.1, 0.1, 0.8]).unwrap();
    let mut manual = stepped.clone();

    stepped.step(0.3, Task::Ising);
    for raw in 0..3 {
        manual.local_update(id(raw), 0.3, Task::Ising).unwrap();
    }
    for raw in 0..3 {
        manual.diffuse(id(raw), Task::Ising).unwrap();
    }

    for raw in 0..3 {
        let a = stepped.node(id(raw)).unwrap().hyperstate();
        let b = manual.node(id(raw)).unwrap().hyperstate();
        assert_eq!(a, b);
        assert_distribution(a);
    }
}

#[test]
fn diffusion_without_surviving_mass_keeps_previous_state() {
    let mut layer = fixed_layer(2, 2, &[(0, 1, -10.0), (1, 0, -10.0)]);
    layer.set_hyperstate(id(0), vec![1.0, 0.0]).unwrap();
    layer.diffuse(id(0), Task::Ising).unwrap();
    assert_eq!(layer.node(id(0)).unwrap().hyperstate(), &[1.0, 0.0]);
}

#[test]
fn negative_couplings_are_clipped_during_diffusion() {
    let mut layer = fixed_layer(2, 2, &[(0, 1, -1.0)]);
    layer.set_hyperstate(id(0), vec![0.5, 0.5]).unwrap();
    layer.set_hyperstate(id(1), vec![0.0, 1.0]).unwrap();
    layer.diffuse(id(0), Task::Ising).unwrap();
    // blended = [0.4, 0.4 - 0.2] before normalisation
    let h0 = layer.node(id(0)).unwrap().hyperstate();
    assert!((h0[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((h0[1] - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn unconfigured_nodes_follow_their_local_field() {
    let nodes = vec![hsv_relax::Node::with_field(id(0), vec![0.5, -0.5]).unwrap()];
    let mut layer = hsv_relax::Layer::from_nodes(nodes).unwrap();
    layer.local_update(id(0), 1.0, Task::Ising).unwrap();
    let h = layer.node(id(0)).unwrap().hyperstate();
    let expected_high = 1.0 / (1.0 + (-1.0_f64).exp());
    assert!((h[1] - expected_high).abs() < 1e-12);

    layer.local_update(id(0), 1.0, Task::Maxcut).unwrap();
    assert_eq!(layer.node(id(0)).unwrap().hyperstate(), &[0.5, 0.5]);
}
