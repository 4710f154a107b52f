mod common;

use common::{fixed_layer, id, one_hot};
use hsv_core::Task;
use hsv_relax::Layer;

fn opposed_pair() -> Layer {
    let mut layer = fixed_layer(2, 2, &[(0, 1, 1.0), (1, 0, 1.0)]);
    layer.set_hyperstate(id(0), one_hot(0, 2)).unwrap();
    layer.set_hyperstate(id(1), one_hot(1, 2)).unwrap();
    layer
}

#[test]
fn ising_score_of_opposed_pair_is_zero() {
    let layer = opposed_pair();
    assert_eq!(layer.score(id(0), Task::Ising).unwrap(), 0.0);
    // node 1 sits at f(1) = 0, so its coupling term vanishes too
    assert_eq!(layer.score(id(1), Task::Ising).unwrap(), 0.0);
}

#[test]
fn maxcut_counts_each_cut_edge_from_both_ends() {
    let mut layer = opposed_pair();
    assert_eq!(layer.score(id(0), Task::Maxcut).unwrap(), -1.0);
    assert_eq!(layer.score(id(1), Task::Maxcut).unwrap(), -1.0);
    assert_eq!(layer.anneal(0, 0.5, Task::Maxcut), -2.0);
}

#[test]
fn ising_score_uses_local_field_and_centred_states() {
    let nodes = vec![
        hsv_relax::Node::with_field(id(0), vec![0.0, 0.0, 0.25]).unwrap(),
        hsv_relax::Node::with_field(id(1), vec![0.0, 0.0, 0.0]).unwrap(),
    ];
    let mut layer = Layer::from_nodes(nodes).unwrap();
    layer
        .set_links(id(0), vec![hsv_relax::Link { neighbor: id(1), weight: 2.0 }])
        .unwrap();
    layer.set_hyperstate(id(0), one_hot(2, 3)).unwrap();
    layer.set_hyperstate(id(1), one_hot(0, 3)).unwrap();
    // f(2) = 0.5, f(0) = -1.5 for three states
    let expected = 0.25 + 2.0 * 0.5 * -1.5;
    assert!((layer.score(id(0), Task::Ising).unwrap() - expected).abs() < 1e-12);
    // node 1 has no links: only its field at mode 0 counts
    assert_eq!(layer.score(id(1), Task::Ising).unwrap(), 0.0);
}

#[test]
fn asymmetric_couplings_are_kept_per_direction() {
    let layer = fixed_layer(2, 2, &[(0, 1, 0.75), (1, 0, -0.25)]);
    assert_eq!(layer.node(id(0)).unwrap().coupling(id(1)), Some(0.75));
    assert_eq!(layer.node(id(1)).unwrap().coupling(id(0)), Some(-0.25));
}

#[test]
fn assignment_score_matches_forced_modes() {
    let layer = opposed_pair();
    for task in [Task::Ising, Task::Maxcut] {
        let direct = layer.score_total(task);
        let via_assignment = layer.assignment_score(&layer.modes(), task).unwrap();
        assert_eq!(direct, via_assignment);
    }
    assert_eq!(layer.assignment_score(&[1, 1], Task::Maxcut).unwrap(), -0.0);
}

#[test]
fn assignment_score_rejects_bad_input() {
    let layer = opposed_pair();
    let err = layer.assignment_score(&[0], Task::Ising).unwrap_err();
    assert_eq!(err.info().code, "assignment-length");
    let err = layer.assignment_score(&[0, 2], Task::Ising).unwrap_err();
    assert_eq!(err.info().code, "state-out-of-range");
}
