use criterion::{criterion_group, criterion_main, Criterion};
use hsv_core::{RngHandle, Task, TopologyKind};
use hsv_relax::{Layer, LayerConfig};

fn sample_layer(topology: TopologyKind) -> Layer {
    let mut rng = RngHandle::from_seed(42);
    let mut layer = Layer::new(16, 4, &LayerConfig::default(), &mut rng).unwrap();
    layer.configure_topology(topology, &mut rng);
    layer
}

fn bench_anneal(c: &mut Criterion) {
    let fully_connected = sample_layer(TopologyKind::FullyConnected);
    let ring = sample_layer(TopologyKind::Ring);

    c.bench_function("anneal_fully_connected_ising", |b| {
        b.iter(|| {
            let mut layer = fully_connected.clone();
            layer.anneal(100, 0.5, Task::Ising)
        })
    });
    c.bench_function("anneal_ring_maxcut", |b| {
        b.iter(|| {
            let mut layer = ring.clone();
            layer.anneal(100, 0.5, Task::Maxcut)
        })
    });
}

criterion_group!(benches, bench_anneal);
criterion_main!(benches);
