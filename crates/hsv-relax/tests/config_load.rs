use std::io::Write;

use hsv_core::{HsvError, Task};
use hsv_relax::SessionConfig;

#[test]
fn defaults_match_the_shell() {
    let config = SessionConfig::default();
    assert_eq!(config.layer.coupling_strength, -1.0);
    assert_eq!(config.layer.field_range.low, -0.5);
    assert_eq!(config.layer.field_range.high, 0.5);
    assert_eq!(config.anneal.initial_temperature, 0.5);
    assert_eq!(config.anneal.task, Task::Ising);
    assert_eq!(config.benchmark.relax_iterations, 300);
    assert_eq!(config.benchmark.hill_climb_iterations, 1000);
    assert_eq!(config.seed_policy.master_seed, 42);
}

#[test]
fn partial_yaml_fills_defaults() {
    let config = SessionConfig::from_yaml_str(
        "anneal:\n  task: maxcut\nseed_policy:\n  master_seed: 7\n",
    )
    .unwrap();
    assert_eq!(config.anneal.task, Task::Maxcut);
    assert_eq!(config.anneal.initial_temperature, 0.5);
    assert_eq!(config.seed_policy.master_seed, 7);
    assert_eq!(config.benchmark.max_assignments, 1 << 22);
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "layer:\n  field_range: {{ low: 0.0, high: 0.1 }}\n  coupling_strength: 2.0\nbenchmark:\n  hill_climb_iterations: 50"
    )
    .unwrap();
    let config = SessionConfig::load(file.path()).unwrap();
    assert_eq!(config.layer.field_range.high, 0.1);
    assert_eq!(config.layer.coupling_strength, 2.0);
    assert_eq!(config.benchmark.hill_climb_iterations, 50);
    assert_eq!(config.benchmark.relax_iterations, 300);
}

#[test]
fn unreadable_or_malformed_files_are_config_errors() {
    let err = SessionConfig::load(std::path::Path::new("/nonexistent/hsv.yaml")).unwrap_err();
    match err {
        HsvError::Config(info) => {
            assert_eq!(info.code, "config-read");
            assert_eq!(
                info.context.get("path").map(String::as_str),
                Some("/nonexistent/hsv.yaml")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = SessionConfig::from_yaml_str("anneal:\n  task: tsp\n").unwrap_err();
    assert!(matches!(err, HsvError::Config(ref info) if info.code == "config-parse"));
}
