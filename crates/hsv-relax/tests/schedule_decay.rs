use hsv_core::Task;
use hsv_relax::{Schedule, ScheduleKind, TEMPERATURE_FLOOR};

#[test]
fn task_selects_schedule_shape() {
    assert_eq!(Schedule::for_task(Task::Ising, 0.5).kind, ScheduleKind::Exponential);
    assert_eq!(Schedule::for_task(Task::Maxcut, 0.5).kind, ScheduleKind::Hyperbolic);
}

#[test]
fn step_zero_is_scale_plus_floor() {
    for task in [Task::Ising, Task::Maxcut] {
        let schedule = Schedule::for_task(task, 0.5);
        assert!((schedule.temperature(0) - 0.51).abs() < 1e-12);
    }
}

#[test]
fn known_values() {
    let ising = Schedule::for_task(Task::Ising, 2.0);
    assert!((ising.temperature(100) - (2.0 * (-1.0_f64).exp() + 0.01)).abs() < 1e-12);
    let maxcut = Schedule::for_task(Task::Maxcut, 2.0);
    assert!((maxcut.temperature(20) - (2.0 / 2.0 + 0.01)).abs() < 1e-12);
}

#[test]
fn both_schedules_decrease_strictly_towards_the_floor() {
    for task in [Task::Ising, Task::Maxcut] {
        let schedule = Schedule::for_task(task, 0.5);
        let temps: Vec<f64> = (0..1000).map(|i| schedule.temperature(i)).collect();
        for pair in temps.windows(2) {
            assert!(pair[1] < pair[0], "{task}: {} !< {}", pair[1], pair[0]);
        }
        assert!(temps.iter().all(|t| *t > TEMPERATURE_FLOOR));
        let far = schedule.temperature(1_000_000);
        assert!(far - TEMPERATURE_FLOOR < 1e-4, "{task}: {far}");
    }
}

#[test]
fn hyperbolic_decay_is_slower_for_large_steps() {
    let ising = Schedule::for_task(Task::Ising, 0.5);
    let maxcut = Schedule::for_task(Task::Maxcut, 0.5);
    for i in [400, 1000, 5000] {
        assert!(maxcut.temperature(i) > ising.temperature(i), "step {i}");
    }
}

#[test]
fn temperature_never_reaches_zero() {
    for scale in [0.0, -3.0, f64::NAN] {
        let schedule = Schedule::for_task(Task::Ising, scale);
        for i in [0, 1, 50] {
            assert!(schedule.temperature(i) >= TEMPERATURE_FLOOR);
        }
    }
}
