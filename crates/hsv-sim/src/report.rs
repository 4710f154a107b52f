//! Plain-text rendering of engine and benchmark results.

use std::io::{self, Write};

use hsv_core::Task;
use hsv_relax::AnnealReport;

use crate::benchmark::BenchmarkReport;

/// Score label with a leading capital, e.g. `Cut value`.
fn capitalized_label(task: Task) -> String {
    let label = task.score_label();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Noun used in the percentage-of-optimal lines.
fn optimum_label(task: Task) -> &'static str {
    match task {
        Task::Ising => "energy",
        Task::Maxcut => "cut",
    }
}

/// Writes the three lines printed after `optimize`.
pub fn write_optimize(out: &mut impl Write, report: &AnnealReport) -> io::Result<()> {
    let label = report.task.score_label();
    writeln!(out, "Initial {label}: {:.4}", report.initial_score)?;
    writeln!(
        out,
        "Final {label} after {} iterations: {:.4}",
        report.iterations, report.final_score
    )?;
    writeln!(out, "Time: {:.6} seconds", report.elapsed_seconds)
}

/// Writes the benchmark comparison block.
pub fn write_benchmark(out: &mut impl Write, report: &BenchmarkReport) -> io::Result<()> {
    let task = report.task;
    let label = task.score_label();
    let title = capitalized_label(task);
    let optimum = optimum_label(task);
    let relax = &report.relax;

    writeln!(out)?;
    writeln!(
        out,
        "Benchmark: {} problem with {} nodes",
        task.as_str().to_uppercase(),
        report.num_nodes
    )?;
    writeln!(out, "Hyperstate layer - Initial {label}: {:.4}", relax.initial_score)?;
    writeln!(
        out,
        "Hyperstate layer - Final {label} after {} iterations: {:.4}, Time: {:.6} seconds",
        relax.iterations, relax.final_score, relax.elapsed_seconds
    )?;
    if let Some(percent) = report.percentage_of_optimal(relax.final_score) {
        writeln!(
            out,
            "Percentage of optimal {optimum} (based on exhaustive): {percent:.2}%"
        )?;
    }

    match &report.exhaustive {
        Some(outcome) => {
            writeln!(
                out,
                "Classical exhaustive search - {title}: {:.4}, Iterations: {}, Time: {:.6} seconds",
                outcome.score, outcome.iterations, outcome.elapsed_seconds
            )?;
            if let Some(advantage) = report.advantage(outcome) {
                writeln!(out, "Advantage (iterations, exhaustive): {advantage:.2}x")?;
            }
        }
        None => writeln!(
            out,
            "Classical exhaustive search - skipped: {}^{} assignments exceed the cap of {}",
            report.num_states, report.num_nodes, report.max_assignments
        )?,
    }

    let hill = &report.hill_climbing;
    writeln!(
        out,
        "Classical hill climbing - {title}: {:.4}, Iterations: {}, Time: {:.6} seconds",
        hill.score, hill.iterations, hill.elapsed_seconds
    )?;
    if let Some(advantage) = report.advantage(hill) {
        writeln!(out, "Advantage (iterations, hill climbing): {advantage:.2}x")?;
    }
    if let Some(percent) = report.percentage_of_optimal(hill.score) {
        writeln!(
            out,
            "Percentage of optimal {optimum} (hill climbing): {percent:.2}%"
        )?;
    }
    Ok(())
}
