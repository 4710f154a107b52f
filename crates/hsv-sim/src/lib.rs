#![deny(missing_docs)]

//! Session layer around the hyperstate engine: the line-oriented shell, the
//! benchmark comparison against the reference oracles, and plain-text report
//! rendering shared by the shell and the one-shot CLI.

pub mod benchmark;
pub mod report;
pub mod session;

pub use benchmark::{run_benchmark, BenchmarkReport};
pub use session::{run_shell, Flow, Session, ShellError};
