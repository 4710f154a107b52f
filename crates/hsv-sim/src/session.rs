//! Interactive command session.
//!
//! A [`Session`] owns at most one [`Layer`] and the random streams used to
//! draw it. Each successful `init` derives two fresh substreams from the
//! master seed: one for the layer and its topology rebinds, one for the
//! oracles, so repeated sessions with the same seed and script print the same
//! numbers.

use std::io::{self, BufRead, Write};

use hsv_core::{ErrorInfo, HsvError, RngHandle, Task, TopologyKind};
use hsv_relax::{kernel, AnnealConfig, AnnealReport, Layer, SessionConfig};
use thiserror::Error;
use tracing::{debug, info};

use crate::benchmark::{run_benchmark, BenchmarkReport};
use crate::report;

/// Prompt printed before every line is read.
pub const PROMPT: &str = "(HyperstateVCpu) ";
/// Banner printed when the shell starts.
pub const INTRO: &str = "Hyperstate vCPU Simulator. Type 'help' for commands or 'quit' to exit.";
/// Usage line for a malformed `init`.
pub const INIT_USAGE: &str = "Usage: init <num_nodes> <num_states>";
/// Usage line for a malformed `optimize`.
pub const OPTIMIZE_USAGE: &str = "Usage: optimize <iterations> [<initial_temperature>] [<task>]";
/// Message printed when a command needs a layer and none exists.
pub const NOT_INITIALIZED: &str = "Layer not initialized. Use 'init' first.";

const COMMANDS: &[(&str, &str)] = &[
    ("benchmark", "Run benchmark: benchmark <task>"),
    (
        "help",
        "List available commands with \"help\" or detailed help with \"help cmd\".",
    ),
    ("init", "Initialize layer: init <num_nodes> <num_states>"),
    (
        "optimize",
        "Run optimization: optimize <iterations> [<initial_temperature>] [<task>]",
    ),
    ("quit", "Exit the simulator"),
    (
        "set_topology",
        "Set graph topology: set_topology <fully_connected|ring>",
    ),
];

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// End the session.
    Exit,
}

/// Failure while executing one shell command.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Writing to the output stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The command was rejected; the session carries on.
    #[error(transparent)]
    Engine(#[from] HsvError),
}

/// Shell state: configuration, the current layer and its random streams.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    layer: Option<Layer>,
    inits: u64,
    layer_rng: RngHandle,
    oracle_rng: RngHandle,
}

impl Session {
    /// Creates an empty session; nothing is drawn until the first `init`.
    pub fn new(config: SessionConfig) -> Self {
        let master = config.seed_policy.master_seed;
        Self {
            layer_rng: RngHandle::substream(master, 0),
            oracle_rng: RngHandle::substream(master, 1),
            config,
            layer: None,
            inits: 0,
        }
    }

    /// Configuration the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current layer, if `init` has succeeded.
    pub fn layer(&self) -> Option<&Layer> {
        self.layer.as_ref()
    }

    /// Replaces the layer with a fresh fully-connected instance.
    ///
    /// A failed `init` keeps the previous layer.
    pub fn init(&mut self, num_nodes: usize, num_states: usize) -> Result<&Layer, HsvError> {
        let master = self.config.seed_policy.master_seed;
        let mut layer_rng = RngHandle::substream(master, 2 * self.inits);
        let layer = Layer::new(num_nodes, num_states, &self.config.layer, &mut layer_rng)
            .map_err(|err| err.with_hint(INIT_USAGE))?;
        self.oracle_rng = RngHandle::substream(master, 2 * self.inits + 1);
        self.layer_rng = layer_rng;
        self.inits += 1;
        info!(num_nodes, num_states, master_seed = master, "initialised layer");
        let layer: &Layer = self.layer.insert(layer);
        Ok(layer)
    }

    /// Rebinds the current layer's topology with freshly drawn couplings.
    pub fn set_topology(&mut self, kind: TopologyKind) -> Result<(), HsvError> {
        let layer = self.layer.as_mut().ok_or_else(not_initialized)?;
        layer.configure_topology(kind, &mut self.layer_rng);
        Ok(())
    }

    /// Reads the baseline total, anneals the current layer and reports both.
    pub fn optimize(&mut self, config: &AnnealConfig) -> Result<AnnealReport, HsvError> {
        let layer = self.layer.as_mut().ok_or_else(not_initialized)?;
        Ok(kernel::run(layer, config))
    }

    /// Relaxes the current layer and compares it against both oracles.
    pub fn benchmark(&mut self, task: Task) -> Result<BenchmarkReport, HsvError> {
        let layer = self.layer.as_mut().ok_or_else(not_initialized)?;
        run_benchmark(layer, task, &self.config.benchmark, &mut self.oracle_rng)
    }

    /// Executes one input line, printing results and rejections to `out`.
    ///
    /// Only output failures are returned; rejected commands are rendered and
    /// the session continues.
    pub fn dispatch(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match self.execute(line, out) {
            Ok(flow) => Ok(flow),
            Err(ShellError::Engine(err)) => {
                debug!(error = %err, "command rejected");
                let info = err.info();
                writeln!(out, "{}", info.hint.as_deref().unwrap_or(info.message.as_str()))?;
                Ok(Flow::Continue)
            }
            Err(ShellError::Io(err)) => Err(err),
        }
    }

    fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        let (command, arg) = split_command(line);
        match command {
            "init" => {
                let (num_nodes, num_states) = parse_init(arg)?;
                self.init(num_nodes, num_states)?;
                writeln!(
                    out,
                    "Initialized layer with {num_nodes} nodes and {num_states} states"
                )?;
            }
            "set_topology" => {
                if self.layer.is_none() {
                    return Err(not_initialized().into());
                }
                let kind: TopologyKind = arg.parse()?;
                self.set_topology(kind)?;
                writeln!(out, "Set topology to {arg}")?;
            }
            "optimize" => {
                if self.layer.is_none() {
                    return Err(not_initialized().into());
                }
                let config = parse_optimize(arg, &self.config.anneal)?;
                let report = self.optimize(&config)?;
                report::write_optimize(out, &report)?;
            }
            "benchmark" => {
                let task = arg.parse().unwrap_or(Task::Ising);
                let report = self.benchmark(task)?;
                report::write_benchmark(out, &report)?;
            }
            "help" | "?" => write_help(out, arg)?,
            "quit" => {
                writeln!(out, "Exiting HyperstateVCpu")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(out, "*** Unknown syntax: {line}")?,
        }
        Ok(Flow::Continue)
    }
}

/// Runs the read-eval-print loop until `quit` or end of input.
pub fn run_shell(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{INTRO}")?;
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        if session.dispatch(&line, out)? == Flow::Exit {
            break;
        }
    }
    out.flush()
}

fn not_initialized() -> HsvError {
    HsvError::NotInitialized(ErrorInfo::new("not-initialized", NOT_INITIALIZED))
}

/// Splits a line into its command word and the trimmed remainder.
fn split_command(line: &str) -> (&str, &str) {
    if let Some(rest) = line.strip_prefix('?') {
        return ("?", rest.trim());
    }
    let end = line
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    (&line[..end], line[end..].trim())
}

fn parse_init(arg: &str) -> Result<(usize, usize), HsvError> {
    let usage = || {
        HsvError::InvalidArguments(
            ErrorInfo::new("init-usage", "expected two positive integers")
                .with_context("args", arg)
                .with_hint(INIT_USAGE),
        )
    };
    let parts: Vec<&str> = arg.split_whitespace().collect();
    let [nodes, states] = parts.as_slice() else {
        return Err(usage());
    };
    let num_nodes = nodes.parse().map_err(|_| usage())?;
    let num_states = states.parse().map_err(|_| usage())?;
    Ok((num_nodes, num_states))
}

fn parse_optimize(arg: &str, defaults: &AnnealConfig) -> Result<AnnealConfig, HsvError> {
    let usage = |err: HsvError| err.with_hint(OPTIMIZE_USAGE);
    let invalid = |code: &str, message: String| usage(HsvError::invalid(code, message));
    let mut parts = arg.split_whitespace();
    let iterations = match parts.next() {
        Some(text) => text
            .parse()
            .map_err(|_| invalid("bad-iterations", format!("invalid iteration count '{text}'")))?,
        None => return Err(invalid("missing-iterations", "iteration count is required".into())),
    };
    let initial_temperature = match parts.next() {
        Some(text) => text
            .parse()
            .map_err(|_| invalid("bad-temperature", format!("invalid temperature '{text}'")))?,
        None => defaults.initial_temperature,
    };
    let task = match parts.next() {
        Some(text) => text.parse().map_err(usage)?,
        None => defaults.task,
    };
    Ok(AnnealConfig {
        iterations,
        initial_temperature,
        task,
    })
}

fn write_help(out: &mut impl Write, topic: &str) -> io::Result<()> {
    if topic.is_empty() {
        writeln!(out)?;
        writeln!(out, "Documented commands (type help <topic>):")?;
        writeln!(out, "========================================")?;
        let names: Vec<&str> = COMMANDS.iter().map(|(name, _)| *name).collect();
        writeln!(out, "{}", names.join("  "))?;
        return writeln!(out);
    }
    match COMMANDS.iter().find(|(name, _)| *name == topic) {
        Some((_, doc)) => writeln!(out, "{doc}"),
        None => writeln!(out, "*** No help on {topic}"),
    }
}
