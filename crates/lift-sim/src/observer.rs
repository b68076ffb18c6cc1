//! The narration sink: where the simulation tells its story.

use lift_core::{Floor, Tick};

use crate::{Motion, RunSummary};

/// Divider line emitted between narrated blocks.
pub const SEPARATOR: &str = "----------------";

/// Elevator and progress state at the end of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick:      Tick,
    pub floor:     Floor,
    pub motion:    Motion,
    pub completed: u32,
    pub total:     u32,
}

/// Append-only receiver for narration lines, plus lifecycle hooks.
///
/// Only [`emit`][Self::emit] is required.  Sinks are fire-and-forget: they
/// have no way to fail the simulation, so implementations that can fail
/// (files, sockets) must hold on to their own errors.
///
/// # Example: prefix every line with the wall clock
///
/// ```rust,ignore
/// struct Stamped;
///
/// impl NarrationSink for Stamped {
///     fn emit(&mut self, line: &str) {
///         println!("[{:?}] {line}", std::time::SystemTime::now());
///     }
/// }
/// ```
pub trait NarrationSink {
    /// Append one line of narration.
    fn emit(&mut self, line: &str);

    /// Called after every processed tick, including tick 0.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called once when a run ends, whether it completed or was stopped.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

impl<N: NarrationSink + ?Sized> NarrationSink for &mut N {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        (**self).on_tick_end(report);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        (**self).on_sim_end(summary);
    }
}

/// A [`NarrationSink`] that discards everything.
pub struct NoopSink;

impl NarrationSink for NoopSink {
    fn emit(&mut self, _line: &str) {}
}

/// An in-memory [`NarrationSink`] that keeps every line, tick report, and
/// run summary.  Handy for tests and for rendering a run after the fact.
#[derive(Debug, Default)]
pub struct Transcript {
    pub lines:     Vec<String>,
    pub ticks:     Vec<TickReport>,
    pub summaries: Vec<RunSummary>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if any line equals `line` exactly.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Number of lines equal to `line`.
    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| *l == line).count()
    }

    /// Index of the first line equal to `line`.
    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines.iter().position(|l| l == line)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.ticks.clear();
        self.summaries.clear();
    }
}

impl NarrationSink for Transcript {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.ticks.push(*report);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        self.summaries.push(*summary);
    }
}
