//! Sinks that bridge `NarrationSink` to real outputs.

use std::io::Write;

use lift_sim::{NarrationSink, RunSummary, TickReport};

use crate::row::{RunRow, TickRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

// ── LineSink ──────────────────────────────────────────────────────────────────

/// Writes each narration line, newline-terminated, to `W`.
///
/// Flushes at the end of every tick so interactive output keeps up with the
/// clock.
pub struct LineSink<W: Write> {
    out:        W,
    last_error: Option<OutputError>,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<W: Write> NarrationSink for LineSink<W> {
    fn emit(&mut self, line: &str) {
        let result = writeln!(self.out, "{line}");
        self.store_err(result);
    }

    fn on_tick_end(&mut self, _report: &TickReport) {
        let result = self.out.flush();
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        let result = self.out.flush();
        self.store_err(result);
    }
}

// ── SimOutputSink ─────────────────────────────────────────────────────────────

/// Narration lines to `L`, plus a per-tick and per-run trace to any
/// [`TraceWriter`] backend.
///
/// Errors from either side are stored internally because `NarrationSink`
/// methods have no return value.  Check them with
/// [`take_error`][Self::take_error] once the run is over.
pub struct SimOutputSink<W: TraceWriter, L: Write> {
    writer:     W,
    lines:      LineSink<L>,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter, L: Write> SimOutputSink<W, L> {
    pub fn new(writer: W, lines: L) -> Self {
        Self { writer, lines: LineSink::new(lines), last_error: None }
    }

    /// Take the first stored error from the trace writer or the line output.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take().or_else(|| self.lines.take_error())
    }

    /// Unwrap the trace writer and line output.
    pub fn into_parts(self) -> (W, L) {
        (self.writer, self.lines.into_inner())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter, L: Write> NarrationSink for SimOutputSink<W, L> {
    fn emit(&mut self, line: &str) {
        self.lines.emit(line);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.lines.on_tick_end(report);
        let result = self.writer.write_tick(&TickRow::from(report));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        self.lines.on_sim_end(summary);
        let result = self
            .writer
            .write_run(&RunRow::from(summary))
            .and_then(|()| self.writer.flush());
        self.store_err(result);
    }
}
