//! The `TraceWriter` trait implemented by trace backends.

use crate::{OutputResult, RunRow, TickRow};

/// Trait implemented by trace backends.
///
/// All methods are infallible from the sink's perspective: errors are
/// stored internally and retrieved with [`SimOutputSink::take_error`].
///
/// [`SimOutputSink::take_error`]: crate::SimOutputSink::take_error
pub trait TraceWriter {
    /// Write one per-tick row.
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()>;

    /// Write one per-run row.
    fn write_run(&mut self, row: &RunRow) -> OutputResult<()>;

    /// Flush buffered rows.  Called at the end of every run; the writer
    /// stays usable for the next one.
    fn flush(&mut self) -> OutputResult<()>;
}
