//! `lift-output`: narration and trace writers for the lift simulator.
//!
//! | Sink / writer        | Destination                                         |
//! |----------------------|-----------------------------------------------------|
//! | [`LineSink`]         | any `io::Write`, one narration line per line        |
//! | [`CsvTraceWriter`]   | `tick_trace.csv`, `run_summaries.csv` in a directory |
//! | [`SimOutputSink`]    | both at once: narration lines + a [`TraceWriter`]   |
//!
//! Every sink here implements `lift_sim::NarrationSink`, which cannot fail.
//! Write errors are stored and retrieved afterwards with `take_error`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvTraceWriter, SimOutputSink};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut sink = SimOutputSink::new(writer, std::io::stdout());
//! sim.run_to_completion(&mut sink, 10_000);
//! if let Some(e) = sink.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{LineSink, SimOutputSink};
pub use row::{RunRow, TickRow};
pub use writer::TraceWriter;
