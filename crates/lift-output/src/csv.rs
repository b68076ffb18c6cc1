//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_trace.csv`     (`tick,floor,motion,completed,total`)
//! - `run_summaries.csv`  (`final_tick,completed,total,reason`)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, RunRow, TickRow};

pub const TICK_FILE: &str = "tick_trace.csv";
pub const RUN_FILE: &str = "run_summaries.csv";

/// Writes the simulation trace to two CSV files.
pub struct CsvTraceWriter {
    ticks: Writer<File>,
    runs:  Writer<File>,
}

impl CsvTraceWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  `dir` must exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ticks = Writer::from_path(dir.join(TICK_FILE))?;
        ticks.write_record(["tick", "floor", "motion", "completed", "total"])?;

        let mut runs = Writer::from_path(dir.join(RUN_FILE))?;
        runs.write_record(["final_tick", "completed", "total", "reason"])?;

        Ok(Self { ticks, runs })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.floor.to_string(),
            row.motion.clone(),
            row.completed.to_string(),
            row.total.to_string(),
        ])?;
        Ok(())
    }

    fn write_run(&mut self, row: &RunRow) -> OutputResult<()> {
        self.runs.write_record(&[
            row.final_tick.to_string(),
            row.completed.to_string(),
            row.total.to_string(),
            row.reason.clone(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.ticks.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
