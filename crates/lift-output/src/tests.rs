//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvTraceWriter, RUN_FILE, TICK_FILE};
    use crate::row::{RunRow, TickRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn headers_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.flush().unwrap();

        assert_eq!(headers(dir.path().join(TICK_FILE)), ["tick", "floor", "motion", "completed", "total"]);
        assert_eq!(headers(dir.path().join(RUN_FILE)), ["final_tick", "completed", "total", "reason"]);
    }

    #[test]
    fn rows_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_tick(&TickRow { tick: 3, floor: 4, motion: "Idle".into(), completed: 1, total: 2 }).unwrap();
        w.write_run(&RunRow { final_tick: 3, completed: 2, total: 2, reason: "stopped".into() }).unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TICK_FILE)).unwrap();
        let rec = rdr.records().next().unwrap().unwrap();
        assert_eq!(rec.iter().collect::<Vec<_>>(), ["3", "4", "Idle", "1", "2"]);

        let mut rdr = csv::Reader::from_path(dir.path().join(RUN_FILE)).unwrap();
        let rec = rdr.records().next().unwrap().unwrap();
        assert_eq!(&rec[3], "stopped");
    }

    #[test]
    fn missing_dir_errors() {
        let dir = tmp();
        assert!(CsvTraceWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod sink_tests {
    use std::io;

    use lift_behavior::RandomBehavior;
    use lift_core::{BuildingConfig, SimConfig};
    use lift_sim::{NarrationSink, SimBuilder};
    use tempfile::TempDir;

    use crate::csv::{RUN_FILE, TICK_FILE};
    use crate::{CsvTraceWriter, LineSink, OutputError, SimOutputSink};

    /// A writer that fails every call.
    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn line_sink_writes_lines() {
        let mut sink = LineSink::new(Vec::new());
        sink.emit("Simulation started.");
        sink.emit("Bell rings.");
        assert!(sink.take_error().is_none());
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Simulation started.\nBell rings.\n");
    }

    #[test]
    fn line_sink_keeps_first_error() {
        let mut sink = LineSink::new(Broken);
        sink.emit("a");
        sink.emit("b");
        assert!(matches!(sink.take_error(), Some(OutputError::Io(_))));
        assert!(sink.take_error().is_none());
    }

    #[test]
    fn full_run_traced() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let writer = CsvTraceWriter::new(dir.path()).unwrap();
        let mut sink = SimOutputSink::new(writer, Vec::new());

        let mut sim = SimBuilder::new(SimConfig { tick_interval_ms: 1, seed: Some(9) }, RandomBehavior)
            .building(BuildingConfig::new(3, 6))
            .build()
            .unwrap();
        let summary = sim.run_to_completion(&mut sink, 100).unwrap();
        assert!(sink.take_error().is_none());

        let (_, lines) = sink.into_parts();
        let text = String::from_utf8(lines).unwrap();
        assert!(text.starts_with("Simulation started.\n"));
        assert!(text.ends_with("Simulation Complete\n"));

        // One row per processed tick, tick 0 included.
        let rdr = csv::Reader::from_path(dir.path().join(TICK_FILE)).unwrap();
        assert_eq!(rdr.into_records().count() as u64, summary.final_tick.0 + 1);

        let mut rdr = csv::Reader::from_path(dir.path().join(RUN_FILE)).unwrap();
        let runs: Vec<_> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(&runs[0][1], "3");
        assert_eq!(&runs[0][3], "all passengers arrived");
    }
}
