//! CSV action loader.
//!
//! # CSV format
//!
//! One row per scripted action, in dispatch order:
//!
//! ```csv
//! kind,floor,time_step,passenger
//! RequestCar,3,1,1
//! ExitCar,5,2,1
//! PushHelp,5,4,
//! ```
//!
//! The `passenger` column is optional, and so is each value in it.
//!
//! **`kind`** is one of `RequestCar`, `ExitCar`, `OpenDoor`, `CloseDoor`,
//! `PushHelp` (case-insensitive).  Rows with any other kind are skipped with a
//! warning; they never abort the load.  A malformed `floor` or `time_step` is
//! a [`ScheduleError::Parse`].

use std::io::Read;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use lift_core::{Floor, PassengerId, Tick};

use crate::{ActionKind, ActionSchedule, PassengerAction, ScheduleError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ActionRecord {
    kind:      String,
    floor:     u32,
    time_step: u64,
    #[serde(default)]
    passenger: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`ActionSchedule`] from a CSV file.
pub fn load_actions_csv(path: &Path) -> Result<ActionSchedule, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_actions_reader(file)
}

/// Like [`load_actions_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a scenario in a
/// binary.
pub fn load_actions_reader<R: Read>(reader: R) -> Result<ActionSchedule, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut schedule = ActionSchedule::new();

    for (line, result) in csv_reader.deserialize::<ActionRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        match row.kind.parse::<ActionKind>() {
            Ok(kind) => {
                let mut action = PassengerAction::new(kind, Floor(row.floor), Tick(row.time_step));
                if let Some(id) = row.passenger {
                    action = action.with_passenger(PassengerId(id));
                }
                schedule.push(action)?;
            }
            Err(e) => {
                // Header is line 1, so data row `line` sits on line + 2.
                warn!("skipping schedule row {}: {e}", line + 2);
            }
        }
    }

    Ok(schedule)
}
