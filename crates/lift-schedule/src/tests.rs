//! Unit tests for lift-schedule.

use lift_core::{ActionId, Floor, PassengerId, Tick};

use crate::{ActionKind, ActionSchedule, PassengerAction, ProcessedActions, ScheduleError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn act(kind: ActionKind, floor: u32, t: u64) -> PassengerAction {
    PassengerAction::new(kind, Floor(floor), Tick(t))
}

/// Request at t=1, exit at t=2, door open also at t=2, help at t=4.
fn sample_schedule() -> ActionSchedule {
    [
        act(ActionKind::RequestCar, 3, 1),
        act(ActionKind::ExitCar, 5, 2),
        act(ActionKind::OpenDoor, 5, 2),
        act(ActionKind::PushHelp, 5, 4),
    ]
    .into_iter()
    .collect()
}

// ── ActionKind ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("requestcar".parse::<ActionKind>().unwrap(), ActionKind::RequestCar);
        assert_eq!(" PushHelp ".parse::<ActionKind>().unwrap(), ActionKind::PushHelp);
    }

    #[test]
    fn display_matches_parse() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.to_string().parse::<ActionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_error() {
        assert!("Teleport".parse::<ActionKind>().is_err());
    }
}

// ── ActionSchedule ────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_ids() {
        let mut s = ActionSchedule::new();
        assert_eq!(s.push(act(ActionKind::OpenDoor, 1, 0)).unwrap(), ActionId(0));
        assert_eq!(s.push(act(ActionKind::CloseDoor, 1, 0)).unwrap(), ActionId(1));
        assert_eq!(s.len(), 2);
        assert_eq!(s.get(ActionId(1)).unwrap().kind, ActionKind::CloseDoor);
        assert!(s.get(ActionId(2)).is_none());
    }

    #[test]
    fn due_at_matches_exactly_in_insertion_order() {
        let s = sample_schedule();
        let due: Vec<_> = s.due_at(Tick(2)).map(|(id, a)| (id, a.kind)).collect();
        assert_eq!(
            due,
            [(ActionId(1), ActionKind::ExitCar), (ActionId(2), ActionKind::OpenDoor)]
        );
        assert_eq!(s.due_at(Tick(3)).count(), 0);
        assert_eq!(s.due_at(Tick(4)).count(), 1);
    }

    #[test]
    fn push_past_limit_is_rejected() {
        let mut s = ActionSchedule::with_limit(2);
        s.push(act(ActionKind::OpenDoor, 1, 0)).unwrap();
        s.push(act(ActionKind::CloseDoor, 1, 0)).unwrap();
        let err = s.push(act(ActionKind::OpenDoor, 1, 1)).unwrap_err();
        assert!(matches!(err, ScheduleError::Full(2)), "got {err:?}");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn capacity_matches_id_range() {
        assert!(ActionId::try_from(crate::MAX_ACTIONS - 1).is_ok());
    }

    #[test]
    fn actor_names_passenger() {
        let a = act(ActionKind::RequestCar, 2, 0);
        assert_eq!(a.actor(), "Passenger");
        assert_eq!(a.with_passenger(PassengerId(4)).actor(), "Passenger 4");
    }

    #[test]
    fn empty_schedule() {
        let s = ActionSchedule::new();
        assert!(s.is_empty());
        assert_eq!(s.due_at(Tick(0)).count(), 0);
    }
}

// ── ProcessedActions ──────────────────────────────────────────────────────────

#[cfg(test)]
mod processed_tests {
    use super::*;

    #[test]
    fn mark_is_idempotent() {
        let mut p = ProcessedActions::new();
        assert!(p.mark(ActionId(3)));
        assert!(!p.mark(ActionId(3)));
        assert!(p.contains(ActionId(3)));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut p = ProcessedActions::new();
        p.mark(ActionId(0));
        p.mark(ActionId(1));
        p.clear();
        assert!(p.is_empty());
        assert!(!p.contains(ActionId(0)));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::load_actions_reader;

    #[test]
    fn loads_rows_in_file_order() {
        let csv = "kind,floor,time_step\nRequestCar,3,1\nExitCar,5,2\n";
        let s = load_actions_reader(Cursor::new(csv)).unwrap();
        assert_eq!(s.actions(), &[act(ActionKind::RequestCar, 3, 1), act(ActionKind::ExitCar, 5, 2)]);
    }

    #[test]
    fn unknown_kind_rows_are_skipped() {
        let csv = "kind,floor,time_step\nRequestCar,3,1\nDance,2,2\nCloseDoor,3,3\n";
        let s = load_actions_reader(Cursor::new(csv)).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.actions()[1].kind, ActionKind::CloseDoor);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let csv = "kind, floor, time_step\n openDoor , 2 , 7\n";
        let s = load_actions_reader(Cursor::new(csv)).unwrap();
        assert_eq!(s.actions(), &[act(ActionKind::OpenDoor, 2, 7)]);
    }

    #[test]
    fn malformed_number_is_parse_error() {
        let csv = "kind,floor,time_step\nRequestCar,three,1\n";
        let err = load_actions_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn optional_passenger_column() {
        let csv = "kind,floor,time_step,passenger\nRequestCar,3,1,7\nExitCar,5,2,\n";
        let s = load_actions_reader(Cursor::new(csv)).unwrap();
        assert_eq!(s.actions()[0].passenger, Some(PassengerId(7)));
        assert_eq!(s.actions()[1].passenger, None);
    }

    #[test]
    fn header_only_is_empty() {
        let s = load_actions_reader(Cursor::new("kind,floor,time_step\n")).unwrap();
        assert!(s.is_empty());
    }
}
