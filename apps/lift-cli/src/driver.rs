//! Tick drivers: real-time (timer + stdin commands) and headless.
//!
//! Both drive a single `Sim` from one thread, so a tick is never processed
//! while another is in flight.  In real-time mode the timer and the command
//! reader are multiplexed with `select!`, and the driver outlives individual
//! runs: a stopped or finished run can be started again until the operator
//! quits.

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use crossbeam_channel as cbc;
use log::{debug, info, warn};

use lift_behavior::BehaviorModel;
use lift_core::RunState;
use lift_sim::{NarrationSink, RunSummary, Sim, StepOutcome};

/// Upper bound on ticks in headless mode.
pub const HEADLESS_MAX_TICKS: u64 = 1_000_000;

/// An operator command read from stdin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `r`: start a new run from the scenario.
    Start,
    /// `p`: pause when running, resume when paused.
    TogglePause,
    /// `s`: stop the run; the driver keeps waiting for `r` or `q`.
    Stop,
    /// `q`: stop and exit.
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "run" | "start" => Some(Command::Start),
            "p" | "pause" | "resume" => Some(Command::TogglePause),
            "s" | "stop" => Some(Command::Stop),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Spawn a thread that turns stdin lines into [`Command`]s.
///
/// The channel disconnects when stdin closes.
pub fn spawn_command_reader() -> io::Result<cbc::Receiver<Command>> {
    let (tx, rx) = cbc::unbounded();
    thread::Builder::new()
        .name("stdin_commands".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                match Command::parse(&line) {
                    Some(cmd) => {
                        if tx.send(cmd).is_err() {
                            break;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => warn!("unknown command {line:?} (use r, p, s or q)"),
                }
            }
        })?;
    Ok(rx)
}

/// Run ticks back-to-back with no delay.
pub fn run_headless<B: BehaviorModel, N: NarrationSink>(sim: &mut Sim<B>, sink: &mut N) -> Option<RunSummary> {
    sim.run_to_completion(sink, HEADLESS_MAX_TICKS)
}

/// Start a run and deliver one tick every `interval`, honouring operator
/// commands in between.  Returns the most recent run's summary when the
/// operator quits, or once no run is active after the command channel has
/// closed.
pub fn run_realtime<B: BehaviorModel, N: NarrationSink>(
    sim:      &mut Sim<B>,
    sink:     &mut N,
    interval: Duration,
    commands: cbc::Receiver<Command>,
) -> Option<RunSummary> {
    sim.start(sink);

    let ticker = cbc::tick(interval);
    let mut commands = Some(commands);

    loop {
        // A closed stdin just stops delivering commands.
        let command_rx = match &commands {
            Some(rx) => rx.clone(),
            None if sim.state() == RunState::Stopped => return sim.last_run(),
            None => cbc::never(),
        };
        cbc::select! {
            recv(ticker) -> _ => {
                if let StepOutcome::Finished(summary) = sim.on_tick(sink) {
                    if commands.is_some() {
                        info!("run finished at {} ({}); r to restart, q to quit", summary.final_tick, summary.reason);
                    }
                }
            }
            recv(command_rx) -> cmd => match cmd {
                Ok(Command::Start) => {
                    if sim.start(sink) == StepOutcome::Ignored {
                        debug!("start ignored: a run is already active");
                    }
                }
                Ok(Command::TogglePause) => {
                    if !sim.pause(sink) {
                        sim.resume(sink);
                    }
                }
                Ok(Command::Stop) => {
                    let at = sim.clock().current_tick;
                    if sim.stop(sink) {
                        info!("operator stop at {at}; r to restart, q to quit");
                    }
                }
                Ok(Command::Quit) => {
                    sim.stop(sink);
                    return sim.last_run();
                }
                Err(_) => {
                    debug!("command channel closed");
                    commands = None;
                }
            },
        }
    }
}
