//! lift: run the elevator simulator from the command line.
//!
//! ```text
//! lift --scenario scenarios/power_out.toml
//! lift --passengers 4 --floors 8 --seed 7 --trigger fire=3 --headless
//! lift --scenario scenarios/power_out.toml --trace ./trace
//! ```
//!
//! In real-time mode type `p` + Enter to pause/resume, `s` to stop, `r` to
//! start again, `q` to quit.  Set `RUST_LOG` (or pass `--verbose`) for diagnostic logging on
//! stderr; narration goes to stdout.

mod config;
mod driver;


use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use lift_behavior::RandomBehavior;
use lift_core::{SafetyEventKind, SimConfig, Tick};
use lift_output::{CsvTraceWriter, LineSink, OutputError, SimOutputSink};
use lift_schedule::load_actions_csv;
use lift_sim::{NarrationSink, RunSummary, Scenario, Sim, SimBuilder};

use config::ScenarioFile;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lift", version, about = "Tick-driven single-elevator simulator")]
struct Args {
    /// TOML scenario file.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// CSV of scripted actions (`kind,floor,time_step`); replaces any
    /// `[[actions]]` in the scenario file.
    #[arg(short, long)]
    actions: Option<PathBuf>,

    #[arg(short, long)]
    passengers: Option<u32>,

    #[arg(short, long)]
    floors: Option<u32>,

    /// RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks in real-time mode.
    #[arg(short, long)]
    interval: Option<u64>,

    /// Safety trigger as `KIND=STEP`, e.g. `fire=4`.  Repeatable.
    #[arg(short, long = "trigger", value_parser = parse_trigger)]
    triggers: Vec<(SafetyEventKind, Tick)>,

    /// Run every tick back-to-back with no delay and no stdin commands.
    #[arg(long)]
    headless: bool,

    /// Directory for `tick_trace.csv` and `run_summaries.csv`.
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Debug-level logging (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,
}

fn parse_trigger(s: &str) -> Result<(SafetyEventKind, Tick), String> {
    let (kind, step) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=STEP, got {s:?}"))?;
    let kind = kind.parse::<SafetyEventKind>().map_err(|e| e.to_string())?;
    let step = step
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("bad time step {step:?}: {e}"))?;
    Ok((kind, Tick(step)))
}

impl Args {
    /// Resolve the scenario file, CSV actions, and flag overrides into the
    /// run settings and scenario.
    fn resolve(&self) -> Result<(SimConfig, Scenario)> {
        let file = match &self.scenario {
            Some(path) => ScenarioFile::load(path)?,
            None => ScenarioFile::default(),
        };
        let (mut config, mut scenario) = file.into_parts();

        if let Some(path) = &self.actions {
            scenario.schedule = load_actions_csv(path)
                .with_context(|| format!("failed to load actions from {}", path.display()))?;
        }
        if let Some(n) = self.passengers {
            scenario.building.passenger_count = n;
        }
        if let Some(n) = self.floors {
            scenario.building.floor_count = n;
        }
        if scenario.building.elevator_count == 0 {
            scenario.building.elevator_count = 1;
        }
        for &(kind, tick) in &self.triggers {
            scenario.triggers.set(kind, Some(tick));
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(ms) = self.interval {
            config.tick_interval_ms = ms;
        }
        Ok((config, scenario))
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let (config, scenario) = args.resolve()?;
    info!("scenario: {}", scenario.building);

    let mut sim = SimBuilder::new(config, RandomBehavior)
        .scenario(scenario)
        .build()
        .context("invalid simulation configuration")?;

    let stdout = io::stdout();
    let (summary, error) = match &args.trace {
        Some(dir) => {
            let writer = CsvTraceWriter::new(dir)
                .with_context(|| format!("failed to create trace files in {}", dir.display()))?;
            let mut sink = SimOutputSink::new(writer, stdout.lock());
            let summary = drive(&args, &mut sim, &mut sink)?;
            (summary, sink.take_error())
        }
        None => {
            let mut sink = LineSink::new(stdout.lock());
            let summary = drive(&args, &mut sim, &mut sink)?;
            (summary, sink.take_error())
        }
    };

    report(summary, error)
}

fn drive<N: NarrationSink>(args: &Args, sim: &mut Sim<RandomBehavior>, sink: &mut N) -> Result<Option<RunSummary>> {
    if args.headless {
        return Ok(driver::run_headless(sim, sink));
    }
    let interval = Duration::from_millis(sim.config().tick_interval_ms);
    let commands = driver::spawn_command_reader().context("failed to start stdin reader")?;
    Ok(driver::run_realtime(sim, sink, interval, commands))
}

fn report(summary: Option<RunSummary>, error: Option<OutputError>) -> Result<()> {
    if let Some(e) = error {
        return Err(e).context("output error");
    }
    let Some(s) = summary else {
        bail!("no run completed (headless runs stop after {} ticks)", driver::HEADLESS_MAX_TICKS);
    };
    info!("run ended at {} ({}): {}/{} passengers", s.final_tick, s.reason, s.completed, s.total);
    Ok(())
}
