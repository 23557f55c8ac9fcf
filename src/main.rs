//! Column Hop entry point
//!
//! Headless runner: builds a session from flags or a JSON settings file,
//! drives it with the fixed-step clock and the autopilot, and reports the
//! final score. Rendering and real input devices belong to the host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use column_hop::Settings;
use column_hop::audio::{AudioManager, LogAudio};
use column_hop::sim::{Autopilot, GameEvent, GameSession, SimulationClock, TickInput};

#[derive(Debug, Parser)]
#[command(name = "column-hop", about = "Run a headless Column Hop session")]
struct Cli {
    /// JSON settings file (missing keys use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field width override
    #[arg(long)]
    width: Option<f32>,

    /// Field height override
    #[arg(long)]
    height: Option<f32>,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the run is still going
    #[arg(long, default_value_t = 3_600)]
    max_ticks: u64,

    /// Pace ticks against the wall clock (60 Hz)
    #[arg(long)]
    realtime: bool,

    /// Never jump (watch the actor fall)
    #[arg(long)]
    no_autopilot: bool,

    /// End the run when the actor falls below the field
    #[arg(long)]
    floor: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(width) = self.width {
            settings.field_width = width;
        }
        if let Some(height) = self.height {
            settings.field_height = height;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.floor {
            settings.floor_is_fatal = true;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = cli.settings()?;

    if cli.dump_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    let mut session = GameSession::new(settings).context("invalid session settings")?;
    session.start()?;
    log::info!("Column Hop (headless) starting, seed {}", session.seed());

    let pilot = (!cli.no_autopilot).then(Autopilot::default);
    let mut audio = AudioManager::new(LogAudio);
    let mut clock = SimulationClock::default();

    let input = |s: &mut GameSession| {
        report(&mut audio, &s.drain_events());
        match pilot {
            Some(p) => p.decide(s),
            None => TickInput::default(),
        }
    };
    let ticks = if cli.realtime {
        clock.run_realtime(&mut session, Some(cli.max_ticks), input)
    } else {
        clock.run_for(&mut session, cli.max_ticks, input)
    };
    report(&mut audio, &session.drain_events());

    match session.game_over_message() {
        Some(message) => println!("{message}"),
        None => println!(
            "Still flying after {ticks} ticks. Score: {}",
            session.display_score()
        ),
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&session.snapshot())
            .context("failed to serialize snapshot")?;
        println!("{json}");
    }

    Ok(())
}

fn report(audio: &mut AudioManager<LogAudio>, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Score { score, .. } => log::info!("Score: {score}"),
            GameEvent::Collision(hit) => {
                log::info!("Hit the {:?} column of pair {}", hit.half, hit.obstacle)
            }
            GameEvent::FellOut => log::info!("Fell out of the field"),
            GameEvent::Jump | GameEvent::GameOver { .. } => {}
        }
    }
    audio.handle_events(events);
}
