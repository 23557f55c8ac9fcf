//! Fixed timestep driver
//!
//! One update per tick, never more: a late frame is not caught up, the next
//! deadline is simply rescheduled from "now". The clock halts for good once
//! the session reaches `GameOver`.

use std::thread;
use std::time::{Duration, Instant};

use super::state::GameSession;
use super::tick::{TickInput, tick};
use crate::GameError;
use crate::consts::SIM_DT;

/// Drives a session at a fixed rate
#[derive(Debug, Clone)]
pub struct SimulationClock {
    dt: f32,
    ticks: u64,
    halted: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            dt: SIM_DT,
            ticks: 0,
            halted: false,
        }
    }
}

impl SimulationClock {
    /// Clock with a custom timestep; `dt` must be finite and positive
    pub fn new(dt: f32) -> Result<Self, GameError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(GameError::invalid("dt", format!("must be > 0, got {dt}")));
        }
        Ok(Self {
            dt,
            ..Self::default()
        })
    }

    /// Updates this clock has invoked
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Run a single tick. Returns whether an update was invoked.
    pub fn step(&mut self, session: &mut GameSession, input: &TickInput) -> bool {
        if self.halted {
            return false;
        }
        if !session.is_running() {
            if session.is_over() {
                self.halt();
            }
            return false;
        }

        tick(session, input, self.dt);
        self.ticks += 1;

        if session.is_over() {
            self.halt();
        }
        true
    }

    /// Run up to `max_ticks` back to back, polling `input` before each tick.
    /// The callback gets the session mutably so hosts can drain events there.
    /// Returns the number of updates invoked.
    pub fn run_for<F>(&mut self, session: &mut GameSession, max_ticks: u64, mut input: F) -> u64
    where
        F: FnMut(&mut GameSession) -> TickInput,
    {
        let start = self.ticks;
        while self.ticks - start < max_ticks {
            let cmd = input(session);
            if !self.step(session, &cmd) {
                break;
            }
        }
        self.ticks - start
    }

    /// Like `run_for`, paced against the wall clock at `1 / dt` Hz
    pub fn run_realtime<F>(
        &mut self,
        session: &mut GameSession,
        max_ticks: Option<u64>,
        mut input: F,
    ) -> u64
    where
        F: FnMut(&mut GameSession) -> TickInput,
    {
        let period = Duration::from_secs_f32(self.dt);
        let start = self.ticks;
        let mut next = Instant::now() + period;

        while max_ticks.is_none_or(|max| self.ticks - start < max) {
            let now = Instant::now();
            if now < next {
                thread::sleep(next - now);
                next += period;
            } else {
                let late = now - next;
                if late > period {
                    log::warn!("Tick {} late by {:?}, not catching up", self.ticks, late);
                }
                next = now + period;
            }

            let cmd = input(session);
            if !self.step(session, &cmd) {
                break;
            }
        }
        self.ticks - start
    }

    fn halt(&mut self) {
        if !self.halted {
            self.halted = true;
            log::debug!("Clock halted after {} ticks", self.ticks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    fn running() -> GameSession {
        let mut s = GameSession::new(Settings::default().seeded(77)).unwrap();
        s.start().unwrap();
        s
    }

    #[test]
    fn test_does_not_tick_before_start() {
        let mut s = GameSession::new(Settings::default().seeded(77)).unwrap();
        let mut clock = SimulationClock::default();
        assert!(!clock.step(&mut s, &TickInput::default()));
        assert_eq!(clock.ticks(), 0);
        assert!(!clock.is_halted());
    }

    #[test]
    fn test_run_for_is_bounded() {
        let mut s = running();
        let mut clock = SimulationClock::default();
        let ran = clock.run_for(&mut s, 30, |_| TickInput::default());
        assert_eq!(ran, 30);
        assert_eq!(s.ticks(), 30);
        assert!((s.elapsed() - 30.0 / 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_halts_on_game_over() {
        let mut s = running();
        let mut settings_floor = Settings::default().seeded(77);
        settings_floor.floor_is_fatal = true;
        let mut falling = GameSession::new(settings_floor).unwrap();
        falling.start().unwrap();

        let mut clock = SimulationClock::default();
        let ran = clock.run_for(&mut falling, 1_000, |_| TickInput::default());
        assert!(ran < 1_000);
        assert!(falling.is_over());
        assert!(clock.is_halted());

        // A halted clock never drives anything again
        assert!(!clock.step(&mut s, &TickInput::default()));
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn test_input_polled_each_tick() {
        let mut s = running();
        let mut clock = SimulationClock::default();
        let mut polls = 0;
        clock.run_for(&mut s, 5, |_| {
            polls += 1;
            TickInput::JUMP
        });
        assert_eq!(polls, 5);
        assert!((s.actor().vel_y - 6.7).abs() < 1e-5);
    }

    #[test]
    fn test_realtime_runs_requested_ticks() {
        let mut s = running();
        let mut clock = SimulationClock::new(1.0 / 240.0).unwrap();
        let ran = clock.run_realtime(&mut s, Some(4), |_| TickInput::default());
        assert_eq!(ran, 4);
        assert_eq!(s.ticks(), 4);
    }

    #[test]
    fn test_rejects_unusable_dt() {
        for dt in [0.0, -1.0 / 60.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                SimulationClock::new(dt),
                Err(GameError::InvalidConfig { field: "dt", .. })
            ));
        }
        assert!(SimulationClock::new(1.0 / 30.0).is_ok());
    }
}
