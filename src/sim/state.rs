//! Session state and lifecycle
//!
//! A `GameSession` owns every piece of mutable game state: the actor, the
//! column pairs, score, scroll speed, the seeded RNG and the pending event
//! queue. The per-tick update lives in `tick.rs`.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::{Collision, CollisionDetector};
use super::obstacle::{ColumnHalf, Obstacle};
use crate::consts::MAX_PENDING_EVENTS;
use crate::{GameError, Settings};

/// Current phase of a session. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Built, waiting for `start()`
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended (terminal)
    GameOver,
}

/// Signals for external collaborators (audio, HUD, overlays)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A jump was applied
    Jump,
    /// A column half scrolled off and was recycled
    Score {
        obstacle: usize,
        half: ColumnHalf,
        /// Score after this increment
        score: f32,
    },
    /// The actor hit a column
    Collision(Collision),
    /// The actor dropped below the field (floor rule only)
    FellOut,
    /// The run ended; score truncated for display
    GameOver { score: u32 },
}

/// Serializable view of a session for renderers and exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub phase: GamePhase,
    pub ticks: u64,
    pub score: f32,
    pub display_score: u32,
    pub scroll_speed: f32,
    pub field_width: f32,
    pub field_height: f32,
    pub actor: Actor,
    pub obstacles: Vec<Obstacle>,
}

/// One run of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) settings: Settings,
    pub(super) seed: u64,
    pub(super) rng: Pcg32,
    pub(super) phase: GamePhase,
    pub(super) actor: Actor,
    pub(super) obstacles: Vec<Obstacle>,
    pub(super) detector: CollisionDetector,
    pub(super) score: f32,
    pub(super) scroll_speed: f32,
    /// Updates applied while running
    pub(super) ticks: u64,
    /// Sum of `dt` over applied updates (seconds)
    pub(super) elapsed: f32,
    pub(super) events: VecDeque<GameEvent>,
}

impl GameSession {
    /// Build a session, rejecting settings that cannot produce a valid field
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let seed = settings.resolved_seed();
        let tuning = &settings.tuning;

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            actor: Actor::from_tuning(tuning),
            obstacles: Vec::with_capacity(tuning.column_count),
            detector: CollisionDetector::new(tuning.collision_padding),
            score: 0.0,
            scroll_speed: tuning.move_speed,
            ticks: 0,
            elapsed: 0.0,
            events: VecDeque::new(),
            settings,
        })
    }

    /// Spawn the column pairs and begin running
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::NotStarted {
            log::warn!("start() ignored in phase {:?}", self.phase);
            return Err(GameError::AlreadyStarted { phase: self.phase });
        }

        let t = &self.settings.tuning;
        let (field_width, field_height) = (self.settings.field_width, self.settings.field_height);
        self.obstacles.clear();
        for i in 0..t.column_count {
            let x = field_width + i as f32 * t.column_spacing;
            self.obstacles.push(Obstacle::spawn(
                x,
                t.column_width,
                field_height,
                t.gap,
                t.min_top_height,
                &mut self.rng,
            ));
        }
        self.scroll_speed = t.move_speed;
        self.phase = GamePhase::Running;

        log::info!(
            "Session started: seed={}, field={}x{}, columns={}",
            self.seed,
            field_width,
            field_height,
            self.obstacles.len()
        );
        Ok(())
    }

    /// Apply a jump impulse. No-op unless running.
    pub fn jump(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.actor.jump(self.settings.tuning.jump_strength);
        self.push_event(GameEvent::Jump);
        log::debug!("Jump at tick {} (y={:.1})", self.ticks, self.actor.pos.y);
    }

    /// End the run. Only the first call has any effect.
    pub(super) fn finish(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        let score = self.display_score();
        self.push_event(GameEvent::GameOver { score });
        log::info!(
            "Game over after {} ticks: score {} (speed {:.3})",
            self.ticks,
            score,
            self.scroll_speed
        );
    }

    /// Snap the actor against the column it hit and end the run
    pub(super) fn resolve_collision(&mut self, hit: Collision) {
        if let Some(obstacle) = self.obstacles.get(hit.obstacle) {
            let surface = hit.surface_y(obstacle);
            self.actor.land_on(surface, hit.from_above());
        }
        self.push_event(GameEvent::Collision(hit));
        self.finish();
    }

    // === Accessors ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    /// Score truncated toward zero
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    /// Final score, once the run has ended
    pub fn final_score(&self) -> Option<u32> {
        self.is_over().then(|| self.display_score())
    }

    /// Text for the game-over overlay
    pub fn game_over_message(&self) -> Option<String> {
        self.final_score()
            .map(|score| format!("Game Over!\nScore: {score}"))
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Events queued since the last drain, oldest first.
    ///
    /// Hosts should drain once per tick. At most `MAX_PENDING_EVENTS` are
    /// kept; when the queue is full the oldest event is dropped.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
            log::trace!("Event queue full, dropped oldest event");
        }
        self.events.push_back(event);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            phase: self.phase,
            ticks: self.ticks,
            score: self.score,
            display_score: self.display_score(),
            scroll_speed: self.scroll_speed,
            field_width: self.settings.field_width,
            field_height: self.settings.field_height,
            actor: self.actor.clone(),
            obstacles: self.obstacles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(Settings::with_field(800.0, 600.0).seeded(12345)).unwrap()
    }

    #[test]
    fn test_new_session_waits_for_start() {
        let s = session();
        assert_eq!(s.phase(), GamePhase::NotStarted);
        assert!(s.obstacles().is_empty());
        assert_eq!(s.actor().pos.x, 100.0);
        assert_eq!(s.actor().pos.y, 100.0);
        assert_eq!(s.actor().vel_y, 0.0);
        assert_eq!(s.score(), 0.0);
        assert_eq!(s.final_score(), None);
    }

    #[test]
    fn test_start_spawns_staggered_columns() {
        let mut s = session();
        s.start().unwrap();
        assert_eq!(s.phase(), GamePhase::Running);
        assert_eq!(s.scroll_speed(), 3.0);

        let xs: Vec<f32> = s.obstacles().iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![800.0, 1100.0, 1400.0]);
        for o in s.obstacles() {
            assert!(o.top_height >= 100.0 && o.top_height <= 300.0);
            assert_eq!(o.top_height + o.bottom_height, 400.0);
        }
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut s = session();
        s.start().unwrap();
        let before: Vec<Obstacle> = s.obstacles().to_vec();
        assert_eq!(
            s.start(),
            Err(GameError::AlreadyStarted {
                phase: GamePhase::Running
            })
        );
        assert_eq!(s.obstacles(), before.as_slice());
    }

    #[test]
    fn test_jump_ignored_before_start() {
        let mut s = session();
        s.jump();
        assert_eq!(s.actor().vel_y, 0.0);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_jump_sets_velocity_and_emits_event() {
        let mut s = session();
        s.start().unwrap();
        s.jump();
        assert_eq!(s.actor().vel_y, 7.0);
        assert_eq!(s.drain_events(), vec![GameEvent::Jump]);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_rejects_invalid_field() {
        let err = GameSession::new(Settings::with_field(800.0, 180.0)).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { .. }));
    }

    #[test]
    fn test_same_seed_same_columns() {
        let mut a = session();
        let mut b = session();
        a.start().unwrap();
        b.start().unwrap();
        assert_eq!(a.obstacles(), b.obstacles());
    }

    #[test]
    fn test_game_over_message_format() {
        let mut s = session();
        s.start().unwrap();
        s.score = 3.5;
        s.finish();
        assert_eq!(s.final_score(), Some(3));
        assert_eq!(s.game_over_message().as_deref(), Some("Game Over!\nScore: 3"));
        assert_eq!(s.drain_events(), vec![GameEvent::GameOver { score: 3 }]);

        s.finish();
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut s = session();
        s.start().unwrap();
        let json = serde_json::to_string(&s.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Running);
        assert_eq!(back.obstacles.len(), 3);
        assert_eq!(back.seed, 12345);
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut s = session();
        s.start().unwrap();
        for _ in 0..10_000 {
            s.jump();
        }
        assert_eq!(s.pending_events(), MAX_PENDING_EVENTS);

        s.finish();
        let events = s.drain_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 0 }));
        assert_eq!(s.pending_events(), 0);
    }
}
