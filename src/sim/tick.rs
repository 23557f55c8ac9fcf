//! Fixed timestep simulation tick
//!
//! Advances a running session by exactly one physics step. Physics values
//! are per tick; `dt` is only accumulated into the session clock.

use super::obstacle::ColumnHalf;
use super::state::{GameEvent, GamePhase, GameSession};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (tap/click/key). Several presses between ticks collapse to one.
    pub jump: bool,
}

impl TickInput {
    pub const JUMP: TickInput = TickInput { jump: true };
}

/// Apply one tick's input, then advance the session
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    if input.jump {
        session.jump();
    }
    session.update(dt);
}

impl GameSession {
    /// Advance one fixed step. No-op unless running.
    ///
    /// Order within a tick:
    /// 1. gravity, then integrate the actor
    /// 2. scroll every pair; recycle and score pairs that left the field
    /// 3. collision against every pair (a pair recycled this tick included)
    /// 4. optional floor rule
    /// 5. difficulty ramp
    pub fn update(&mut self, dt: f32) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.ticks += 1;
        self.elapsed += dt;

        let t = &self.settings.tuning;
        self.actor.apply_gravity(t.gravity);
        self.actor.integrate();

        let score_per_half = t.score_per_half;
        let (field_width, field_height) = (self.settings.field_width, self.settings.field_height);
        for index in 0..self.obstacles.len() {
            let obstacle = &mut self.obstacles[index];
            obstacle.advance(self.scroll_speed);
            if !obstacle.is_offscreen_left() {
                continue;
            }
            obstacle.recycle(field_width, field_height, &mut self.rng);
            log::debug!(
                "Recycled pair {} at tick {}: top={} bottom={}",
                index,
                self.ticks,
                obstacle.top_height,
                obstacle.bottom_height
            );
            // Each half counts on its own, so a pair is worth two increments
            for half in ColumnHalf::BOTH {
                self.score += score_per_half;
                self.push_event(GameEvent::Score {
                    obstacle: index,
                    half,
                    score: self.score,
                });
            }
        }

        if let Some(hit) = self.detector.detect(&self.actor, &self.obstacles) {
            log::debug!(
                "Hit {:?} half of pair {} (distance {:.1})",
                hit.half,
                hit.obstacle,
                hit.distance
            );
            self.resolve_collision(hit);
        } else if self.settings.floor_is_fatal && self.actor.is_below_field() {
            self.push_event(GameEvent::FellOut);
            self.finish();
        }

        self.scroll_speed += self.settings.tuning.speed_ramp;
    }
}
