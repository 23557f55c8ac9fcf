//! Idle/demo controller
//!
//! Plays the game for headless runs and attract mode: aim for a cruising
//! height just above the bottom of the next gap and jump whenever the actor
//! sinks below it.

use super::obstacle::Obstacle;
use super::state::GameSession;
use super::tick::TickInput;

/// Jump-timing bot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Height above the gap bottom the actor tries to stay over
    pub margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { margin: 30.0 }
    }
}

impl Autopilot {
    /// The pair the actor has to clear next (closest one not yet passed)
    pub fn next_obstacle<'a>(&self, session: &'a GameSession) -> Option<&'a Obstacle> {
        let actor_x = session.actor().pos.x;
        session
            .obstacles()
            .iter()
            .filter(|o| o.x + o.width >= actor_x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
    }

    /// Height the actor's bottom edge should not drop below
    pub fn target_y(&self, session: &GameSession) -> f32 {
        match self.next_obstacle(session) {
            Some(o) => o.gap_bottom() + self.margin,
            None => (session.settings().field_height - session.actor().height) / 2.0,
        }
    }

    /// Input for the coming tick
    pub fn decide(&self, session: &GameSession) -> TickInput {
        if !session.is_running() {
            return TickInput::default();
        }
        let actor = session.actor();
        TickInput {
            jump: actor.vel_y <= 0.0 && actor.pos.y < self.target_y(session),
        }
    }
}
