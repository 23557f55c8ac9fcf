//! The falling/jumping character
//!
//! Coordinates are y-up with the origin at the bottom-left of the field.
//! `pos` is the bottom-left corner of the sprite.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::Tuning;

/// The player-controlled actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Bottom-left corner; `x` never changes
    pub pos: Vec2,
    /// Vertical velocity (units/tick, positive is up)
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Actor {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            width,
            height,
        }
    }

    /// Spawn at the tuned start position, at rest
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            Vec2::new(tuning.actor_start_x, tuning.actor_start_y),
            tuning.actor_width,
            tuning.actor_height,
        )
    }

    #[inline]
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.vel_y -= gravity;
    }

    #[inline]
    pub fn integrate(&mut self) {
        self.pos.y += self.vel_y;
    }

    /// Replace the current vertical velocity with an upward impulse
    #[inline]
    pub fn jump(&mut self, strength: f32) {
        self.vel_y = strength;
    }

    /// Snap onto a surface and stop.
    ///
    /// `from_above` rests the actor's bottom on `surface_y` (top of a bottom
    /// column); otherwise the actor's top is placed at `surface_y` (underside
    /// of a top column).
    pub fn land_on(&mut self, surface_y: f32, from_above: bool) {
        self.pos.y = if from_above {
            surface_y
        } else {
            surface_y - self.height
        };
        self.vel_y = 0.0;
    }

    /// Sprite bounding box
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) * 0.5
    }

    /// Whole sprite is below the bottom edge of the field
    pub fn is_below_field(&self) -> bool {
        self.pos.y + self.height < 0.0
    }
}
