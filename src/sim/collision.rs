//! Collision detection between the actor and column halves
//!
//! Two phases per column half:
//! 1. Broad: axis-aligned box overlap (cheap reject)
//! 2. Narrow: distance between the actor's center and the half's center,
//!    compared against a padded hit circle. The padding makes the check more
//!    forgiving than the sprite bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::{ColumnHalf, Obstacle};

/// Axis-aligned bounding box (y-up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Touching edges count as overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

/// A confirmed hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collision {
    /// Index of the pair in the session's obstacle list
    pub obstacle: usize,
    pub half: ColumnHalf,
    /// Center-to-center distance at the moment of the hit
    pub distance: f32,
}

impl Collision {
    /// Hitting a bottom column means landing on it from above
    pub fn from_above(&self) -> bool {
        self.half == ColumnHalf::Bottom
    }

    /// Surface the actor snaps to: top of a bottom column or underside of a
    /// top column
    pub fn surface_y(&self, obstacle: &Obstacle) -> f32 {
        match self.half {
            ColumnHalf::Bottom => obstacle.gap_bottom(),
            ColumnHalf::Top => obstacle.gap_top(),
        }
    }
}

/// Actor-vs-columns proximity test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    /// Padding subtracted from half the actor width to get its hit radius
    pub padding: f32,
}

impl CollisionDetector {
    pub fn new(padding: f32) -> Self {
        Self { padding }
    }

    /// Effective hit circle radius for an actor
    #[inline]
    pub fn actor_radius(&self, actor: &Actor) -> f32 {
        actor.width / 2.0 - self.padding
    }

    /// First hit in obstacle order (top half before bottom half), if any
    pub fn detect(&self, actor: &Actor, obstacles: &[Obstacle]) -> Option<Collision> {
        let actor_box = actor.bounds();
        let actor_center = actor.center();
        let actor_radius = self.actor_radius(actor);

        for (index, obstacle) in obstacles.iter().enumerate() {
            for half in obstacle.overlapping_halves(&actor_box) {
                let distance = actor_center.distance(obstacle.half_center(half));
                if circle_hits_half(distance, actor_radius, obstacle.width) {
                    return Some(Collision {
                        obstacle: index,
                        half,
                        distance,
                    });
                }
            }
        }

        None
    }
}

/// Narrow phase: centers closer than actor radius plus half the column width
#[inline]
pub fn circle_hits_half(distance: f32, actor_radius: f32, column_width: f32) -> bool {
    distance < actor_radius + column_width / 2.0
}
