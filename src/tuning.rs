//! Data-driven game balance
//!
//! Every physics and difficulty knob in one place. Defaults reproduce the
//! classic feel; a settings file may override any subset.

use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::*;

/// Balance values consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Actor ===
    /// Velocity removed every tick
    pub gravity: f32,
    /// Velocity a jump sets (not adds)
    pub jump_strength: f32,
    /// Actor sprite width/height
    pub actor_width: f32,
    pub actor_height: f32,
    /// Spawn position (x never changes afterwards)
    pub actor_start_x: f32,
    pub actor_start_y: f32,
    /// Hit circle radius is `actor_width / 2 - collision_padding`
    pub collision_padding: f32,

    // === Columns ===
    pub column_count: usize,
    pub column_width: f32,
    /// Horizontal distance between initial column spawns
    pub column_spacing: f32,
    /// Vertical opening between top and bottom halves
    pub gap: f32,
    /// Smallest top column height a recycle may draw
    pub min_top_height: f32,

    // === Difficulty ===
    /// Scroll speed at session start
    pub move_speed: f32,
    /// Scroll speed added every tick, without cap
    pub speed_ramp: f32,
    /// Score per column half that scrolls off
    pub score_per_half: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            actor_width: ACTOR_SIZE,
            actor_height: ACTOR_SIZE,
            actor_start_x: ACTOR_START_X,
            actor_start_y: ACTOR_START_Y,
            collision_padding: COLLISION_PADDING,

            column_count: COLUMN_COUNT,
            column_width: COLUMN_WIDTH,
            column_spacing: COLUMN_SPACING,
            gap: COLUMN_GAP,
            min_top_height: MIN_TOP_HEIGHT,

            move_speed: MOVE_SPEED,
            speed_ramp: SPEED_RAMP,
            score_per_half: SCORE_PER_HALF,
        }
    }
}

impl Tuning {
    /// Hit circle radius used by the narrow collision phase
    #[inline]
    pub fn actor_radius(&self) -> f32 {
        self.actor_width / 2.0 - self.collision_padding
    }

    /// Reject values that make the simulation meaningless
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("column_width", self.column_width),
            ("gap", self.gap),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("collision_padding", self.collision_padding),
            ("column_spacing", self.column_spacing),
            ("min_top_height", self.min_top_height),
            ("move_speed", self.move_speed),
            ("speed_ramp", self.speed_ramp),
            ("score_per_half", self.score_per_half),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::invalid(field, format!("must be >= 0, got {value}")));
            }
        }

        for (field, value) in [
            ("actor_start_x", self.actor_start_x),
            ("actor_start_y", self.actor_start_y),
        ] {
            if !value.is_finite() {
                return Err(GameError::invalid(field, "must be finite"));
            }
        }

        if self.column_count == 0 {
            return Err(GameError::invalid("column_count", "need at least one column"));
        }
        if self.actor_radius() < 0.0 {
            return Err(GameError::invalid(
                "collision_padding",
                format!(
                    "padding {} exceeds half the actor width {}",
                    self.collision_padding,
                    self.actor_width / 2.0
                ),
            ));
        }

        Ok(())
    }
}
