//! Column Hop - a side-scrolling column dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, session state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Session configuration (field size, seed, tuning)
//! - `audio`: Mapping from simulation events to sound cues
//! - `error`: Configuration and lifecycle errors

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one physics step per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Tallest field whose column heights stay exact integers in f32 (2^24)
    pub const MAX_FIELD_HEIGHT: f32 = 16_777_216.0;

    /// Actor defaults
    pub const ACTOR_START_X: f32 = 100.0;
    pub const ACTOR_START_Y: f32 = 100.0;
    pub const ACTOR_SIZE: f32 = 70.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.3;
    /// Upward velocity set by a jump (units/tick)
    pub const JUMP_STRENGTH: f32 = 7.0;
    /// Initial scroll speed (units/tick)
    pub const MOVE_SPEED: f32 = 3.0;
    /// Scroll speed added every tick
    pub const SPEED_RAMP: f32 = 0.001;

    /// Column defaults
    pub const COLUMN_COUNT: usize = 3;
    pub const COLUMN_WIDTH: f32 = 100.0;
    pub const COLUMN_SPACING: f32 = 300.0;
    pub const COLUMN_GAP: f32 = 200.0;
    pub const MIN_TOP_HEIGHT: f32 = 100.0;

    /// Shrinks the actor's hit circle relative to its sprite
    pub const COLLISION_PADDING: f32 = 20.0;

    /// Score added each time a column half scrolls off (two halves per pair)
    pub const SCORE_PER_HALF: f32 = 0.5;

    /// Undrained events kept per session; older ones are dropped first
    pub const MAX_PENDING_EVENTS: usize = 1024;
}
