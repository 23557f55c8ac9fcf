//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one update per tick
//! - Seeded RNG only (owned by the session)
//! - Stable iteration order (by obstacle index)
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use autopilot::Autopilot;
pub use clock::SimulationClock;
pub use collision::{Aabb, Collision, CollisionDetector, circle_hits_half};
pub use obstacle::{ColumnHalf, Obstacle};
pub use state::{GameEvent, GamePhase, GameSession, Snapshot};
pub use tick::{TickInput, tick};
