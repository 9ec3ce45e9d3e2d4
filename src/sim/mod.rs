//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per display frame, speeds are per tick
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies; side effects leave as `GameEvent`s

pub mod geometry;
pub mod level;
pub mod particles;
pub mod state;
pub mod tick;

pub use geometry::{Rect, intersects, within_reach};
pub use particles::{BURST_COUNT, emit_burst, update_particles};
pub use state::{GameEvent, GamePhase, GameState, Goal, Hazard, Particle, Player, Wall};
pub use tick::{Direction, Intent, TickInput, apply_intent, attempt_move, start_round, tick};
