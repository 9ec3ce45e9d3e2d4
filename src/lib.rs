//! Energy Maze - a single-screen maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, hazards, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `audio`: Procedural sound effects
//! - `hud`: Energy/steps/timer readout

pub mod audio;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (screen space, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_STEP: f32 = 40.0;
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = 550.0;

    /// Energy economy
    pub const START_ENERGY: i32 = 100;
    pub const MOVE_COST: i32 = 1;
    pub const HAZARD_PENALTY: i32 = 10;

    /// Goal tile
    pub const GOAL_X: f32 = 730.0;
    pub const GOAL_Y: f32 = 30.0;
    pub const GOAL_SIZE: f32 = 40.0;

    /// Hazards turn around this far inside the playfield edges
    pub const HAZARD_PADDING: f32 = 50.0;

    /// Screen shake set on hazard contact, decayed every tick
    pub const SHAKE_MAGNITUDE: f32 = 10.0;
    pub const SHAKE_DECAY: f32 = 0.9;
    pub const SHAKE_FLOOR: f32 = 0.1;
}
