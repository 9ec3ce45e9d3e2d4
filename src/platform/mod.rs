//! Platform abstraction layer
//!
//! Browser/native differences stay out of the simulation. This layer turns
//! raw input into game actions.

pub mod input;

pub use input::KeyAction;
