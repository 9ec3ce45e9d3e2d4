//! WebGPU rendering module
//!
//! The scene builder turns a game state into a colored triangle list; the
//! pipeline letterboxes it into the canvas and draws it.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{Letterbox, RenderState};
pub use scene::build_scene;
pub use vertex::Vertex;
