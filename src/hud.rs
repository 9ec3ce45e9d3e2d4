//! HUD readout: energy, steps and round time

use serde::Serialize;

use crate::sim::GameState;

/// Values the HUD shows each frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub energy: i32,
    pub steps: u32,
    /// Round time as `m:ss`
    pub elapsed: String,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            energy: state.player.energy,
            steps: state.player.steps,
            elapsed: format_elapsed(state.elapsed_ms),
        }
    }
}

/// Format milliseconds as `minutes:seconds` with zero-padded seconds
pub fn format_elapsed(elapsed_ms: f64) -> String {
    let total_secs = (elapsed_ms.max(0.0) / 1000.0).floor() as u64;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
