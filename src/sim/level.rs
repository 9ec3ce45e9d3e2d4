//! The fixed maze
//!
//! The player moves on a 40px lattice anchored at the spawn point
//! (x = 50 + 40k, y = 550 - 40m). Walls are 20px bars that overlap a whole
//! lattice row or column, so a single move can never slip past one.
//!
//! ```text
//!  m13 ............................ G     corridor 4 (hazard)
//!  m10 ####################....           wall C, gap on the right
//!  m9  ........................           corridor 3 (hazard)
//!  m7-8          |                        pillar
//!  m6  ....##################              wall B, gap on the left
//!  m3-5 ...........................       corridor 2 (hazard)
//!  m2  ####################....           wall A, gap on the right
//!  m0-1 S..........................       corridor 1 (hazard)
//! ```

use super::geometry::Rect;
use super::state::{Hazard, Wall};
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Thickness of the playfield border
pub const BORDER: f32 = 10.0;

/// Static walls: playfield border plus the maze bars
pub fn walls() -> Vec<Wall> {
    let w = PLAYFIELD_WIDTH;
    let h = PLAYFIELD_HEIGHT;
    [
        // Border
        Rect::new(0.0, 0.0, w, BORDER),
        Rect::new(0.0, h - BORDER, w, BORDER),
        Rect::new(0.0, 0.0, BORDER, h),
        Rect::new(w - BORDER, 0.0, BORDER, h),
        // Wall A: blocks row m2 for x < 600
        Rect::new(0.0, 475.0, 600.0, 20.0),
        // Wall B: blocks row m6 for x > 200
        Rect::new(200.0, 315.0, 600.0, 20.0),
        // Wall C: blocks row m10 for x < 600
        Rect::new(0.0, 155.0, 600.0, 20.0),
        // Pillar in corridor 3, rows m7-m8 at column k9
        Rect::new(400.0, 235.0, 20.0, 70.0),
    ]
    .into_iter()
    .map(|rect| Wall { rect })
    .collect()
}

/// Hazards at their initial position and direction
pub fn hazards() -> Vec<Hazard> {
    vec![
        // Corridor 1, row m1
        Hazard::new(Rect::new(300.0, 515.0, 60.0, 20.0), 2.0, 1.0),
        // Corridor 2, row m4
        Hazard::new(Rect::new(500.0, 395.0, 60.0, 20.0), 3.0, -1.0),
        // Corridor 3, row m9
        Hazard::new(Rect::new(200.0, 195.0, 80.0, 20.0), 1.5, 1.0),
        // Corridor 4, row m12
        Hazard::new(Rect::new(400.0, 75.0, 60.0, 20.0), 2.5, -1.0),
    ]
}
