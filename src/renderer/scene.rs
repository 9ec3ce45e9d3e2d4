//! Builds the frame's vertex list from a read-only game state

use glam::Vec2;
use rand::Rng;

use super::shapes;
use super::vertex::{Vertex, colors, hsl_to_rgba, with_alpha};
use crate::settings::Settings;
use crate::sim::{GameState, Goal, Rect};

/// Saturation/lightness of particle colors; hue comes from the particle
const PARTICLE_SATURATION: f32 = 1.0;
const PARTICLE_LIGHTNESS: f32 = 0.6;
/// Hazard glow stroke width
const HAZARD_GLOW: f32 = 4.0;
/// Extra radius the goal glow swells by at full pulse
const GOAL_GLOW_SWELL: f32 = 10.0;

/// Emit the whole scene in draw order: walls, hazards, goal, player, particles.
///
/// `time_secs` drives the goal pulse. When shake is active the whole scene is
/// offset by a random jitter of up to `state.screen_shake` pixels per axis.
pub fn build_scene<R: Rng + ?Sized>(
    state: &GameState,
    settings: &Settings,
    time_secs: f32,
    rng: &mut R,
) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(512 + state.particles.len() * 6);

    for wall in &state.walls {
        shapes::rect(&wall.rect, colors::WALL, &mut out);
    }

    for hazard in &state.hazards {
        shapes::rect_outline(&hazard.rect, HAZARD_GLOW, colors::HAZARD_GLOW, &mut out);
        shapes::rect(&hazard.rect, colors::HAZARD, &mut out);
    }

    let pulse = if settings.reduced_motion {
        0.5
    } else {
        Goal::pulse(time_secs)
    };
    let goal = &state.goal;
    shapes::circle(
        goal.center(),
        goal.size * 0.5 + pulse * GOAL_GLOW_SWELL,
        with_alpha(colors::GOAL_GLOW, 0.3 + 0.7 * pulse),
        32,
        &mut out,
    );
    shapes::rect(&goal.bounds(), colors::GOAL, &mut out);

    shapes::rect(&state.player.bounds(), colors::PLAYER, &mut out);

    if settings.particles {
        for p in &state.particles {
            let color = hsl_to_rgba(p.hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS, p.life);
            let half = p.size * 0.5;
            shapes::rect(
                &Rect::new(p.pos.x - half, p.pos.y - half, p.size, p.size),
                color,
                &mut out,
            );
        }
    }

    let shake = state.screen_shake;
    if shake > 0.0 && settings.effective_screen_shake() {
        let jitter = Vec2::new(rng.random_range(-shake..=shake), rng.random_range(-shake..=shake));
        shapes::translate(&mut out, jitter);
    }

    out
}
