//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; there are no
//! process-wide globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, within_reach};
use super::level;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulates
    Title,
    /// Active round
    Playing,
    /// Goal reached; only particles keep animating
    Won,
    /// Energy ran out; everything is frozen
    Lost,
}

/// Something the shell should react to (sound, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player made a successful move
    Moved,
    /// Player touched a hazard this tick
    HazardHit,
    /// Goal reached
    Won,
    /// Energy exhausted
    Lost,
}

/// The player-controlled square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Distance covered by one move
    pub step: f32,
    pub energy: i32,
    pub steps: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            size: PLAYER_SIZE,
            step: PLAYER_STEP,
            energy: START_ENERGY,
            steps: 0,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    /// Bounding box if the player stood at `pos`
    pub fn bounds_at(&self, pos: Vec2) -> Rect {
        Rect::square(pos, self.size)
    }

    /// Drain energy, saturating at zero. Returns true once energy is exhausted.
    pub fn drain(&mut self, amount: i32) -> bool {
        self.energy -= amount;
        if self.energy <= 0 {
            self.energy = 0;
            true
        } else {
            false
        }
    }
}

/// The target tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec2,
    pub size: f32,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            pos: Vec2::new(GOAL_X, GOAL_Y),
            size: GOAL_SIZE,
        }
    }
}

impl Goal {
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// True when the player's centre is within the combined half-sizes of the goal's centre
    pub fn reached_by(&self, player: &Player) -> bool {
        within_reach(&player.bounds(), player.size, &self.bounds(), self.size)
    }

    /// Glow pulse in [0, 1] for rendering; no gameplay effect
    pub fn pulse(time_secs: f32) -> f32 {
        0.5 + 0.5 * (time_secs * 4.0).sin()
    }
}

/// A static maze wall
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
}

/// A horizontally patrolling obstacle that drains energy on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    /// Horizontal speed magnitude (pixels per tick)
    pub speed: f32,
    /// Vertical speed; part of the data model but always 0
    #[serde(default)]
    pub speed_y: f32,
    /// +1.0 or -1.0
    pub direction: f32,
}

impl Hazard {
    pub fn new(rect: Rect, speed: f32, direction: f32) -> Self {
        Self {
            rect,
            speed,
            speed_y: 0.0,
            direction,
        }
    }

    /// Advance one tick between `left` and `right` margins.
    ///
    /// The position is never clamped: crossing a margin only flips the
    /// direction for the next tick, so a hazard can sit up to one tick of
    /// travel outside its lane.
    pub fn advance(&mut self, left: f32, right: f32) {
        self.rect.pos.x += self.speed * self.direction;
        self.rect.pos.y += self.speed_y;

        if self.rect.left() < left || self.rect.right() > right {
            self.direction = -self.direction;
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Hue in degrees, [0, 360)
    pub hue: f32,
    pub size: f32,
    /// 0-1, decreases over time
    pub life: f32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed for the particle RNG
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub goal: Goal,
    pub walls: Vec<Wall>,
    pub hazards: Vec<Hazard>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Screen shake magnitude in pixels, decays every tick
    pub screen_shake: f32,
    /// Frame counter, advances in every phase
    pub time_ticks: u64,
    /// Wall-clock time the current round started (ms)
    pub round_started_ms: f64,
    /// Elapsed round time (ms), frozen outside Playing
    pub elapsed_ms: f64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game sitting on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Title,
            player: Player::default(),
            goal: Goal::default(),
            walls: level::walls(),
            hazards: level::hazards(),
            particles: Vec::new(),
            screen_shake: 0.0,
            time_ticks: 0,
            round_started_ms: 0.0,
            elapsed_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Reset every mutable entity for a fresh round. Walls are left alone.
    pub fn reset_round(&mut self, now_ms: f64) {
        self.player = Player::default();
        self.hazards = level::hazards();
        self.particles.clear();
        self.screen_shake = 0.0;
        self.round_started_ms = now_ms;
        self.elapsed_ms = 0.0;
    }

    /// Left and right turn-around margins for hazards
    pub fn hazard_margins(&self) -> (f32, f32) {
        (HAZARD_PADDING, PLAYFIELD_WIDTH - HAZARD_PADDING)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
