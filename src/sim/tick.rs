//! Per-frame simulation tick
//!
//! One tick runs per display frame. Discrete intents queued by the shell are
//! applied first, in arrival order, then the phase-specific update runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::particles::{BURST_COUNT, emit_burst, update_particles};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Cardinal move direction (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset for one move
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// A discrete request from input or menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    /// Start button on the title screen
    Start,
    /// Restart key or play-again button
    Restart,
    /// Back to the title screen
    ShowTitle,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Intents received since the previous tick, oldest first
    pub intents: Vec<Intent>,
    /// Frame timestamp (ms)
    pub now_ms: f64,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    for &intent in &input.intents {
        apply_intent(state, intent, input.now_ms);
    }

    state.time_ticks += 1;

    // Decay screen shake
    state.screen_shake *= SHAKE_DECAY;
    if state.screen_shake < SHAKE_FLOOR {
        state.screen_shake = 0.0;
    }

    match state.phase {
        GamePhase::Title | GamePhase::Lost => {}

        GamePhase::Playing => {
            state.elapsed_ms = (input.now_ms - state.round_started_ms).max(0.0);

            let (left, right) = state.hazard_margins();
            for hazard in &mut state.hazards {
                hazard.advance(left, right);
            }

            resolve_hazard_contact(state);
            update_particles(&mut state.particles);
        }

        GamePhase::Won => {
            update_particles(&mut state.particles);
        }
    }
}

/// Apply one intent to the state machine
pub fn apply_intent(state: &mut GameState, intent: Intent, now_ms: f64) {
    match intent {
        Intent::Move(direction) => {
            attempt_move(state, direction);
        }
        Intent::Start | Intent::Restart => start_round(state, now_ms),
        Intent::ShowTitle => {
            if state.phase != GamePhase::Title {
                log::info!("Back to title");
            }
            state.phase = GamePhase::Title;
        }
    }
}

/// Reset all mutable entities and enter Playing
pub fn start_round(state: &mut GameState, now_ms: f64) {
    state.reset_round(now_ms);
    state.phase = GamePhase::Playing;
    log::info!("Round started");
}

/// Try to move the player one step. Returns true if the player moved.
///
/// A move into a wall is silently dropped. A successful move costs one
/// energy and is then checked for the goal and for exhaustion; the goal wins
/// when both hold after the same move.
pub fn attempt_move(state: &mut GameState, direction: Direction) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }

    let candidate = state.player.pos + direction.delta() * state.player.step;
    let candidate_box = state.player.bounds_at(candidate);
    if state.walls.iter().any(|w| w.rect.intersects(&candidate_box)) {
        return false;
    }

    state.player.pos = candidate;
    state.player.steps += 1;
    let exhausted = state.player.drain(MOVE_COST);
    state.push_event(GameEvent::Moved);

    if state.goal.reached_by(&state.player) {
        win(state);
    } else if exhausted {
        lose(state);
    }

    true
}

/// Apply the per-tick hazard penalty if the player overlaps any hazard
fn resolve_hazard_contact(state: &mut GameState) {
    let player_box = state.player.bounds();
    if !state.hazards.iter().any(|h| h.rect.intersects(&player_box)) {
        return;
    }

    let exhausted = state.player.drain(HAZARD_PENALTY);
    state.screen_shake = SHAKE_MAGNITUDE;
    state.push_event(GameEvent::HazardHit);
    log::debug!("Hazard hit, energy {}", state.player.energy);

    if exhausted {
        lose(state);
    }
}

fn win(state: &mut GameState) {
    state.phase = GamePhase::Won;
    let origin = state.goal.center();
    emit_burst(&mut state.particles, origin, BURST_COUNT, &mut state.rng);
    state.push_event(GameEvent::Won);
    log::info!(
        "Goal reached in {} steps with {} energy left",
        state.player.steps,
        state.player.energy
    );
}

fn lose(state: &mut GameState) {
    state.player.energy = 0;
    state.phase = GamePhase::Lost;
    state.push_event(GameEvent::Lost);
    log::info!("Out of energy after {} steps", state.player.steps);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use crate::sim::state::Hazard;
    use proptest::prelude::*;

    fn playing() -> GameState {
        let mut state = GameState::new(42);
        start_round(&mut state, 0.0);
        state.drain_events();
        state
    }

    fn moves(state: &mut GameState, direction: Direction, count: usize) {
        for _ in 0..count {
            assert!(attempt_move(state, direction), "blocked at {:?}", state.player.pos);
        }
    }

    /// Input with no intents at the given time
    fn idle(now_ms: f64) -> TickInput {
        TickInput {
            intents: Vec::new(),
            now_ms,
        }
    }

    #[test]
    fn test_title_to_playing() {
        let mut state = GameState::new(1);
        tick(&mut state, &idle(0.0));
        assert_eq!(state.phase, GamePhase::Title);

        let input = TickInput {
            intents: vec![Intent::Start],
            now_ms: 1000.0,
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.round_started_ms, 1000.0);
    }

    #[test]
    fn test_moves_ignored_outside_playing() {
        let mut state = GameState::new(1);
        assert!(!attempt_move(&mut state, Direction::Right));
        assert_eq!(state.player.steps, 0);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_five_moves_right_from_spawn() {
        let mut state = playing();
        moves(&mut state, Direction::Right, 5);
        assert_eq!(state.player.pos, Vec2::new(250.0, 550.0));
        assert_eq!(state.player.steps, 5);
        assert_eq!(state.player.energy, 95);
        assert_eq!(state.drain_events(), vec![GameEvent::Moved; 5]);
    }

    #[test]
    fn test_wall_blocks_move_without_cost() {
        let mut state = playing();
        // Bottom border is directly below spawn
        assert!(!attempt_move(&mut state, Direction::Down));
        assert_eq!(state.player.pos, Vec2::new(50.0, 550.0));
        assert_eq!(state.player.steps, 0);
        assert_eq!(state.player.energy, START_ENERGY);
        assert!(state.events().is_empty());

        // Wall A sits two rows up
        assert!(attempt_move(&mut state, Direction::Up));
        let before = state.player.clone();
        assert!(!attempt_move(&mut state, Direction::Up));
        assert_eq!(state.player.pos, before.pos);
        assert_eq!(state.player.steps, before.steps);
        assert_eq!(state.player.energy, before.energy);
    }

    #[test]
    fn test_last_energy_on_plain_move_loses() {
        let mut state = playing();
        state.player.energy = 1;
        assert!(attempt_move(&mut state, Direction::Right));
        assert_eq!(state.player.energy, 0);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.drain_events(), vec![GameEvent::Moved, GameEvent::Lost]);

        // Frozen afterwards
        assert!(!attempt_move(&mut state, Direction::Right));
    }

    #[test]
    fn test_last_energy_on_winning_move_wins() {
        let mut state = playing();
        state.player.pos = Vec2::new(690.0, 30.0);
        state.player.energy = 1;
        assert!(attempt_move(&mut state, Direction::Right));
        assert_eq!(state.player.energy, 0);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.particles.len(), BURST_COUNT);
        assert_eq!(state.drain_events(), vec![GameEvent::Moved, GameEvent::Won]);
    }

    #[test]
    fn test_walk_the_maze() {
        let mut state = playing();
        moves(&mut state, Direction::Right, 14);
        moves(&mut state, Direction::Up, 5);
        assert!(!attempt_move(&mut state, Direction::Up), "wall B");
        moves(&mut state, Direction::Left, 11);
        moves(&mut state, Direction::Up, 4);
        assert!(!attempt_move(&mut state, Direction::Up), "wall C");
        moves(&mut state, Direction::Right, 11);
        moves(&mut state, Direction::Up, 4);
        moves(&mut state, Direction::Right, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        moves(&mut state, Direction::Right, 1);

        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.player.pos, Vec2::new(730.0, 30.0));
        assert_eq!(state.player.steps, 52);
        assert_eq!(state.player.energy, START_ENERGY - 52);
        assert_eq!(state.particles.len(), BURST_COUNT);
    }

    #[test]
    fn test_hazard_linear_motion() {
        let mut state = playing();
        let start: Vec<_> = state.hazards.iter().map(|h| h.rect.pos.x).collect();
        for i in 1..=10 {
            tick(&mut state, &idle(i as f64 * 16.0));
        }
        for (hazard, x0) in state.hazards.iter().zip(start) {
            let expected = x0 + 10.0 * hazard.speed * hazard.direction;
            assert!((hazard.rect.pos.x - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_sustained_contact_costs_every_tick() {
        let mut state = playing();
        state.hazards = vec![Hazard::new(Rect::new(40.0, 540.0, 60.0, 60.0), 0.0, 1.0)];

        for k in 1..=5 {
            tick(&mut state, &idle(k as f64));
            assert_eq!(state.player.energy, START_ENERGY - 10 * k);
        }
        assert_eq!(state.screen_shake, SHAKE_MAGNITUDE);
        assert_eq!(state.drain_events(), vec![GameEvent::HazardHit; 5]);
    }

    #[test]
    fn test_contact_clamps_and_loses() {
        let mut state = playing();
        state.hazards = vec![Hazard::new(Rect::new(40.0, 540.0, 60.0, 60.0), 0.0, 1.0)];
        state.player.energy = 15;

        tick(&mut state, &idle(1.0));
        assert_eq!(state.player.energy, 5);
        tick(&mut state, &idle(2.0));
        assert_eq!(state.player.energy, 0);
        assert_eq!(state.phase, GamePhase::Lost);

        // Lost freezes everything
        let elapsed = state.elapsed_ms;
        tick(&mut state, &idle(500.0));
        assert_eq!(state.player.energy, 0);
        assert_eq!(state.elapsed_ms, elapsed);
    }

    #[test]
    fn test_two_hazards_one_penalty_per_tick() {
        let mut state = playing();
        state.hazards = vec![
            Hazard::new(Rect::new(40.0, 540.0, 30.0, 60.0), 0.0, 1.0),
            Hazard::new(Rect::new(60.0, 540.0, 30.0, 60.0), 0.0, 1.0),
        ];
        tick(&mut state, &idle(1.0));
        assert_eq!(state.player.energy, START_ENERGY - HAZARD_PENALTY);
    }

    #[test]
    fn test_shake_decays_to_zero() {
        let mut state = playing();
        state.screen_shake = SHAKE_MAGNITUDE;
        tick(&mut state, &idle(1.0));
        assert!((state.screen_shake - SHAKE_MAGNITUDE * SHAKE_DECAY).abs() < 1e-4);
        for i in 0..100 {
            tick(&mut state, &idle(2.0 + i as f64));
        }
        assert_eq!(state.screen_shake, 0.0);
    }

    #[test]
    fn test_won_freezes_hazards_but_animates_particles() {
        let mut state = playing();
        state.player.pos = Vec2::new(690.0, 30.0);
        attempt_move(&mut state, Direction::Right);
        assert_eq!(state.phase, GamePhase::Won);

        let hazards_x: Vec<_> = state.hazards.iter().map(|h| h.rect.pos.x).collect();
        let energy = state.player.energy;
        let mut previous = state.particles.len();
        for i in 0..50 {
            tick(&mut state, &idle(i as f64));
            assert!(state.particles.len() <= previous);
            previous = state.particles.len();
        }
        assert!(state.particles.is_empty());
        assert_eq!(state.player.energy, energy);
        let after: Vec<_> = state.hazards.iter().map(|h| h.rect.pos.x).collect();
        assert_eq!(hazards_x, after);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut state = playing();
        moves(&mut state, Direction::Right, 3);
        for i in 0..30 {
            tick(&mut state, &idle(i as f64 * 16.0));
        }
        state.screen_shake = 5.0;
        state.player.pos = Vec2::new(690.0, 30.0);
        attempt_move(&mut state, Direction::Right);
        assert_eq!(state.phase, GamePhase::Won);

        let input = TickInput {
            intents: vec![Intent::Restart],
            now_ms: 9000.0,
        };
        tick(&mut state, &input);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.energy, START_ENERGY);
        assert_eq!(state.player.steps, 0);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert!(state.particles.is_empty());
        assert_eq!(state.round_started_ms, 9000.0);
        assert_eq!(state.elapsed_ms, 0.0);

        // The tick that processed the restart also moved hazards once
        for (hazard, initial) in state.hazards.iter().zip(crate::sim::level::hazards()) {
            let expected = initial.rect.pos.x + initial.speed * initial.direction;
            assert!((hazard.rect.pos.x - expected).abs() < 1e-4);
            assert_eq!(hazard.direction, initial.direction);
        }
    }

    #[test]
    fn test_restart_from_lost() {
        let mut state = playing();
        state.player.energy = 1;
        attempt_move(&mut state, Direction::Right);
        assert_eq!(state.phase, GamePhase::Lost);

        apply_intent(&mut state, Intent::Restart, 100.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.energy, START_ENERGY);
        assert_eq!(state.hazards.len(), crate::sim::level::hazards().len());
    }

    #[test]
    fn test_show_title() {
        let mut state = playing();
        apply_intent(&mut state, Intent::ShowTitle, 0.0);
        assert_eq!(state.phase, GamePhase::Title);
        assert!(!attempt_move(&mut state, Direction::Right));
    }

    #[test]
    fn test_elapsed_time_sampling() {
        let mut state = GameState::new(5);
        apply_intent(&mut state, Intent::Start, 2000.0);
        tick(&mut state, &idle(2500.0));
        assert_eq!(state.elapsed_ms, 500.0);
        tick(&mut state, &idle(65_000.0));
        assert_eq!(state.elapsed_ms, 63_000.0);
    }

    #[test]
    fn test_intents_apply_in_order() {
        let mut state = GameState::new(5);
        let input = TickInput {
            intents: vec![
                Intent::Start,
                Intent::Move(Direction::Right),
                Intent::Move(Direction::Right),
            ],
            now_ms: 0.0,
        };
        tick(&mut state, &input);
        assert_eq!(state.player.steps, 2);
        assert_eq!(state.player.pos, Vec2::new(130.0, 550.0));
    }

    #[test]
    fn test_determinism() {
        let mut a = playing();
        let mut b = playing();
        for i in 0..200 {
            tick(&mut a, &idle(i as f64));
            tick(&mut b, &idle(i as f64));
        }
        for (ha, hb) in a.hazards.iter().zip(&b.hazards) {
            assert_eq!(ha.rect.pos, hb.rect.pos);
        }
    }

    proptest! {
        #[test]
        fn prop_hazard_stays_within_one_tick_of_margins(
            speed in 0.5f32..10.0,
            start in 50.0f32..690.0,
            rightward in any::<bool>(),
            ticks in 1usize..3000,
        ) {
            let mut state = playing();
            let direction = if rightward { 1.0 } else { -1.0 };
            state.hazards = vec![Hazard::new(Rect::new(start, 0.0, 60.0, 20.0), speed, direction)];
            // Keep the player away from the lane
            state.player.pos = Vec2::new(50.0, 550.0);
            let (left, right) = state.hazard_margins();

            for i in 0..ticks {
                tick(&mut state, &idle(i as f64));
                let h = &state.hazards[0];
                prop_assert!(h.rect.left() >= left - speed - 1e-3);
                prop_assert!(h.rect.right() <= right + speed + 1e-3);
            }
        }
    }
}
