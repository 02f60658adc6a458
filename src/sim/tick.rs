//! Per-tick orchestration
//!
//! Advances the simulation by one host-supplied delta in a fixed order:
//! paddle, then ball (block / paddle / border resolution), then bonuses,
//! then effects. Nothing moves while paused or after game over.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::bonus::{Bonus, BonusOutcome};
use super::effect::EffectKind;
use super::field::{Block, PALETTE};
use super::state::{GameEvent, GameState};
use crate::consts::{BLOCK_COLUMNS, BLOCK_HEIGHT, BLOCK_ROWS, BONUS_DROP_PERCENT};

/// Key-state booleans for a single tick.
///
/// `left`/`right` are level-triggered (held keys); `launch` and `pause`
/// are one-shot - the host clears them once a tick has consumed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Launch / release the held ball
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    debug_assert!(dt >= 0.0, "tick delta must be non-negative");

    if input.pause && !state.game_over {
        state.paused = !state.paused;
    }
    if state.game_over || state.paused {
        return;
    }
    state.time_ticks += 1;

    state.paddle.update(&mut state.ball, input, dt);
    step_ball(state, dt);
    step_bonuses(state, dt);
    step_effects(state, dt);
}

/// Generate the 5x25 block grid, replacing any prior set.
///
/// Cell width divides the canvas evenly; colors are drawn uniformly from
/// the palette via the state RNG, so the layout is a pure function of the
/// seed and canvas width.
pub fn generate_field(state: &mut GameState) {
    let cell = Vec2::new(state.canvas.x / BLOCK_COLUMNS as f32, BLOCK_HEIGHT);
    let mut blocks = Vec::with_capacity(BLOCK_ROWS * BLOCK_COLUMNS);

    for row in 0..BLOCK_ROWS {
        for col in 0..BLOCK_COLUMNS {
            let id = state.next_entity_id();
            let color = PALETTE[state.rng.random_range(0..PALETTE.len())];
            let pos = Vec2::new(col as f32 * cell.x, row as f32 * cell.y);
            blocks.push(Block::new(id, pos, cell, color));
        }
    }

    state.field.replace(blocks);
    log::info!(
        "generated block field: {BLOCK_ROWS}x{BLOCK_COLUMNS}, cell {}x{}",
        cell.x,
        cell.y
    );
}

fn step_ball(state: &mut GameState, dt: f32) {
    if !state.ball.movement_allowed {
        return;
    }
    state.ball.integrate(dt);
    resolve_block_hits(state, dt);
    resolve_paddle(state);
    state.ball.resolve_borders(state.canvas);
}

/// Resolve the first swept block crossing: reflect (unless piercing),
/// destroy the block, maybe drop a bonus.
fn resolve_block_hits(state: &mut GameState, dt: f32) {
    let hits = state
        .field
        .query_swept(state.ball.pos, state.ball.vel, state.ball.radius, dt);
    let Some(hit) = hits.first().copied() else {
        return;
    };
    if hits.len() > 1 {
        // Simultaneous crossings are not specially resolved; first wins
        log::debug!("swept query found {} crossings, resolving first", hits.len());
    }

    if !state.ball.fire_mode {
        if hit.side.is_horizontal() {
            state.ball.vel.y = -state.ball.vel.y;
        } else {
            state.ball.vel.x = -state.ball.vel.x;
        }
    }

    let block = state.field.take(hit.block);
    state.push_event(GameEvent::BlockDestroyed { block: block.id });

    if roll_bonus_drop(&mut state.rng) {
        let id = state.next_entity_id();
        state.bonuses.push(Bonus::new(id, block.pos));
        state.push_event(GameEvent::BonusSpawned { bonus: id });
    }
}

/// Uniform drop roll for a destroyed block
fn roll_bonus_drop(rng: &mut Pcg32) -> bool {
    rng.random_range(0..100u32) < BONUS_DROP_PERCENT
}

/// Catch the ball on the paddle, or flag game over on a bottom miss
fn resolve_paddle(state: &mut GameState) {
    let deck = state.canvas.y - state.paddle.size.y - state.ball.radius;
    if state.ball.pos.y > deck && state.ball.vel.y > 0.0 {
        let left = state.paddle.pos_x - state.ball.radius;
        let right = state.paddle.pos_x + state.paddle.size.x + state.ball.radius;
        if state.ball.pos.x >= left && state.ball.pos.x <= right {
            state.paddle.on_hit(&mut state.ball);
            state.ball.vel.y = -state.ball.vel.y;
            // Mirror the overshoot back above the collision plane
            let overflow = state.ball.pos.y - deck;
            state.ball.pos.y = deck - overflow;
        } else if state.ball.pos.y > state.canvas.y - state.ball.radius {
            state.on_game_over();
        }
    }
}

/// Advance bonuses and apply their outcomes.
///
/// Outcomes are collected first and removals applied by index afterwards,
/// so a bonus destroying itself mid-pass cannot skip its neighbors.
fn step_bonuses(state: &mut GameState, dt: f32) {
    let mut outcomes = Vec::with_capacity(state.bonuses.len());
    for bonus in &mut state.bonuses {
        outcomes.push(bonus.update(dt, &state.paddle, state.canvas));
    }

    let mut i = 0;
    for outcome in outcomes {
        match outcome {
            BonusOutcome::Falling => i += 1,
            BonusOutcome::Collected => {
                let bonus = state.bonuses.remove(i);
                state.push_event(GameEvent::BonusCollected { bonus: bonus.id });
                state.activate_effect(EffectKind::Fireball);
            }
            BonusOutcome::Expired => {
                let bonus = state.bonuses.remove(i);
                state.push_event(GameEvent::BonusExpired { bonus: bonus.id });
            }
        }
    }
}

/// Age active effects; expired ones revert their hooks and drop out
fn step_effects(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.effects.len() {
        state.effects[i].remaining -= dt;
        if state.effects[i].remaining <= 0.0 {
            let effect = state.effects.remove(i);
            effect.deactivate(&mut state.ball, &mut state.paddle);
            state.push_event(GameEvent::EffectExpired { kind: effect.kind });
        } else {
            i += 1;
        }
    }
}
