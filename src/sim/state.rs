//! Game state root and the presentation-sink event queue
//!
//! All state that must survive a host-side snapshot lives here, including
//! the live RNG so a restored game resumes the same random sequence.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bonus::Bonus;
use super::effect::{Effect, EffectKind};
use super::field::BlockField;
use super::paddle::Paddle;
use super::tick::generate_field;
use crate::consts::{BALL_RADIUS, BALL_START_VEL};

/// Discrete notifications for the presentation layer.
///
/// Continuous data (positions) is read directly off the state each frame;
/// events only carry the create/destroy/terminal transitions a renderer
/// or sound layer cannot infer from two consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BlockDestroyed { block: u32 },
    BonusSpawned { bonus: u32 },
    BonusCollected { bonus: u32 },
    BonusExpired { bonus: u32 },
    EffectActivated { kind: EffectKind },
    EffectExpired { kind: EffectKind },
    GameOver,
}

/// Complete game state; the sole ownership root for all entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Live RNG; every random draw in the simulation goes through it
    pub rng: Pcg32,
    /// Play field dimensions
    pub canvas: Vec2,
    pub field: BlockField,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bonuses, in spawn order
    pub bonuses: Vec<Bonus>,
    /// Active effects, in activation order
    pub effects: Vec<Effect>,
    pub game_over: bool,
    pub paused: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events accumulated since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh game: generated block field, centered paddle, ball
    /// staged on the paddle awaiting launch.
    pub fn new(seed: u64, canvas: Vec2) -> Self {
        assert!(
            canvas.x > 0.0 && canvas.y > 0.0,
            "canvas must have positive dimensions, got {canvas}"
        );

        let paddle = Paddle::new(canvas);
        let ball_pos = Vec2::new(
            paddle.pos_x + paddle.size.x * 0.5,
            paddle.pos_y - BALL_RADIUS,
        );
        let ball = Ball::new(ball_pos, BALL_START_VEL, BALL_RADIUS);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            canvas,
            field: BlockField::default(),
            paddle,
            ball,
            bonuses: Vec::new(),
            effects: Vec::new(),
            game_over: false,
            paused: false,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        generate_field(&mut state);
        state.paddle.hold_on_start(&mut state.ball);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the accumulated events to the host, clearing the queue
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Terminal state transition; nothing ticks afterwards
    pub fn on_game_over(&mut self) {
        self.game_over = true;
        self.push_event(GameEvent::GameOver);
        log::info!("game over after {} ticks", self.time_ticks);
    }

    /// Activate an effect, or refresh its timer if one of the same kind
    /// is already running (duplicates would double-revert on expiry).
    pub fn activate_effect(&mut self, kind: EffectKind) {
        if let Some(active) = self.effects.iter_mut().find(|e| e.kind == kind) {
            active.remaining = kind.duration();
            return;
        }
        let effect = Effect::new(kind);
        effect.activate(&mut self.ball, &mut self.paddle);
        self.effects.push(effect);
        self.push_event(GameEvent::EffectActivated { kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BLOCK_COLUMNS, BLOCK_ROWS, CANVAS_HEIGHT, CANVAS_WIDTH};

    fn canvas() -> Vec2 {
        Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(7, canvas());
        assert_eq!(state.field.len(), BLOCK_ROWS * BLOCK_COLUMNS);
        assert_eq!(state.paddle.pos_x, 300.0);
        assert!(!state.game_over);
        assert!(!state.paused);

        // Ball is staged on the paddle center, held until launch
        assert_eq!(state.ball.pos.x, 400.0);
        assert!(!state.ball.movement_allowed);
        assert!(state.paddle.hold.is_some());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(42, canvas());
        let b = GameState::new(42, canvas());
        for (x, y) in a.field.blocks().iter().zip(b.field.blocks()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.color, y.color);
        }
    }

    #[test]
    fn test_activate_effect_refreshes_instead_of_stacking() {
        let mut state = GameState::new(7, canvas());
        state.activate_effect(EffectKind::Fireball);
        state.effects[0].remaining = 0.5;
        state.activate_effect(EffectKind::Fireball);
        assert_eq!(state.effects.len(), 1);
        assert_eq!(state.effects[0].remaining, EffectKind::Fireball.duration());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(7, canvas());
        state.on_game_over();
        assert_eq!(state.drain_events(), vec![GameEvent::GameOver]);
        assert!(state.drain_events().is_empty());
    }
}
