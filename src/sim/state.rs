//! Ball state and game phase

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Title menu; the sim is inert
    #[default]
    Menu,
    /// Active gameplay
    Playing,
}

/// The bouncing ball
///
/// Position is the top-left corner of the square sprite, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length of the square sprite
    pub size: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: BALL_START_POS,
            vel: BALL_START_VEL,
            size: BALL_SIZE,
        }
    }

    /// Return to the fixed spawn position and velocity
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            ball: Ball::new(),
        }
    }

    /// Start (or restart) a game. The ball always begins from the same spot.
    pub fn enter_game(&mut self) {
        self.ball.reset();
        self.phase = GamePhase::Playing;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_game_resets_ball() {
        let mut state = GameState::new();
        state.enter_game();
        state.ball.pos = Vec2::new(640.0, 480.0);
        state.ball.vel = Vec2::new(-3.0, 7.5);

        state.enter_game();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, BALL_START_POS);
        assert_eq!(state.ball.vel, BALL_START_VEL);
    }

    #[test]
    fn test_state_starts_in_menu() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.ball.size, BALL_SIZE);
    }
}
