//! Per-frame ball update
//!
//! One invocation per animation frame. Velocities are in pixels per frame,
//! so there is no timestep parameter.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use crate::clamp_speed;
use crate::consts::*;

/// Input sampled for a single frame (assumed well-formed by the caller)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steering vector added to the ball velocity
    pub direction: Vec2,
    /// Return to the menu
    pub escape: bool,
}

/// Canvas extent in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, bounds: Bounds) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let ball = &mut state.ball;

    // Steer from input (unbounded here; clamped below)
    ball.vel += input.direction;

    // Reflect off the canvas edges. The check runs before integration, and
    // the low edge uses <= 0 while the high edge uses > extent. Kept exactly
    // as observed, including the one-frame overshoot a fast ball can get.
    if ball.pos.x + ball.size > bounds.width || ball.pos.x <= 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y + ball.size > bounds.height || ball.pos.y <= 0.0 {
        ball.vel.y = -ball.vel.y;
    }

    ball.pos += ball.vel;

    // Drag, then top-speed clamp
    ball.vel *= BALL_DRAG;
    ball.vel = clamp_speed(ball.vel, BALL_MAX_SPEED);

    if input.escape {
        state.phase = GamePhase::Menu;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn playing_state(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new();
        state.enter_game();
        state.ball.pos = pos;
        state.ball.vel = vel;
        state
    }

    #[test]
    fn test_free_flight() {
        // Mid-canvas, no walls in reach: integrate then drag
        let mut state = playing_state(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0));
        tick(&mut state, &TickInput::default(), BOUNDS);

        assert_eq!(state.ball.pos, Vec2::new(110.0, 110.0));
        assert!((state.ball.vel.x - 9.9).abs() < 1e-5);
        assert!((state.ball.vel.y - 9.9).abs() < 1e-5);
    }

    #[test]
    fn test_right_wall_flips_before_integration() {
        // pos.x + size = 850 > 800, so vel.x flips and the ball moves left
        let mut state = playing_state(Vec2::new(750.0, 100.0), Vec2::new(10.0, 0.0));
        tick(&mut state, &TickInput::default(), BOUNDS);

        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.pos.x, 740.0);
    }

    #[test]
    fn test_left_wall_uses_inclusive_zero() {
        // pos.x == 0 triggers the low-edge check
        let mut state = playing_state(Vec2::new(0.0, 300.0), Vec2::new(-5.0, 0.0));
        tick(&mut state, &TickInput::default(), BOUNDS);
        assert!(state.ball.vel.x > 0.0);

        // Just inside does not
        let mut state = playing_state(Vec2::new(0.1, 300.0), Vec2::new(-5.0, 0.0));
        tick(&mut state, &TickInput::default(), BOUNDS);
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_crossing_flips_sign_once_per_frame() {
        // The x and y checks are independent ifs, so a crossing negates the
        // component exactly once within the frame
        let mut state = playing_state(Vec2::new(750.0, 100.0), Vec2::new(12.0, 3.0));
        tick(&mut state, &TickInput::default(), BOUNDS);

        // Flipped once, then dragged: -12 * 0.99
        assert!((state.ball.vel.x - (-12.0 * BALL_DRAG)).abs() < 1e-5);
        // y untouched by the x crossing
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_input_accumulates_into_velocity() {
        let mut state = playing_state(Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0));
        let input = TickInput {
            direction: Vec2::new(2.0, -1.0),
            escape: false,
        };
        tick(&mut state, &input, BOUNDS);

        assert!((state.ball.vel.x - 3.0 * BALL_DRAG).abs() < 1e-5);
        assert!((state.ball.vel.y - (-1.0 * BALL_DRAG)).abs() < 1e-5);
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut state = playing_state(Vec2::new(400.0, 300.0), Vec2::new(1.0, 1.0));
        let input = TickInput {
            direction: Vec2::ZERO,
            escape: true,
        };
        tick(&mut state, &input, BOUNDS);
        assert_eq!(state.phase, GamePhase::Menu);

        // The ball keeps its in-flight state until the next game entry
        assert_ne!(state.ball.pos, BALL_START_POS);
    }

    #[test]
    fn test_menu_tick_is_inert() {
        let mut state = GameState::new();
        let before = state.ball;
        tick(&mut state, &TickInput::default(), BOUNDS);
        assert_eq!(state.ball, before);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    proptest! {
        #[test]
        fn prop_speed_never_exceeds_clamp(
            vx in -200.0f32..200.0,
            vy in -200.0f32..200.0,
            dx in -50.0f32..50.0,
            dy in -50.0f32..50.0,
        ) {
            let mut state = playing_state(Vec2::new(400.0, 300.0), Vec2::new(vx, vy));
            let input = TickInput {
                direction: Vec2::new(dx, dy),
                escape: false,
            };
            tick(&mut state, &input, BOUNDS);
            prop_assert!(state.ball.vel.length() <= BALL_MAX_SPEED + 1e-3);
        }

        #[test]
        fn prop_drag_decays_speed_without_sign_flip(
            vx in -25.0f32..25.0,
            vy in -25.0f32..25.0,
        ) {
            // Huge canvas so no reflection fires; drag alone must shrink the
            // speed monotonically and never reverse a component
            let wide_open = Bounds::new(1e9, 1e9);
            let mut state = playing_state(Vec2::new(5e8, 5e8), Vec2::new(vx, vy));
            let mut last_speed = state.ball.vel.length();

            for _ in 0..100 {
                let sign_x = state.ball.vel.x.signum();
                let sign_y = state.ball.vel.y.signum();
                tick(&mut state, &TickInput::default(), wide_open);

                let speed = state.ball.vel.length();
                prop_assert!(speed <= last_speed + 1e-4);
                last_speed = speed;

                if state.ball.vel.x != 0.0 {
                    prop_assert_eq!(state.ball.vel.x.signum(), sign_x);
                }
                if state.ball.vel.y != 0.0 {
                    prop_assert_eq!(state.ball.vel.y.signum(), sign_y);
                }
            }
        }
    }
}
