//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame-driven, single mutator
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, GamePhase, GameState};
pub use tick::{Bounds, TickInput, tick};
