//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per display refresh)
//! - Seeded RNG only
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{bird_hits_pipe, bird_out_of_bounds};
pub use rect::Rect;
pub use state::{Bird, GameEvent, GameState, Pipe, RunPhase};
pub use tick::{advance_pipes, flap, prune_pipes, spawn_pipe, start_run, tick};
