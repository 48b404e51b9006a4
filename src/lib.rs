//! Retro Flappy - a flap-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `bestscore`: Best-score persistence

pub mod bestscore;
pub mod renderer;
pub mod sim;

pub use bestscore::BestScore;

/// Game configuration constants
///
/// Logical units are field pixels; time is measured in ticks (one tick per
/// display refresh).
pub mod consts {
    /// Logical field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Velocity gained per tick while falling
    pub const GRAVITY: f32 = 0.38;
    /// Velocity set by a flap (negative = up, y axis points down)
    pub const FLAP_IMPULSE: f32 = -7.2;

    /// Horizontal pipe movement per tick
    pub const PIPE_SPEED: f32 = 2.6;
    /// Vertical clearance between the two halves of a pipe pair
    pub const PIPE_GAP: f32 = 160.0;
    pub const PIPE_WIDTH: f32 = 72.0;
    /// Ticks between pipe spawns
    pub const SPAWN_INTERVAL: u64 = 110;
    /// Pipes spawn at FIELD_WIDTH + this margin
    pub const PIPE_SPAWN_OFFSET: f32 = 8.0;
    /// Minimum gap-top height (keeps the gap clear of the field top)
    pub const PIPE_TOP_MIN: f32 = 70.0;
    /// The gap bottom stays at least this far above the field bottom
    pub const PIPE_BOTTOM_MARGIN: f32 = 140.0;
    /// Pipes are pruned once their trailing edge drops below this
    pub const PIPE_PRUNE_SLACK: f32 = -5.0;

    /// Fixed bird x; the world scrolls past the bird, it never moves forward
    pub const BIRD_X: f32 = 120.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 26.0;
    /// Start y as a fraction of field height
    pub const BIRD_START_Y_FRAC: f32 = 0.45;

    /// Tilt = vy / TILT_DIVISOR, clamped to [TILT_MIN, TILT_MAX] radians.
    /// The asymmetric clamp gives a steeper nose-down pitch when falling.
    pub const TILT_DIVISOR: f32 = 8.0;
    pub const TILT_MIN: f32 = -0.5;
    pub const TILT_MAX: f32 = 1.25;

    /// Visual ground strip height (cosmetic, not collision geometry)
    pub const GROUND_HEIGHT: f32 = 74.0;

    /// Largest legal gap-top height given the gap and bottom margin
    #[inline]
    pub fn pipe_top_max() -> f32 {
        FIELD_HEIGHT - PIPE_GAP - PIPE_BOTTOM_MARGIN
    }
}
