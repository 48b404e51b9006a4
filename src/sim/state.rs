//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Waiting for the first input
    Ready,
    /// Simulation active
    Running,
    /// Run ended on a collision, waiting for restart input
    Over,
}

/// Events emitted by state transitions
///
/// The driver routes these to the external collaborators (score display,
/// overlay, best-score store) exactly when the respective value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RunStarted,
    ScoreChanged(u32),
    BestScoreChanged(u32),
    RunEnded { score: u32, best: u32 },
}

/// The player entity
///
/// The bird never moves horizontally; the world scrolls past it at a fixed
/// `BIRD_X`. Only the vertical pose is simulated.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    /// Top edge y position
    pub y: f32,
    /// Vertical velocity (positive = down)
    pub vy: f32,
    /// Visual tilt in radians, derived from velocity
    pub rot: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: BIRD_START_Y_FRAC * FIELD_HEIGHT,
            vy: 0.0,
            rot: 0.0,
        }
    }
}

impl Bird {
    /// Collision rectangle at the current pose
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(BIRD_X, self.y, BIRD_WIDTH, BIRD_HEIGHT)
    }

    /// Advance one tick: velocity first, then position from the new velocity,
    /// then the derived tilt.
    pub fn integrate(&mut self) {
        self.vy += GRAVITY;
        self.y += self.vy;
        self.rot = (self.vy / TILT_DIVISOR).clamp(TILT_MIN, TILT_MAX);
    }

    /// Apply the flap impulse. Overwrites velocity unconditionally, so a
    /// second flap within the same tick leaves a single impulse (last write
    /// wins); impulses never stack.
    pub fn flap(&mut self) {
        self.vy = FLAP_IMPULSE;
    }

    /// Reset to the start-of-run pose
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A pipe pair: top and bottom barriers separated by a fixed gap
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    /// Left edge x position (decreases every tick)
    pub x: f32,
    /// Height of the top barrier (= top edge of the gap)
    pub gap_top: f32,
    /// Top edge of the bottom barrier (= gap_top + PIPE_GAP, always)
    pub gap_bottom: f32,
    /// Set once the bird's leading edge clears this pipe
    pub passed: bool,
}

impl Pipe {
    /// Construct a pipe at `x` with the given gap-top height. The gap bottom
    /// is derived, keeping `gap_bottom - gap_top == PIPE_GAP` by construction.
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            gap_bottom: gap_top + PIPE_GAP,
            passed: false,
        }
    }

    /// Right edge of the pipe
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Collision rectangle of the top barrier (field top down to the gap)
    #[inline]
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, PIPE_WIDTH, self.gap_top)
    }

    /// Collision rectangle of the bottom barrier (gap down to the field bottom)
    #[inline]
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_bottom, PIPE_WIDTH, FIELD_HEIGHT - self.gap_bottom)
    }
}

/// Complete simulation state (deterministic)
///
/// This is the explicit simulation context: the driver owns one and passes it
/// to every phase. There are no ambient globals.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: RunPhase,
    /// Player entity
    pub bird: Bird,
    /// Active pipes in spawn order
    pub pipes: Vec<Pipe>,
    /// Tick counter, zeroed at run start (drives spawn cadence and parallax)
    pub frame: u64,
    /// Pipes passed this run
    pub score: u32,
    /// Best score across runs (loaded from the store at startup)
    pub best_score: u32,
    /// Seeded RNG for spawn heights
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed and stored best score.
    ///
    /// Panics if the spawn-height bounds are inverted; that means the field
    /// constants are misconfigured, which is fatal, not recoverable.
    pub fn new(seed: u64, best_score: u32) -> Self {
        assert!(
            PIPE_TOP_MIN <= pipe_top_max(),
            "spawn bounds inverted: PIPE_TOP_MIN ({}) > pipe_top_max ({})",
            PIPE_TOP_MIN,
            pipe_top_max()
        );

        Self {
            seed,
            phase: RunPhase::Ready,
            bird: Bird::default(),
            pipes: Vec::new(),
            frame: 0,
            score: 0,
            best_score,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bird_integration_order() {
        let mut bird = Bird::default();
        let y0 = bird.y;
        bird.integrate();
        // Velocity updates first, then position moves by the new velocity
        assert_eq!(bird.vy, GRAVITY);
        assert_eq!(bird.y, y0 + GRAVITY);
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        let mut bird = Bird::default();
        bird.vy = 12.0;
        bird.flap();
        assert_eq!(bird.vy, FLAP_IMPULSE);

        // A second flap before integration changes nothing
        bird.flap();
        assert_eq!(bird.vy, FLAP_IMPULSE);
    }

    #[test]
    fn test_tilt_clamp() {
        let mut bird = Bird::default();
        // Deep fall pins the tilt at the nose-down limit
        bird.vy = 100.0;
        bird.y = 100.0;
        bird.integrate();
        assert_eq!(bird.rot, TILT_MAX);

        // Hard rise pins it at the nose-up limit
        bird.vy = -100.0;
        bird.integrate();
        assert_eq!(bird.rot, TILT_MIN);
    }

    #[test]
    fn test_pipe_gap_invariant() {
        let pipe = Pipe::new(488.0, 200.0);
        assert_eq!(pipe.gap_bottom - pipe.gap_top, PIPE_GAP);
        assert_eq!(pipe.trailing_edge(), 488.0 + PIPE_WIDTH);
    }

    #[test]
    fn test_pipe_rects_span_field() {
        let pipe = Pipe::new(100.0, 150.0);
        let top = pipe.top_rect();
        let bottom = pipe.bottom_rect();
        assert_eq!(top.y, 0.0);
        assert_eq!(top.bottom(), 150.0);
        assert_eq!(bottom.y, 150.0 + PIPE_GAP);
        assert_eq!(bottom.bottom(), FIELD_HEIGHT);
    }

    #[test]
    fn test_new_state_is_ready() {
        let state = GameState::new(42, 7);
        assert_eq!(state.phase, RunPhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 7);
        assert!(state.pipes.is_empty());
    }
}
