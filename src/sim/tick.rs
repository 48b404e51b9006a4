//! Simulation tick and run transitions
//!
//! Advances the game state by exactly one tick per call and owns the run
//! state machine. Transitions not in the table (starting while already
//! running, ticking while not running) are no-ops that emit no events.

use rand::Rng;

use super::collision::{bird_hits_pipe, bird_out_of_bounds};
use super::state::{GameEvent, GameState, Pipe, RunPhase};
use crate::consts::*;

/// Start (or restart) a run.
///
/// Legal only from `Ready` or `Over`: resets the bird pose, empties the pipe
/// collection, zeroes the frame counter and score, and moves to `Running`.
/// Calling this while already `Running` does nothing.
pub fn start_run(state: &mut GameState) -> Vec<GameEvent> {
    match state.phase {
        RunPhase::Ready | RunPhase::Over => {
            state.bird.reset();
            state.pipes.clear();
            state.frame = 0;
            state.score = 0;
            state.phase = RunPhase::Running;
            vec![GameEvent::RunStarted]
        }
        RunPhase::Running => Vec::new(),
    }
}

/// The single flap entry point for every input source (key, pointer, button).
///
/// While `Running` it applies the upward impulse. From `Ready` or `Over` it
/// doubles as the start/restart control: the run starts and the same press
/// also hops, matching the feel of tapping to take off.
pub fn flap(state: &mut GameState) -> Vec<GameEvent> {
    match state.phase {
        RunPhase::Running => {
            state.bird.flap();
            Vec::new()
        }
        RunPhase::Ready | RunPhase::Over => {
            let events = start_run(state);
            state.bird.flap();
            events
        }
    }
}

/// Spawn one pipe pair just past the right field edge.
///
/// The gap-top height is a uniformly random integer in
/// `[PIPE_TOP_MIN, pipe_top_max()]`, which guarantees the full gap plus the
/// margins at both field edges.
pub fn spawn_pipe(state: &mut GameState) {
    let top_min = PIPE_TOP_MIN as u32;
    let top_max = pipe_top_max() as u32;
    let gap_top = state.rng.random_range(top_min..=top_max) as f32;
    state
        .pipes
        .push(Pipe::new(FIELD_WIDTH + PIPE_SPAWN_OFFSET, gap_top));
}

/// Move every pipe left by one tick's worth of scroll and flag passes.
///
/// A pipe is passed the tick its trailing edge first crosses the bird's
/// leading edge; the flag flips exactly once, so each pipe scores exactly
/// one point.
pub fn advance_pipes(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for pipe in &mut state.pipes {
        pipe.x -= PIPE_SPEED;

        if !pipe.passed && pipe.trailing_edge() < BIRD_X {
            pipe.passed = true;
            state.score += 1;
            events.push(GameEvent::ScoreChanged(state.score));
        }
    }
}

/// Drop pipes that have scrolled fully off the left edge.
///
/// The slack is slightly negative so a pipe is never removed while any part
/// of it could still be visible.
pub fn prune_pipes(state: &mut GameState) {
    state.pipes.retain(|p| p.trailing_edge() >= PIPE_PRUNE_SLACK);
}

/// Advance the simulation by one tick.
///
/// No-op unless `Running`. Order per tick: frame counter, bird physics, pipe
/// spawn (on the cadence), pipe advance/pass, prune, collision check. A
/// collision ends the run and freezes the state as-is, so the final pose
/// stays on screen until restart.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    if state.phase != RunPhase::Running {
        return Vec::new();
    }

    let mut events = Vec::new();

    state.frame += 1;
    state.bird.integrate();

    if state.frame % SPAWN_INTERVAL == 0 {
        spawn_pipe(state);
    }

    advance_pipes(state, &mut events);
    prune_pipes(state);

    let hit = state.pipes.iter().any(|p| bird_hits_pipe(&state.bird, p))
        || bird_out_of_bounds(&state.bird);
    if hit {
        end_run(state, &mut events);
    }

    events
}

/// Terminal transition: `Running` -> `Over`. Updates the best score if this
/// run beat it and reports the final tally.
fn end_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = RunPhase::Over;

    if state.score > state.best_score {
        state.best_score = state.score;
        events.push(GameEvent::BestScoreChanged(state.best_score));
    }

    events.push(GameEvent::RunEnded {
        score: state.score,
        best: state.best_score,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Bird;

    /// Flap cadence that keeps the bird alive indefinitely with no pipes in
    /// reach: one flap every 38 ticks nets a slow downward drift well inside
    /// the field.
    fn tick_hovering(state: &mut GameState, ticks: u64) -> Vec<GameEvent> {
        let mut all = Vec::new();
        for i in 0..ticks {
            if i % 38 == 0 {
                all.extend(flap(state));
            }
            all.extend(tick(state));
        }
        all
    }

    #[test]
    fn test_flap_starts_run_from_ready() {
        let mut state = GameState::new(1, 0);
        let events = flap(&mut state);
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(events, vec![GameEvent::RunStarted]);
        // The starting tap also hops
        assert_eq!(state.bird.vy, FLAP_IMPULSE);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut state = GameState::new(1, 0);
        start_run(&mut state);
        state.frame = 17;
        state.score = 3;

        let events = start_run(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.frame, 17);
        assert_eq!(state.score, 3);
        assert_eq!(state.phase, RunPhase::Running);
    }

    #[test]
    fn test_tick_is_noop_unless_running() {
        let mut state = GameState::new(1, 0);
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.frame, 0);
        assert_eq!(state.bird.vy, 0.0);

        state.phase = RunPhase::Over;
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = GameState::new(7, 0);
        tick_hovering(&mut state, SPAWN_INTERVAL - 1);
        assert!(state.pipes.is_empty());

        tick(&mut state);
        assert_eq!(state.pipes.len(), 1);
        // Spawned at the right edge plus margin, then advanced once this tick
        let expected_x = FIELD_WIDTH + PIPE_SPAWN_OFFSET - PIPE_SPEED;
        assert!((state.pipes[0].x - expected_x).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_height_bounds() {
        let mut state = GameState::new(99, 0);
        for _ in 0..500 {
            spawn_pipe(&mut state);
        }
        for pipe in &state.pipes {
            assert!(pipe.gap_top >= PIPE_TOP_MIN);
            assert!(pipe.gap_top + PIPE_GAP <= FIELD_HEIGHT - PIPE_TOP_MIN);
            assert_eq!(pipe.gap_bottom - pipe.gap_top, PIPE_GAP);
        }
    }

    #[test]
    fn test_score_on_pass_exactly_once() {
        let mut state = GameState::new(1, 0);
        start_run(&mut state);
        // Gap centered on the bird so the x-overlap while passing is harmless
        state.bird = Bird { y: 250.0, vy: 0.0, rot: 0.0 };
        // Trailing edge at 122, one advance drops it to 119.4 < BIRD_X
        state.pipes.push(Pipe::new(50.0, 200.0));

        let mut events = Vec::new();
        advance_pipes(&mut state, &mut events);
        assert_eq!(state.score, 1);
        assert_eq!(events, vec![GameEvent::ScoreChanged(1)]);
        assert!(state.pipes[0].passed);

        // Already flagged: no second increment
        let mut events = Vec::new();
        advance_pipes(&mut state, &mut events);
        assert_eq!(state.score, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_prune_only_past_slack() {
        let mut state = GameState::new(1, 0);
        // Trailing edge -4.0: behind the field edge but above the slack
        state.pipes.push(Pipe::new(-PIPE_WIDTH - 4.0, 200.0));
        prune_pipes(&mut state);
        assert_eq!(state.pipes.len(), 1);

        // Trailing edge -6.0: past the slack, gone
        state.pipes[0].x = -PIPE_WIDTH - 6.0;
        prune_pipes(&mut state);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_collision_ends_and_freezes() {
        let mut state = GameState::new(1, 0);
        start_run(&mut state);
        state.bird = Bird { y: 100.0, vy: 0.0, rot: 0.0 };
        // Barrier straight across the bird
        state.pipes.push(Pipe::new(BIRD_X, 400.0));

        let events = tick(&mut state);
        assert_eq!(state.phase, RunPhase::Over);
        assert!(events.contains(&GameEvent::RunEnded { score: 0, best: 0 }));

        // Frozen: further ticks change nothing
        let frame = state.frame;
        let bird_y = state.bird.y;
        let pipe_x = state.pipes[0].x;
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.frame, frame);
        assert_eq!(state.bird.y, bird_y);
        assert_eq!(state.pipes[0].x, pipe_x);
    }

    #[test]
    fn test_best_score_updated_only_when_beaten() {
        let mut state = GameState::new(1, 4);
        start_run(&mut state);
        state.score = 6;
        let mut events = Vec::new();
        end_run(&mut state, &mut events);
        assert_eq!(state.best_score, 6);
        assert_eq!(
            events,
            vec![
                GameEvent::BestScoreChanged(6),
                GameEvent::RunEnded { score: 6, best: 6 },
            ]
        );

        // A worse run leaves the best untouched and emits no best-change
        let mut state = GameState::new(1, 6);
        start_run(&mut state);
        state.score = 3;
        let mut events = Vec::new();
        end_run(&mut state, &mut events);
        assert_eq!(state.best_score, 6);
        assert_eq!(events, vec![GameEvent::RunEnded { score: 3, best: 6 }]);
    }

    #[test]
    fn test_flap_while_over_restarts() {
        let mut state = GameState::new(1, 0);
        start_run(&mut state);
        state.score = 2;
        state.frame = 300;
        state.pipes.push(Pipe::new(200.0, 100.0));
        let mut events = Vec::new();
        end_run(&mut state, &mut events);
        assert_eq!(state.phase, RunPhase::Over);

        let events = flap(&mut state);
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(events, vec![GameEvent::RunStarted]);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.vy, FLAP_IMPULSE);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(12345, 0);
        let mut b = GameState::new(12345, 0);

        flap(&mut a);
        flap(&mut b);
        for i in 0..400 {
            if i % 38 == 0 {
                flap(&mut a);
                flap(&mut b);
            }
            tick(&mut a);
            tick(&mut b);
        }

        assert_eq!(a.frame, b.frame);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.pipes.len(), b.pipes.len());
        for (pa, pb) in a.pipes.iter().zip(&b.pipes) {
            assert_eq!(pa.x, pb.x);
            assert_eq!(pa.gap_top, pb.gap_top);
        }
    }
}
