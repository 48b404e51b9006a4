//! Scene building: simulation state to vertex list
//!
//! A pure function of the current `GameState`; nothing here mutates the
//! simulation. Draw order is painter's algorithm: clouds, ground, pipes,
//! bird, border. The sky is the render pass clear color.
//!
//! The pipe lips overhang the body by 4px on each side; that padding is
//! cosmetic only, collision geometry is the unpadded rectangles in `sim`.

use glam::Vec2;

use super::shapes::{rect, rotated_rect};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GameState, Pipe};

/// Build the full frame's vertex list from the current state
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut verts = Vec::with_capacity(256);

    clouds(state.frame, &mut verts);
    ground(state.frame, &mut verts);
    for pipe in &state.pipes {
        pipe_pair(pipe, &mut verts);
    }
    bird(state, &mut verts);
    border(&mut verts);

    verts
}

/// Parallax cloud clusters. Position is derived from the frame counter, not
/// stored anywhere: each cluster drifts left at 0.3 px/tick and wraps.
fn clouds(frame: u64, verts: &mut Vec<Vertex>) {
    for i in 0..4 {
        let phase = frame as f32 * 0.3 + i as f32 * 130.0;
        let cx = phase % (FIELD_WIDTH + 100.0) - 100.0;
        let cy = 80.0 + i as f32 * 40.0;
        verts.extend(rect(cx, cy, 34.0, 12.0, colors::CLOUD));
        verts.extend(rect(cx + 10.0, cy - 8.0, 24.0, 12.0, colors::CLOUD));
        verts.extend(rect(cx + 22.0, cy + 4.0, 20.0, 10.0, colors::CLOUD));
    }
}

/// Ground strip with scrolling stripes
fn ground(frame: u64, verts: &mut Vec<Vertex>) {
    verts.extend(rect(
        0.0,
        FIELD_HEIGHT - GROUND_HEIGHT,
        FIELD_WIDTH,
        GROUND_HEIGHT,
        colors::GROUND,
    ));

    let scroll = (frame % (FIELD_WIDTH + 20.0) as u64) as f32;
    let mut x = 0.0;
    while x < FIELD_WIDTH {
        let sx = (x + scroll) % (FIELD_WIDTH + 20.0) - 20.0;
        verts.extend(rect(sx, FIELD_HEIGHT - 64.0, 10.0, 6.0, colors::GROUND_STRIPE));
        x += 20.0;
    }
}

/// One pipe pair: body, shade, highlight and lip for both halves
fn pipe_pair(pipe: &Pipe, verts: &mut Vec<Vertex>) {
    let half = |y: f32, h: f32, verts: &mut Vec<Vertex>| {
        verts.extend(rect(pipe.x, y, PIPE_WIDTH, h, colors::PIPE_BODY));
        verts.extend(rect(pipe.x + PIPE_WIDTH - 10.0, y, 10.0, h, colors::PIPE_SHADE));
        verts.extend(rect(pipe.x, y, 8.0, h, colors::PIPE_HIGHLIGHT));
    };

    half(0.0, pipe.gap_top, verts);
    half(pipe.gap_bottom, FIELD_HEIGHT - pipe.gap_bottom, verts);

    // Lip caps overhang the body by 4px each side
    verts.extend(rect(
        pipe.x - 4.0,
        pipe.gap_top - 12.0,
        PIPE_WIDTH + 8.0,
        12.0,
        colors::PIPE_LIP,
    ));
    verts.extend(rect(
        pipe.x - 4.0,
        pipe.gap_bottom,
        PIPE_WIDTH + 8.0,
        12.0,
        colors::PIPE_LIP,
    ));
}

/// The bird sprite, rotated by its pose tilt about the body center
fn bird(state: &GameState, verts: &mut Vec<Vertex>) {
    let center = Vec2::new(
        BIRD_X + BIRD_WIDTH / 2.0,
        state.bird.y + BIRD_HEIGHT / 2.0,
    );
    let rot = state.bird.rot;
    let (hw, hh) = (BIRD_WIDTH / 2.0, BIRD_HEIGHT / 2.0);

    verts.extend(rotated_rect(-hw, -hh, BIRD_WIDTH, BIRD_HEIGHT, center, rot, colors::BIRD_BODY));
    verts.extend(rotated_rect(-4.0, 2.0, 14.0, 8.0, center, rot, colors::BIRD_WING));
    verts.extend(rotated_rect(6.0, -8.0, 8.0, 8.0, center, rot, colors::BIRD_EYE));
    verts.extend(rotated_rect(10.0, -6.0, 4.0, 4.0, center, rot, colors::BIRD_PUPIL));
    verts.extend(rotated_rect(hw - 1.0, -2.0, 8.0, 6.0, center, rot, colors::BIRD_BEAK));
}

/// 4px black frame around the full field extent
fn border(verts: &mut Vec<Vertex>) {
    verts.extend(rect(0.0, 0.0, FIELD_WIDTH, 4.0, colors::BORDER));
    verts.extend(rect(0.0, FIELD_HEIGHT - 4.0, FIELD_WIDTH, 4.0, colors::BORDER));
    verts.extend(rect(0.0, 0.0, 4.0, FIELD_HEIGHT, colors::BORDER));
    verts.extend(rect(FIELD_WIDTH - 4.0, 0.0, 4.0, FIELD_HEIGHT, colors::BORDER));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{start_run, tick};

    #[test]
    fn test_scene_does_not_touch_state() {
        let mut state = GameState::new(5, 0);
        start_run(&mut state);
        for _ in 0..3 {
            tick(&mut state);
        }
        let before = (state.frame, state.bird.y, state.score, state.pipes.len());
        let _ = build_scene(&state);
        let after = (state.frame, state.bird.y, state.score, state.pipes.len());
        assert_eq!(before, after);
    }

    #[test]
    fn test_scene_grows_with_pipes() {
        let mut state = GameState::new(5, 0);
        let base = build_scene(&state).len();
        state.pipes.push(Pipe::new(300.0, 200.0));
        assert!(build_scene(&state).len() > base);
    }

    #[test]
    fn test_vertices_stay_near_field() {
        // Clouds wrap at -100 and pipes spawn at +8, so allow a small apron
        let mut state = GameState::new(5, 0);
        state.pipes.push(Pipe::new(FIELD_WIDTH + PIPE_SPAWN_OFFSET, 200.0));
        for v in build_scene(&state) {
            assert!(v.position[0] >= -110.0 && v.position[0] <= FIELD_WIDTH + 100.0);
            assert!(v.position[1] >= -30.0 && v.position[1] <= FIELD_HEIGHT + 30.0);
        }
    }
}
