//! Collision detection
//!
//! Everything that can end a run: AABB overlap between the bird and either
//! half of a pipe pair, and the field-bounds check. Collision geometry is the
//! unpadded rectangles from `state`; any cosmetic padding the renderer adds
//! is irrelevant here.

use super::state::{Bird, Pipe};
use crate::consts::{BIRD_HEIGHT, FIELD_HEIGHT};

/// True if the bird overlaps either barrier of the pipe pair
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let rect = bird.rect();
    rect.overlaps(&pipe.top_rect()) || rect.overlaps(&pipe.bottom_rect())
}

/// True if the bird has left the field vertically. Unlike the AABB test this
/// is edge-inclusive: touching the top or bottom of the field ends the run.
pub fn bird_out_of_bounds(bird: &Bird) -> bool {
    bird.y <= 0.0 || bird.y + BIRD_HEIGHT >= FIELD_HEIGHT
}
