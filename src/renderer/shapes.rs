//! Shape generation for 2D primitives
//!
//! Everything on screen is built from axis-aligned or rotated rectangles,
//! tessellated as two triangles each.

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (x1, y1) = (x + w, y + h);
    [
        Vertex::new(x, y, color),
        Vertex::new(x1, y, color),
        Vertex::new(x, y1, color),
        Vertex::new(x1, y, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x, y1, color),
    ]
}

/// Generate vertices for a rectangle given in local space, rotated by `angle`
/// about the local origin and translated to `pivot`.
///
/// Used for the bird: its parts are laid out around the body center, then the
/// whole sprite is tilted by the pose angle.
pub fn rotated_rect(
    local_x: f32,
    local_y: f32,
    w: f32,
    h: f32,
    pivot: Vec2,
    angle: f32,
    color: [f32; 4],
) -> [Vertex; 6] {
    let (sin, cos) = angle.sin_cos();
    let transform = |x: f32, y: f32| -> Vec2 {
        // Screen coordinates: y grows downward, so a positive angle is a
        // clockwise (nose-down) tilt.
        Vec2::new(
            pivot.x + x * cos - y * sin,
            pivot.y + x * sin + y * cos,
        )
    };

    let a = transform(local_x, local_y);
    let b = transform(local_x + w, local_y);
    let c = transform(local_x, local_y + h);
    let d = transform(local_x + w, local_y + h);

    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}
