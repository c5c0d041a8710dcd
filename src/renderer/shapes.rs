//! Shape generation for 2D primitives
//!
//! Turns polylines and sprite placements into triangle lists a backend can
//! consume directly.

use glam::Vec2;

use super::vertex::Vertex;

/// Tessellate a connected polyline into per-segment quads of fixed stroke
/// width. Fewer than two points produces nothing.
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);

    for w in points.windows(2) {
        let (p1, p2) = (w[0], w[1]);

        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x);

        // Quad corners
        let v1a = p1 + perp * half;
        let v1b = p1 - perp * half;
        let v2a = p2 + perp * half;
        let v2b = p2 - perp * half;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Tessellate an axis-aligned box rotated about its center by `angle_deg`
/// (counter-clockwise in screen space, matching the sprite tilt).
pub fn rotated_quad(top_left: Vec2, size: Vec2, angle_deg: f32, color: [f32; 4]) -> Vec<Vertex> {
    let center = top_left + size / 2.0;
    let rad = angle_deg.to_radians();
    let (sin, cos) = rad.sin_cos();

    // Screen y grows downward, so a positive angle rotates counter-clockwise
    let rotate = |corner: Vec2| {
        let d = corner - center;
        Vec2::new(
            center.x + d.x * cos + d.y * sin,
            center.y - d.x * sin + d.y * cos,
        )
    };

    let tl = rotate(top_left);
    let tr = rotate(top_left + Vec2::new(size.x, 0.0));
    let br = rotate(top_left + size);
    let bl = rotate(top_left + Vec2::new(0.0, size.y));

    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}
