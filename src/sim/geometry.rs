//! Segment-intersection geometry for swept collision queries

use glam::Vec2;

/// 2D cross product (z component of the 3D cross)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - b.x * a.y
}

/// True iff `v1` and `v2` lie on opposite sides of (or on) the line
/// spanned by `main`, by sign comparison of the cross products.
#[inline]
pub fn opposite_sides(main: Vec2, v1: Vec2, v2: Vec2) -> bool {
    let p1 = cross(main, v1);
    let p2 = cross(main, v2);
    (p1 >= 0.0 && p2 <= 0.0) || (p1 <= 0.0 && p2 >= 0.0)
}

/// True iff segment AB crosses segment CD.
///
/// C and D must straddle the line through AB, and A and B must straddle
/// the line through CD. The comparisons are inclusive, so collinear and
/// endpoint-touching cases count as intersecting - a deliberate tie-break
/// the swept collision query relies on (a travel segment ending exactly
/// on a block edge still registers a hit).
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    if opposite_sides(b - a, c - a, d - a) {
        return opposite_sides(d - c, a - c, b - c);
    }
    false
}
