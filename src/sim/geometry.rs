//! Overlap predicates and the player's collision proxy
//!
//! Two deliberately quirky tests are inherited from the classic scene: the
//! rectangle overlap compares half widths on the x axis but raw edges on the
//! y axis, and the player's bounding square is off-center and not a tight
//! fit. Both are load-bearing for which contacts register, so they are kept
//! bit-for-bit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Strict overlap test for two circles. Exact tangency is not a collision.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    distance(a, b) < a_radius + b_radius
}

/// Overlap test for two rectangles.
///
/// The x axis compares each rectangle's half width against the other's left
/// edge; the y axis compares raw edges. All four comparisons are strict, so
/// exact edge contact never counts as overlap.
#[inline]
pub fn rects_overlap(r1: &Rect, r2: &Rect) -> bool {
    r1.pos.x + r1.size.x / 2.0 > r2.pos.x
        && r2.pos.x + r2.size.x / 2.0 > r1.pos.x
        && r1.pos.y + r1.size.y > r2.pos.y
        && r2.pos.y + r2.size.y > r1.pos.y
}

/// Square collision proxy for a circle: side `2 * radius`, anchored at
/// `(x - radius / 2, y - radius / 2)`. Not a tight bounding box.
#[inline]
pub fn bounding_square(center: Vec2, radius: f32) -> Rect {
    Rect {
        pos: center - Vec2::splat(radius / 2.0),
        size: Vec2::splat(2.0 * radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn circles_overlap_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        // Centers exactly 30 apart, radii summing to 30: tangent, no overlap
        let b = Vec2::new(30.0, 0.0);
        assert!(!circles_overlap(a, 15.0, b, 15.0));
        // A hair closer overlaps
        let b = Vec2::new(29.99, 0.0);
        assert!(circles_overlap(a, 15.0, b, 15.0));
        // Far apart misses
        let b = Vec2::new(100.0, 100.0);
        assert!(!circles_overlap(a, 15.0, b, 15.0));
    }

    #[test]
    fn rect_x_axis_uses_half_widths() {
        // Raw extents 0..10 and 7..17 overlap, but the half-width compare
        // (0 + 5 > 7) fails, so the test must report no overlap.
        let r1 = Rect::new(0.0, 0.0, 10.0, 10.0);
        let r2 = Rect::new(7.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&r1, &r2));

        // Within half-width reach on both sides: overlap
        let r2 = Rect::new(4.0, 0.0, 10.0, 10.0);
        assert!(rects_overlap(&r1, &r2));
    }

    #[test]
    fn rect_y_axis_uses_raw_edges() {
        let r1 = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Exact y edge contact: strict compare, no overlap
        let r2 = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&r1, &r2));
        // Any y intrusion counts
        let r2 = Rect::new(0.0, 9.5, 10.0, 10.0);
        assert!(rects_overlap(&r1, &r2));
    }

    #[test]
    fn bounding_square_is_offset_and_doubled() {
        let rect = bounding_square(Vec2::new(100.0, 60.0), 15.0);
        assert_eq!(rect.pos, Vec2::new(92.5, 52.5));
        assert_eq!(rect.size, Vec2::new(30.0, 30.0));
    }

    proptest! {
        #[test]
        fn circles_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 1.0f32..60.0, rb in 1.0f32..60.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(
                circles_overlap(a, ra, b, rb),
                circles_overlap(b, rb, a, ra)
            );
        }

        // Integer radii keep the axis-aligned tangent distance exact in f32,
        // so the strictness of the compare is actually exercised.
        #[test]
        fn axis_aligned_tangency_never_overlaps(ra in 1u32..100, rb in 1u32..100) {
            let ra = ra as f32;
            let rb = rb as f32;
            let a = Vec2::ZERO;
            let b = Vec2::new(ra + rb, 0.0);
            prop_assert!(!circles_overlap(a, ra, b, rb));
            prop_assert!(circles_overlap(a, ra, Vec2::new(ra + rb - 0.5, 0.0), rb));
        }

        #[test]
        fn rects_overlap_is_symmetric(
            x1 in -200.0f32..200.0, y1 in -200.0f32..200.0,
            w1 in 1.0f32..100.0, h1 in 1.0f32..100.0,
            x2 in -200.0f32..200.0, y2 in -200.0f32..200.0,
            w2 in 1.0f32..100.0, h2 in 1.0f32..100.0,
        ) {
            let r1 = Rect::new(x1, y1, w1, h1);
            let r2 = Rect::new(x2, y2, w2, h2);
            prop_assert_eq!(rects_overlap(&r1, &r2), rects_overlap(&r2, &r1));
        }
    }
}
