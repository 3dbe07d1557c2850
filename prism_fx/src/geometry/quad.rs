use glam::{Affine2, Vec2};
use super::Rect;

/// Four screen-space corners of a transformed rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quad {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl Quad {
    /// Untransformed quad covering `rect`
    pub fn from_rect(rect: &Rect) -> Self {
        let min = rect.min;
        let max = rect.max();
        Self {
            top_left: min,
            top_right: Vec2::new(max.x, min.y),
            bottom_left: Vec2::new(min.x, max.y),
            bottom_right: max,
        }
    }

    /// Transform every corner of `rect` by `transform`
    pub fn from_rect_transformed(rect: &Rect, transform: &Affine2) -> Self {
        let quad = Self::from_rect(rect);
        Self {
            top_left: transform.transform_point2(quad.top_left),
            top_right: transform.transform_point2(quad.top_right),
            bottom_left: transform.transform_point2(quad.bottom_left),
            bottom_right: transform.transform_point2(quad.bottom_right),
        }
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }

    /// Axis-aligned bounds of the four corners
    pub fn bounds(&self) -> Rect {
        let corners = self.corners();
        let mut min = corners[0];
        let mut max = corners[0];
        for corner in &corners[1..] {
            min = min.min(*corner);
            max = max.max(*corner);
        }
        Rect::from_corners(min, max)
    }

    /// Corner-wise comparison with tolerance
    pub fn abs_diff_eq(&self, other: &Quad, max_abs_diff: f32) -> bool {
        self.corners()
            .iter()
            .zip(other.corners().iter())
            .all(|(a, b)| a.abs_diff_eq(*b, max_abs_diff))
    }
}
