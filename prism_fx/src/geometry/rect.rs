use glam::{UVec2, Vec2};

/// Axis-aligned rectangle (top-left origin, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height, both non-negative
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_min_size(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Rectangle at the origin
    pub fn from_size(size: Vec2) -> Self {
        Self::from_min_size(Vec2::ZERO, size)
    }

    /// Negative extents are folded so that `size` is never negative.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        let max = min + size;
        Self::from_corners(min, max)
    }

    /// Smallest rectangle containing both points
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self { min, size: max - min }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Smallest rectangle containing both `self` and `other`.
    ///
    /// Empty rectangles do not contribute.
    pub fn union(&self, other: &Rect) -> Rect {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Rect::from_corners(self.min.min(other.min), self.max().max(other.max()))
    }

    /// Grow by `margin` on every side (shrinks for negative margins, never below zero)
    pub fn inflate(&self, margin: Vec2) -> Rect {
        let size = (self.size + margin * 2.0).max(Vec2::ZERO);
        Rect { min: self.min - margin, size }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max()).all()
    }

    /// Pixel dimensions of an offscreen buffer covering this rectangle.
    ///
    /// Rounded up, at least 1x1.
    pub fn pixel_size(&self) -> UVec2 {
        let w = self.size.x.ceil().max(1.0) as u32;
        let h = self.size.y.ceil().max(1.0) as u32;
        UVec2::new(w, h)
    }
}
