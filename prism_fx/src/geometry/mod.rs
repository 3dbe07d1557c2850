//! 2D geometry used for draw rectangles and screen-space quads
//!
//! Built on glam. Rectangles are axis-aligned in a node's local space;
//! quads are their (possibly rotated or sheared) screen-space images.

mod rect;
mod quad;
mod color;

pub use rect::Rect;
pub use quad::Quad;
pub use color::Color;

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
