/// Effective bounds of a node whose shaders draw outside its rectangle.

use glam::Affine2;
use crate::geometry::{Quad, Rect};
use crate::shader::ShaderRef;

/// Folds bounds-affecting shaders over a node's natural rectangle
///
/// Each shader receives the rectangle accumulated so far and the result
/// is unioned into it. Steps of multi-step shaders take part too.
///
/// ```ignore
/// let rect = DrawRectAggregator::new(natural)
///     .expand_with(sub_element_shaders)
///     .expand_with(node_chain.iter())
///     .rect();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DrawRectAggregator {
    rect: Rect,
}

impl DrawRectAggregator {
    pub fn new(natural: Rect) -> Self {
        Self { rect: natural }
    }

    /// Fold one group of shaders into the rectangle
    pub fn expand_with<'a, I>(mut self, shaders: I) -> Self
    where
        I: IntoIterator<Item = &'a ShaderRef>,
    {
        for shader in shaders {
            self.rect = expand(self.rect, shader);
        }
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The accumulated rectangle in screen space
    pub fn to_screen(&self, transform: &Affine2) -> Quad {
        Quad::from_rect_transformed(&self.rect, transform)
    }
}

fn expand(rect: Rect, shader: &ShaderRef) -> Rect {
    let mut acc = rect;
    if let Some(bounds) = shader.as_bounds_affecting() {
        acc = acc.union(&bounds.expand_rectangle(&acc));
    }
    if let Some(multi_step) = shader.as_multi_step() {
        for step in multi_step.steps() {
            acc = expand(acc, step);
        }
    }
    acc
}
