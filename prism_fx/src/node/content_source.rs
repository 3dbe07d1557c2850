/// Content drawn into an effect node's base buffer

use glam::Vec2;
use crate::draw_node::{DrawNode, QuadDrawNode};
use crate::geometry::{Color, Quad, Rect};
use crate::shader::ShaderRef;

/// A sub-element of an effect node
pub trait ContentSource: Send + Sync {
    /// Draw node rendering this content into the node's base buffer
    ///
    /// `origin` is the node-local position of the buffer's top-left pixel.
    fn create_draw_node(&self, origin: Vec2) -> Box<dyn DrawNode>;

    /// Shaders attached to this content, consulted for the node's bounds
    fn shaders(&self) -> &[ShaderRef] {
        &[]
    }
}

/// Solid colored rectangle in node-local coordinates
#[derive(Debug, Clone)]
pub struct SolidContent {
    rect: Rect,
    color: Color,
    shaders: Vec<ShaderRef>,
}

impl SolidContent {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            shaders: Vec::new(),
        }
    }

    pub fn with_shaders(mut self, shaders: Vec<ShaderRef>) -> Self {
        self.shaders = shaders;
        self
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl ContentSource for SolidContent {
    fn create_draw_node(&self, origin: Vec2) -> Box<dyn DrawNode> {
        let local = Rect::from_min_size(self.rect.min - origin, self.rect.size);
        Box::new(QuadDrawNode::new(Quad::from_rect(&local), self.color))
    }

    fn shaders(&self) -> &[ShaderRef] {
        &self.shaders
    }
}
