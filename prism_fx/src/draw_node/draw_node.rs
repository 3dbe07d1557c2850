/// DrawNode trait and the solid quad leaf

use crate::error::Result;
use crate::geometry::{Color, Quad};
use crate::graphics_device::CommandList;

/// A node of the draw tree
pub trait DrawNode: Send {
    /// Record this node's commands into the active destination
    fn draw(&mut self, cmd: &mut dyn CommandList) -> Result<()>;

    /// Child nodes, for traversal by the owner of the tree
    fn children(&self) -> &[Box<dyn DrawNode>] {
        &[]
    }

    /// Whether drawing this frame has to re-render cached content
    ///
    /// Parents use it to decide whether the children take part in the pass.
    fn needs_redraw(&self) -> bool {
        false
    }
}

/// Solid colored quad
#[derive(Debug, Clone, Copy)]
pub struct QuadDrawNode {
    pub quad: Quad,
    pub color: Color,
}

impl QuadDrawNode {
    pub fn new(quad: Quad, color: Color) -> Self {
        Self { quad, color }
    }
}

impl DrawNode for QuadDrawNode {
    fn draw(&mut self, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.draw_quad(None, &self.quad, self.color)
    }
}
