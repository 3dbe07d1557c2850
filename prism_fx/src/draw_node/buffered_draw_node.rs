/// BufferedDrawNode - rasterizes child nodes into an offscreen base buffer

use std::sync::Arc;
use crate::buffer_store::BufferStore;
use crate::error::Result;
use crate::geometry::{Color, Quad, Rect};
use crate::graphics_device::{CommandList, FrameBuffer};
use super::{DrawNode, DrawVersion};

/// Base machinery shared by nodes that draw through offscreen buffers
///
/// Owns the node's `BufferStore`, its children, its local draw rectangle
/// (which sizes every buffer), its screen-space quad and its draw version.
pub struct BufferedDrawNode {
    store: BufferStore,
    children: Vec<Box<dyn DrawNode>>,
    draw_rect: Rect,
    screen_quad: Quad,
    content_version: u64,
    draw_version: DrawVersion,
    clear_color: Color,
}

impl BufferedDrawNode {
    pub fn new(store: BufferStore, clear_color: Color) -> Self {
        let draw_rect = Rect::from_size(store.size().as_vec2());
        Self {
            store,
            children: Vec::new(),
            draw_rect,
            screen_quad: Quad::from_rect(&draw_rect),
            content_version: 0,
            draw_version: DrawVersion::new(),
            clear_color,
        }
    }

    pub fn store(&self) -> &BufferStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BufferStore {
        &mut self.store
    }

    pub fn children(&self) -> &[Box<dyn DrawNode>] {
        &self.children
    }

    pub fn set_children(&mut self, children: Vec<Box<dyn DrawNode>>) {
        self.children = children;
    }

    pub fn draw_rect(&self) -> &Rect {
        &self.draw_rect
    }

    /// Set the local draw rectangle, resizing the store to cover it
    pub fn set_draw_rect(&mut self, draw_rect: Rect) -> Result<()> {
        self.store.resize(draw_rect.pixel_size())?;
        self.draw_rect = draw_rect;
        Ok(())
    }

    pub fn screen_quad(&self) -> &Quad {
        &self.screen_quad
    }

    pub fn set_screen_quad(&mut self, quad: Quad) {
        self.screen_quad = quad;
    }

    pub fn content_version(&self) -> u64 {
        self.content_version
    }

    pub fn set_content_version(&mut self, version: u64) {
        self.content_version = version;
    }

    pub fn draw_version(&self) -> &DrawVersion {
        &self.draw_version
    }

    pub fn draw_version_mut(&mut self) -> &mut DrawVersion {
        &mut self.draw_version
    }

    /// Whether the cached buffers are older than the content
    pub fn requires_redraw(&self) -> bool {
        !self.draw_version.is_current(self.content_version)
    }

    /// Record that the buffers now match the current content version
    pub fn mark_populated(&mut self) {
        self.draw_version.mark_populated(self.content_version);
    }

    /// Clear the base buffer and draw every child into it
    ///
    /// The previous destination is restored even if a child fails.
    pub fn rasterize_base(&mut self, cmd: &mut dyn CommandList) -> Result<Arc<dyn FrameBuffer>> {
        let base = self.store.ensure_base_buffer()?;
        cmd.bind_frame_buffer(&base)?;
        let drawn = self.draw_children(cmd);
        cmd.unbind_frame_buffer()?;
        drawn?;
        Ok(base)
    }

    fn draw_children(&mut self, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.clear(self.clear_color)?;
        for child in &mut self.children {
            child.draw(cmd)?;
        }
        Ok(())
    }
}
