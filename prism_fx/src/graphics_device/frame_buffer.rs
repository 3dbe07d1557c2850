/// FrameBuffer trait - an offscreen render destination
///
/// A frame buffer owns one color texture. It is bound as the render
/// destination while a pass writes into it, and its color texture is
/// sampled by later passes or drawn onto the parent destination.

use std::sync::Arc;
use glam::UVec2;
use crate::graphics_device::{Texture, TextureFormat};

/// Offscreen frame buffer
///
/// Created via `GraphicsDevice::create_frame_buffer()`.
pub trait FrameBuffer: Send + Sync {
    /// Debug label
    fn label(&self) -> &str;

    /// Get the width in pixels
    fn width(&self) -> u32;

    /// Get the height in pixels
    fn height(&self) -> u32;

    /// Color attachment, sampled when this buffer is used as a pass source
    fn color_texture(&self) -> &Arc<dyn Texture>;

    /// Width and height in pixels
    fn size(&self) -> UVec2 {
        UVec2::new(self.width(), self.height())
    }
}

/// Descriptor for creating a frame buffer
#[derive(Debug, Clone)]
pub struct FrameBufferDesc {
    /// Debug label
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color attachment format
    pub format: TextureFormat,
}
