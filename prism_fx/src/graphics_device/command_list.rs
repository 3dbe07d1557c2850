/// CommandList trait - for recording draw commands

use std::sync::Arc;
use crate::error::Result;
use crate::geometry::{Color, Quad};
use crate::graphics_device::{FrameBuffer, Pipeline, Texture};

/// How drawn fragments combine with the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Overwrite the destination (no blending)
    Disabled,
    /// Premultiplied alpha "over" compositing
    #[default]
    Alpha,
    /// Add source to destination
    Additive,
}

/// Command list for recording draw commands
///
/// Draw destinations form a stack: `bind_frame_buffer` pushes an offscreen
/// destination and `unbind_frame_buffer` returns to whatever was bound
/// before (ultimately the backend's screen target).
pub trait CommandList: Send + Sync {
    /// Make `frame_buffer` the active render destination
    fn bind_frame_buffer(&mut self, frame_buffer: &Arc<dyn FrameBuffer>) -> Result<()>;

    /// Restore the previously bound render destination
    fn unbind_frame_buffer(&mut self) -> Result<()>;

    /// Clear the active render destination
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Set the blend mode used by subsequent draws
    fn set_blend_mode(&mut self, mode: BlendMode) -> Result<()>;

    /// Blend mode currently in effect
    fn blend_mode(&self) -> BlendMode;

    /// Bind a pipeline for subsequent draws
    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()>;

    /// Return to the default textured-quad pipeline
    fn unbind_pipeline(&mut self) -> Result<()>;

    /// Upload push constants to the bound pipeline
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset in bytes into the push constant range
    /// * `data` - Bytes to upload
    fn push_constants(&mut self, offset: u32, data: &[u8]) -> Result<()>;

    /// Draw a quad, sampling `texture` across it (or a solid quad when `None`)
    ///
    /// The texture is sampled over its full extent; `tint` multiplies it.
    fn draw_quad(&mut self, texture: Option<&Arc<dyn Texture>>, quad: &Quad, tint: Color) -> Result<()>;
}
