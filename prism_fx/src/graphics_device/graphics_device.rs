/// GraphicsDevice trait - factory for offscreen buffers

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::{FrameBuffer, FrameBufferDesc};

/// Graphics device trait
///
/// Factory interface for GPU resources needed by buffered draw nodes.
/// Implemented by backend-specific devices. Dropping the last `Arc` of
/// a created resource releases its GPU memory.
pub trait GraphicsDevice: Send + Sync {
    /// Create an offscreen frame buffer with one color attachment
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfMemory` when the backend cannot satisfy the
    /// allocation, `Error::BackendError` for any other backend failure.
    fn create_frame_buffer(&mut self, desc: &FrameBufferDesc) -> Result<Arc<dyn FrameBuffer>>;
}
