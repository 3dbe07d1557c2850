/// Bounded pool of released offscreen buffers

use std::sync::Arc;
use glam::UVec2;
use crate::graphics_device::FrameBuffer;

/// Keeps up to `capacity` released buffers for reuse by later allocations.
///
/// Only buffers nobody else references are kept; anything else is simply
/// dropped, which frees it once its last holder lets go.
pub struct BufferPool {
    capacity: usize,
    free: Vec<Arc<dyn FrameBuffer>>,
}

impl BufferPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            free: Vec::with_capacity(capacity),
        }
    }

    /// Take a pooled buffer of exactly `size`
    pub fn take(&mut self, size: UVec2) -> Option<Arc<dyn FrameBuffer>> {
        let index = self.free.iter().position(|b| b.size() == size)?;
        Some(self.free.swap_remove(index))
    }

    /// Offer a released buffer; returns whether it was kept
    pub fn put(&mut self, buffer: Arc<dyn FrameBuffer>) -> bool {
        if self.free.len() >= self.capacity || Arc::strong_count(&buffer) != 1 {
            return false;
        }
        self.free.push(buffer);
        true
    }

    /// Destroy every pooled buffer
    pub fn clear(&mut self) {
        self.free.clear();
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
