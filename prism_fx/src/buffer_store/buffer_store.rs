/// BufferStore - one node's offscreen buffers, indexed by shader slot

use std::sync::{Arc, Mutex};
use glam::UVec2;
use rustc_hash::FxHashMap;
use crate::chain::ChainConfig;
use crate::error::{Error, Result};
use crate::graphics_device::{FrameBuffer, FrameBufferDesc, GraphicsDevice, TextureFormat};
use crate::shader::ShaderRef;
use crate::utils::SlotAllocator;
use crate::{engine_err, engine_error, engine_trace};
use super::BufferPool;

/// Handle of a shader's entry in the store, assigned at chain assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferSlot(u32);

impl BufferSlot {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ===== BUFFER STORE =====

/// Offscreen buffers of one node
///
/// Holds the base buffer (the node's content before any shader pass) and
/// at most one stored buffer per registered shader. Replacing or clearing
/// an entry releases the old buffer into the pool, or destroys it when the
/// pool is full. Owned by exactly one renderer; not shared between nodes.
pub struct BufferStore {
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    format: TextureFormat,
    size: UVec2,
    slots: SlotAllocator,
    /// Stored buffer per slot index
    buffers: Vec<Option<Arc<dyn FrameBuffer>>>,
    /// Registered shaders, kept alive while they own a slot
    shader_slots: FxHashMap<ShaderRef, BufferSlot>,
    /// Slots holding a buffer, in the order they were first stored
    order: Vec<BufferSlot>,
    base_buffer: Option<Arc<dyn FrameBuffer>>,
    pool: BufferPool,
    allocation_count: usize,
}

impl BufferStore {
    /// Create an empty store whose buffers are `size` pixels
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if `size` has a zero dimension.
    pub fn new(
        graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
        size: UVec2,
        config: &ChainConfig,
    ) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            graphics_device,
            format: config.format,
            size,
            slots: SlotAllocator::new(),
            buffers: Vec::new(),
            shader_slots: FxHashMap::default(),
            order: Vec::new(),
            base_buffer: None,
            pool: BufferPool::new(config.pool_capacity),
            allocation_count: 0,
        })
    }

    // ===== SLOTS =====

    /// Slot of `shader`, assigning a new one on first use
    pub fn register(&mut self, shader: &ShaderRef) -> BufferSlot {
        if let Some(slot) = self.shader_slots.get(shader) {
            return *slot;
        }
        let slot = BufferSlot(self.slots.acquire());
        if self.buffers.len() <= slot.index() {
            self.buffers.resize(slot.index() + 1, None);
        }
        self.shader_slots.insert(shader.clone(), slot);
        slot
    }

    pub fn slot_of(&self, shader: &ShaderRef) -> Option<BufferSlot> {
        self.shader_slots.get(shader).copied()
    }

    // ===== BUFFERS =====

    /// A buffer sized to the node's draw rectangle, owned by the caller until stored
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfMemory` when the device cannot allocate.
    pub fn allocate(&mut self) -> Result<Arc<dyn FrameBuffer>> {
        if let Some(buffer) = self.pool.take(self.size) {
            engine_trace!("prism::BufferStore", "Reusing pooled buffer '{}'", buffer.label());
            return Ok(buffer);
        }
        let buffer = self.create("prism.pass")?;
        engine_trace!("prism::BufferStore", "Allocated buffer '{}' ({}x{})",
            buffer.label(), self.size.x, self.size.y);
        Ok(buffer)
    }

    /// Buffer stored for `shader` in the current generation
    pub fn get(&self, shader: &ShaderRef) -> Option<&Arc<dyn FrameBuffer>> {
        self.slot_of(shader).and_then(|slot| self.get_slot(slot))
    }

    pub fn get_slot(&self, slot: BufferSlot) -> Option<&Arc<dyn FrameBuffer>> {
        self.buffers.get(slot.index()).and_then(|b| b.as_ref())
    }

    /// Store `buffer` for `shader`, releasing the buffer it replaces
    pub fn put(&mut self, shader: &ShaderRef, buffer: Arc<dyn FrameBuffer>) -> Result<BufferSlot> {
        let slot = self.register(shader);
        self.put_slot(slot, buffer)?;
        Ok(slot)
    }

    /// Store `buffer` under `slot`, releasing the buffer it replaces
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if `slot` was not registered.
    pub fn put_slot(&mut self, slot: BufferSlot, buffer: Arc<dyn FrameBuffer>) -> Result<()> {
        if !self.slots.is_live(slot.0) {
            engine_error!("prism::BufferStore", "put into unregistered slot {}", slot.0);
            return Err(Error::InvalidResource(format!("Buffer slot {} is not registered", slot.0)));
        }
        match self.buffers[slot.index()].replace(buffer) {
            Some(old) => self.release(old),
            None => self.order.push(slot),
        }
        Ok(())
    }

    /// Return a buffer to the pool, or destroy it if the pool cannot keep it
    pub fn release(&mut self, buffer: Arc<dyn FrameBuffer>) {
        if buffer.size() != self.size {
            return;
        }
        let label = buffer.label().to_string();
        if self.pool.put(buffer) {
            engine_trace!("prism::BufferStore", "Recycled buffer '{}'", label);
        }
    }

    /// Release every stored shader buffer and forget all slots
    ///
    /// The base buffer is untouched. Returns the number of buffers released.
    pub fn clear_all(&mut self) -> usize {
        let mut released = 0;
        for slot in std::mem::take(&mut self.order) {
            if let Some(buffer) = self.buffers[slot.index()].take() {
                self.release(buffer);
                released += 1;
            }
        }
        self.shader_slots.clear();
        self.slots.release_all();
        released
    }

    /// Stored buffers, in the order their slots were first filled
    pub fn buffers(&self) -> impl DoubleEndedIterator<Item = &Arc<dyn FrameBuffer>> + '_ {
        self.order.iter().filter_map(move |slot| self.get_slot(*slot))
    }

    // ===== BASE BUFFER =====

    /// The node's content before any shader pass, if rasterized yet
    pub fn current_base_buffer(&self) -> Option<&Arc<dyn FrameBuffer>> {
        self.base_buffer.as_ref()
    }

    /// The base buffer, created on first use or after a resize
    pub fn ensure_base_buffer(&mut self) -> Result<Arc<dyn FrameBuffer>> {
        match &self.base_buffer {
            Some(buffer) => Ok(buffer.clone()),
            None => {
                let buffer = self.create("prism.base")?;
                self.base_buffer = Some(buffer.clone());
                Ok(buffer)
            }
        }
    }

    // ===== SIZE =====

    /// Change the size of future buffers
    ///
    /// Pooled buffers and the base buffer are dropped; stored buffers stay
    /// until replaced.
    pub fn resize(&mut self, size: UVec2) -> Result<()> {
        check_size(size)?;
        if size == self.size {
            return Ok(());
        }
        engine_trace!("prism::BufferStore", "Resize {}x{} -> {}x{}",
            self.size.x, self.size.y, size.x, size.y);
        self.size = size;
        self.pool.clear();
        self.base_buffer = None;
        Ok(())
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Number of stored shader buffers
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of buffers created on the device so far (base buffers included)
    pub fn allocation_count(&self) -> usize {
        self.allocation_count
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    fn create(&mut self, label: &str) -> Result<Arc<dyn FrameBuffer>> {
        let desc = FrameBufferDesc {
            label: label.to_string(),
            width: self.size.x,
            height: self.size.y,
            format: self.format,
        };
        let buffer = {
            let mut device = self.graphics_device.lock()
                .map_err(|_| engine_err!("prism::BufferStore", "Graphics device lock poisoned"))?;
            device.create_frame_buffer(&desc)
        };
        match buffer {
            Ok(buffer) => {
                self.allocation_count += 1;
                Ok(buffer)
            }
            Err(err) => {
                engine_error!("prism::BufferStore", "Failed to allocate {}x{} buffer '{}': {}",
                    desc.width, desc.height, label, err);
                Err(err)
            }
        }
    }
}

fn check_size(size: UVec2) -> Result<()> {
    if size.x == 0 || size.y == 0 {
        engine_error!("prism::BufferStore", "Zero-sized buffer {}x{}", size.x, size.y);
        return Err(Error::InvalidResource(format!(
            "Buffer size {}x{} has a zero dimension",
            size.x, size.y
        )));
    }
    Ok(())
}
