/// Mock graphics device for unit tests (no GPU required)
///
/// Records every command as a string so tests can assert on the exact
/// sequence of binds, blends and draws a render pass produced.

use std::sync::{Arc, Mutex};
use crate::error::{Error, Result};
use crate::engine_bail;
use crate::geometry::{Color, Quad};
use crate::graphics_device::{
    BlendMode, CommandList, FrameBuffer, FrameBufferDesc, GraphicsDevice,
    Pipeline, Texture, TextureInfo,
};

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
    pub label: String,
}

impl Texture for MockTexture {
    fn label(&self) -> &str {
        &self.label
    }

    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock FrameBuffer
// ============================================================================

pub struct MockFrameBuffer {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub color: Arc<dyn Texture>,
    /// Shared live counter, decremented on drop
    live: Arc<Mutex<usize>>,
}

impl FrameBuffer for MockFrameBuffer {
    fn label(&self) -> &str {
        &self.label
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_texture(&self) -> &Arc<dyn Texture> {
        &self.color
    }
}

impl Drop for MockFrameBuffer {
    fn drop(&mut self) {
        if let Ok(mut live) = self.live.lock() {
            *live -= 1;
        }
    }
}

// ============================================================================
// Mock Pipeline
// ============================================================================

#[derive(Debug)]
pub struct MockPipeline {
    pub label: String,
}

impl MockPipeline {
    pub fn new(label: &str) -> Arc<dyn Pipeline> {
        Arc::new(Self { label: label.to_string() })
    }
}

impl Pipeline for MockPipeline {
    fn label(&self) -> &str {
        &self.label
    }

    fn push_constant_size(&self) -> u32 {
        128
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

/// A recorded `draw_quad` call
#[derive(Debug, Clone)]
pub struct MockDraw {
    /// Label of the sampled texture, `None` for solid quads
    pub texture: Option<String>,
    /// Label of the destination, `None` for the screen
    pub destination: Option<String>,
    pub quad: Quad,
    pub tint: Color,
    pub blend: BlendMode,
}

#[derive(Debug, Default)]
pub struct MockCommandList {
    pub commands: Vec<String>,
    pub draws: Vec<MockDraw>,
    pub push_constant_data: Vec<Vec<u8>>,
    destinations: Vec<String>,
    blend: BlendMode,
}

impl MockCommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of textures drawn onto the screen, in draw order
    pub fn screen_draws(&self) -> Vec<String> {
        self.draws
            .iter()
            .filter(|d| d.destination.is_none())
            .filter_map(|d| d.texture.clone())
            .collect()
    }

    /// Number of commands matching `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
        self.draws.clear();
        self.push_constant_data.clear();
    }

    /// Number of frame buffers still bound
    pub fn binding_depth(&self) -> usize {
        self.destinations.len()
    }
}

impl CommandList for MockCommandList {
    fn bind_frame_buffer(&mut self, frame_buffer: &Arc<dyn FrameBuffer>) -> Result<()> {
        self.commands.push(format!("bind_frame_buffer:{}", frame_buffer.label()));
        self.destinations.push(frame_buffer.label().to_string());
        Ok(())
    }

    fn unbind_frame_buffer(&mut self) -> Result<()> {
        match self.destinations.pop() {
            Some(label) => {
                self.commands.push(format!("unbind_frame_buffer:{}", label));
                Ok(())
            }
            None => engine_bail!("prism::mock", "unbind_frame_buffer: nothing bound"),
        }
    }

    fn clear(&mut self, _color: Color) -> Result<()> {
        self.commands.push("clear".to_string());
        Ok(())
    }

    fn set_blend_mode(&mut self, mode: BlendMode) -> Result<()> {
        self.commands.push(format!("set_blend_mode:{:?}", mode));
        self.blend = mode;
        Ok(())
    }

    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()> {
        self.commands.push(format!("bind_pipeline:{}", pipeline.label()));
        Ok(())
    }

    fn unbind_pipeline(&mut self) -> Result<()> {
        self.commands.push("unbind_pipeline".to_string());
        Ok(())
    }

    fn push_constants(&mut self, offset: u32, data: &[u8]) -> Result<()> {
        self.commands.push(format!("push_constants:{}+{}", offset, data.len()));
        self.push_constant_data.push(data.to_vec());
        Ok(())
    }

    fn draw_quad(&mut self, texture: Option<&Arc<dyn Texture>>, quad: &Quad, tint: Color) -> Result<()> {
        let label = texture.map(|t| t.label().to_string());
        self.commands.push(format!(
            "draw_quad:{}",
            label.as_deref().unwrap_or("solid")
        ));
        self.draws.push(MockDraw {
            texture: label,
            destination: self.destinations.last().cloned(),
            quad: *quad,
            tint,
            blend: self.blend,
        });
        Ok(())
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that tracks created frame buffers without a GPU
pub struct MockGraphicsDevice {
    /// Labels of every frame buffer created, in creation order
    pub created: Arc<Mutex<Vec<String>>>,
    /// Frame buffers currently alive
    live: Arc<Mutex<usize>>,
    /// Fail with OutOfMemory once this many buffers are alive
    pub max_live: Option<usize>,
    next_id: usize,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            created: Arc::new(Mutex::new(Vec::new())),
            live: Arc::new(Mutex::new(0)),
            max_live: None,
            next_id: 0,
        }
    }

    /// Device whose allocations fail once `max_live` buffers exist
    pub fn with_limit(max_live: usize) -> Self {
        Self { max_live: Some(max_live), ..Self::new() }
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn live_count(&self) -> usize {
        *self.live.lock().unwrap()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_frame_buffer(&mut self, desc: &FrameBufferDesc) -> Result<Arc<dyn FrameBuffer>> {
        let mut live = self.live.lock().unwrap();
        if let Some(max) = self.max_live {
            if *live >= max {
                return Err(Error::OutOfMemory);
            }
        }
        *live += 1;

        let label = format!("{}#{}", desc.label, self.next_id);
        self.next_id += 1;
        self.created.lock().unwrap().push(label.clone());

        let color: Arc<dyn Texture> = Arc::new(MockTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
            },
            label: format!("{}.color", label),
        });
        Ok(Arc::new(MockFrameBuffer {
            label,
            width: desc.width,
            height: desc.height,
            color,
            live: self.live.clone(),
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
