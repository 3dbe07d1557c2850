/// EffectNode - content rendered through a shader chain

use std::sync::{Arc, Mutex};
use glam::Affine2;
use crate::buffer_store::BufferStore;
use crate::chain::{ChainConfig, ChainRenderer};
use crate::error::Result;
use crate::geometry::{Quad, Rect};
use crate::graphics_device::GraphicsDevice;
use crate::shader::ShaderChain;
use crate::time::Clock;
use super::{ContentSource, DrawRectAggregator};

/// Scene node whose content is post-processed by a shader chain
///
/// Every change to what the node draws (rectangle, chain, sources) bumps
/// its content version; its `ChainRenderer` repopulates when it sees a
/// version it has not rendered yet.
pub struct EffectNode {
    name: String,
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    clock: Arc<dyn Clock>,
    config: ChainConfig,
    /// Clock time at creation, in milliseconds
    load_time_ms: f64,
    draw_rect: Rect,
    /// Node-local to screen space
    transform: Affine2,
    shaders: ShaderChain,
    sources: Vec<Arc<dyn ContentSource>>,
    version: u64,
}

impl EffectNode {
    pub fn new(
        name: &str,
        draw_rect: Rect,
        graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
        clock: Arc<dyn Clock>,
        config: ChainConfig,
    ) -> Self {
        let load_time_ms = clock.now_ms();
        Self {
            name: name.to_string(),
            graphics_device,
            clock,
            config,
            load_time_ms,
            draw_rect,
            transform: Affine2::IDENTITY,
            shaders: ShaderChain::empty(),
            sources: Vec::new(),
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn load_time_ms(&self) -> f64 {
        self.load_time_ms
    }

    /// Seconds since the node was created
    pub fn elapsed_seconds(&self) -> f32 {
        ((self.clock.now_ms() - self.load_time_ms) / 1000.0) as f32
    }

    /// Natural rectangle, before any shader expands it
    pub fn draw_rect(&self) -> &Rect {
        &self.draw_rect
    }

    pub fn set_draw_rect(&mut self, draw_rect: Rect) {
        self.draw_rect = draw_rect;
        self.invalidate();
    }

    pub fn transform(&self) -> &Affine2 {
        &self.transform
    }

    /// Placement only: cached buffers stay valid
    pub fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
    }

    pub fn shaders(&self) -> &ShaderChain {
        &self.shaders
    }

    /// Assign a new chain; even the same shaders in a new chain clear the cached buffers
    pub fn set_shaders(&mut self, shaders: impl Into<ShaderChain>) {
        self.shaders = shaders.into();
        self.invalidate();
    }

    pub fn sources(&self) -> &[Arc<dyn ContentSource>] {
        &self.sources
    }

    pub fn add_source(&mut self, source: Arc<dyn ContentSource>) {
        self.sources.push(source);
        self.invalidate();
    }

    /// Mark the content as changed
    pub fn invalidate(&mut self) {
        self.version += 1;
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Natural rectangle grown by every bounds-affecting shader
    pub fn local_draw_rect(&self) -> Rect {
        self.aggregate_bounds().rect()
    }

    /// Effective draw quad in screen space (hit-testing and clipping)
    pub fn compute_screen_space_draw_quad(&self) -> Quad {
        self.aggregate_bounds().to_screen(&self.transform)
    }

    /// Sub-element shaders are folded first, then the node's own chain in
    /// the already expanded space.
    fn aggregate_bounds(&self) -> DrawRectAggregator {
        DrawRectAggregator::new(self.draw_rect)
            .expand_with(self.sources.iter().flat_map(|source| source.shaders()))
            .expand_with(self.shaders.iter())
    }

    /// Renderer for this node, owning a fresh buffer store
    pub fn create_draw_node(&self) -> Result<ChainRenderer> {
        let store = BufferStore::new(
            self.graphics_device.clone(),
            self.local_draw_rect().pixel_size(),
            &self.config,
        )?;
        Ok(ChainRenderer::new(
            &self.name,
            store,
            &self.config,
            self.clock.clone(),
            self.load_time_ms,
        ))
    }
}
