/// Per-node configuration of the shader chain renderer

use crate::geometry::Color;
use crate::graphics_device::TextureFormat;

/// Source of a pass that declares no predecessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassSource {
    /// Every such pass reads the node's rasterized content
    #[default]
    BaseBuffer,
    /// Each pass reads the output of the pass before it (the first reads the base buffer)
    PreviousPass,
}

/// Configuration passed to an effect node on creation
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Format of every offscreen buffer
    pub format: TextureFormat,
    /// Clear value of the base buffer before content is rasterized
    pub clear_color: Color,
    /// Released buffers kept for reuse (0 destroys them immediately)
    pub pool_capacity: usize,
    pub default_source: PassSource,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            format: TextureFormat::default(),
            clear_color: Color::TRANSPARENT,
            pool_capacity: 4,
            default_source: PassSource::default(),
        }
    }
}
