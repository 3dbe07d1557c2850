/// PipelineShader - a single backend pipeline driven by push constants

use std::sync::{Arc, Mutex};
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use crate::engine_err;
use crate::error::Result;
use crate::geometry::Rect;
use crate::graphics_device::{CommandList, FrameBuffer, Pipeline};
use super::{Shader, Bindable, Parameterized, TimeDriven, BoundsAffecting};

/// Push constant block uploaded on every bind
///
/// Layout matches a std430 block of two vec2, one float and padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PassUniforms {
    /// 1 / source size in pixels
    pub texel_size: [f32; 2],
    /// Source size in pixels
    pub source_size: [f32; 2],
    /// Seconds since the owning node was created
    pub time: f32,
    pub _padding: [f32; 3],
}

/// Bindable shader wrapping one backend pipeline
///
/// Optional capabilities are switched on with the `with_*` builders:
///
/// ```no_run
/// # use prism_fx::prism::shader::{PipelineShader, ShaderRef};
/// # fn pipeline() -> std::sync::Arc<dyn prism_fx::prism::render::Pipeline> { unimplemented!() }
/// let ripple = ShaderRef::new(
///     PipelineShader::new("ripple", pipeline())
///         .with_source_parameters()
///         .with_time()
///         .with_padding(glam::Vec2::splat(8.0)),
/// );
/// ```
pub struct PipelineShader {
    name: String,
    pipeline: Arc<dyn Pipeline>,
    source_parameters: bool,
    time_driven: bool,
    padding: Option<Vec2>,
    uniforms: Mutex<PassUniforms>,
}

impl PipelineShader {
    pub fn new(name: &str, pipeline: Arc<dyn Pipeline>) -> Self {
        Self {
            name: name.to_string(),
            pipeline,
            source_parameters: false,
            time_driven: false,
            padding: None,
            uniforms: Mutex::new(PassUniforms::default()),
        }
    }

    /// Derive `texel_size`/`source_size` from the source buffer before each draw
    pub fn with_source_parameters(mut self) -> Self {
        self.source_parameters = true;
        self
    }

    /// Receive the node's elapsed time before each draw
    pub fn with_time(mut self) -> Self {
        self.time_driven = true;
        self
    }

    /// Draw up to `margin` outside the node's rectangle on each side
    pub fn with_padding(mut self, margin: Vec2) -> Self {
        self.padding = Some(margin);
        self
    }

    pub fn pipeline(&self) -> &Arc<dyn Pipeline> {
        &self.pipeline
    }

    /// Snapshot of the uniforms that the next bind will upload
    pub fn uniforms(&self) -> PassUniforms {
        self.uniforms.lock().map(|u| *u).unwrap_or_default()
    }

    fn uses_uniforms(&self) -> bool {
        self.source_parameters || self.time_driven
    }
}

impl Shader for PipelineShader {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_bindable(&self) -> Option<&dyn Bindable> {
        Some(self)
    }

    fn as_parameterized(&self) -> Option<&dyn Parameterized> {
        self.source_parameters.then_some(self as &dyn Parameterized)
    }

    fn as_time_driven(&self) -> Option<&dyn TimeDriven> {
        self.time_driven.then_some(self as &dyn TimeDriven)
    }

    fn as_bounds_affecting(&self) -> Option<&dyn BoundsAffecting> {
        self.padding.map(|_| self as &dyn BoundsAffecting)
    }
}

impl Bindable for PipelineShader {
    fn bind(&self, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.bind_pipeline(&self.pipeline)?;
        if self.uses_uniforms() {
            let uniforms = *self.uniforms.lock().map_err(|_| {
                engine_err!("prism::PipelineShader", "Uniforms of '{}' poisoned", self.name)
            })?;
            cmd.push_constants(0, bytemuck::bytes_of(&uniforms))?;
        }
        Ok(())
    }

    fn unbind(&self, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.unbind_pipeline()
    }
}

impl Parameterized for PipelineShader {
    fn derive_parameters(&self, source: &dyn FrameBuffer) {
        let size = source.size().as_vec2().max(Vec2::ONE);
        if let Ok(mut uniforms) = self.uniforms.lock() {
            uniforms.source_size = size.to_array();
            uniforms.texel_size = (Vec2::ONE / size).to_array();
        }
    }
}

impl TimeDriven for PipelineShader {
    fn apply_time(&self, elapsed_seconds: f32) {
        if let Ok(mut uniforms) = self.uniforms.lock() {
            uniforms.time = elapsed_seconds;
        }
    }
}

impl BoundsAffecting for PipelineShader {
    fn expand_rectangle(&self, rect: &Rect) -> Rect {
        match self.padding {
            Some(margin) => rect.inflate(margin),
            None => *rect,
        }
    }
}
