//! Shader capability set
//!
//! A shader is an opaque, identity-compared handle that may implement any
//! subset of five capabilities: bindable, multi-step, parameterized,
//! time-driven and bounds-affecting. Capabilities are queried through
//! explicit `as_*` accessors and summarized once into `ShaderCapabilities`
//! when a chain is assigned, never per draw call.

mod capabilities;
mod shader;
mod shader_chain;
mod pipeline_shader;
mod step_sequence;

pub use capabilities::ShaderCapabilities;
pub use shader::{
    Shader, ShaderRef, Bindable, MultiStep, Parameterized, TimeDriven, BoundsAffecting,
};
pub use shader_chain::ShaderChain;
pub use pipeline_shader::{PipelineShader, PassUniforms};
pub use step_sequence::StepSequence;

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
