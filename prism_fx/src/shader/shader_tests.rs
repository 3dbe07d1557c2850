/// Unit tests for shader capabilities, identity and the built-in shaders.

use super::*;
use crate::error::Error;
use crate::geometry::Rect;
use crate::graphics_device::{FrameBufferDesc, GraphicsDevice, TextureFormat};
use crate::graphics_device::mock_graphics_device::{
    MockCommandList, MockGraphicsDevice, MockPipeline,
};
use glam::Vec2;
use std::collections::HashSet;

fn plain(name: &str) -> ShaderRef {
    ShaderRef::new(PipelineShader::new(name, MockPipeline::new(name)))
}

/// Shader implementing no capability at all
struct Inert;

impl Shader for Inert {
    fn name(&self) -> &str {
        "inert"
    }
}

// ============================================================================
// Capabilities
// ============================================================================

#[test]
fn test_default_capabilities_are_empty() {
    assert_eq!(Inert.capabilities(), ShaderCapabilities::empty());
    assert!(Inert.as_bindable().is_none());
    assert!(Inert.as_multi_step().is_none());
}

#[test]
fn test_pipeline_shader_capabilities_follow_builders() {
    let base = PipelineShader::new("a", MockPipeline::new("a"));
    assert_eq!(base.capabilities(), ShaderCapabilities::BINDABLE);

    let full = PipelineShader::new("b", MockPipeline::new("b"))
        .with_source_parameters()
        .with_time()
        .with_padding(Vec2::splat(2.0));
    assert_eq!(
        full.capabilities(),
        ShaderCapabilities::BINDABLE
            | ShaderCapabilities::PARAMETERIZED
            | ShaderCapabilities::TIME_DRIVEN
            | ShaderCapabilities::BOUNDS_AFFECTING
    );
    assert!(!full.capabilities().contains(ShaderCapabilities::MULTI_STEP));
}

#[test]
fn test_step_sequence_is_multi_step_only() {
    let seq = StepSequence::new("seq", vec![plain("s1"), plain("s2")]).unwrap();
    assert_eq!(seq.capabilities(), ShaderCapabilities::MULTI_STEP);
    assert_eq!(seq.as_multi_step().unwrap().steps().len(), 2);
    assert!(seq.as_multi_step().unwrap().predecessor().is_none());
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_shader_ref_identity_not_structure() {
    let a = plain("same");
    let b = plain("same");
    let a2 = a.clone();

    assert_eq!(a, a2);
    assert_ne!(a, b);

    let set: HashSet<ShaderRef> = [a.clone(), a2, b].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_shader_ref_derefs_to_shader() {
    let a = plain("blur");
    assert_eq!(a.name(), "blur");
    assert_eq!(format!("{:?}", a), "ShaderRef(blur)");
}

#[test]
fn test_chain_identity_is_per_assignment() {
    let a = plain("a");
    let first = ShaderChain::new(vec![a.clone()]);
    let rebuilt = ShaderChain::new(vec![a]);
    let shared = first.clone();

    assert!(first.is_same(&shared));
    assert!(!first.is_same(&rebuilt));
    assert!(!ShaderChain::empty().is_same(&ShaderChain::empty()));
}

#[test]
fn test_chain_accessors() {
    let chain: ShaderChain = vec![plain("a"), plain("b")].into();
    assert_eq!(chain.len(), 2);
    assert!(!chain.is_empty());
    assert_eq!(chain.get(1).map(|s| s.name()), Some("b"));
    let names: Vec<&str> = chain.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!(ShaderChain::default().is_empty());
}

// ============================================================================
// StepSequence
// ============================================================================

#[test]
fn test_step_sequence_rejects_empty_steps() {
    match StepSequence::new("empty", Vec::new()) {
        Err(Error::InvalidResource(msg)) => assert!(msg.contains("'empty'")),
        _ => panic!("Expected InvalidResource"),
    }
}

#[test]
fn test_step_sequence_predecessor() {
    let blur = plain("blur");
    let seq = StepSequence::new("glow", vec![plain("g")])
        .unwrap()
        .with_predecessor(blur.clone());
    assert_eq!(seq.predecessor(), Some(&blur));
}

// ============================================================================
// PipelineShader
// ============================================================================

#[test]
fn test_bind_without_uniforms_skips_push_constants() {
    let shader = PipelineShader::new("flat", MockPipeline::new("flat"));
    let mut cmd = MockCommandList::new();

    shader.bind(&mut cmd).unwrap();
    shader.unbind(&mut cmd).unwrap();

    assert_eq!(cmd.commands, vec!["bind_pipeline:flat", "unbind_pipeline"]);
}

#[test]
fn test_derive_parameters_and_time_reach_push_constants() {
    let mut device = MockGraphicsDevice::new();
    let source = device
        .create_frame_buffer(&FrameBufferDesc {
            label: "src".to_string(),
            width: 4,
            height: 2,
            format: TextureFormat::R8G8B8A8_UNORM,
        })
        .unwrap();
    let shader = PipelineShader::new("wave", MockPipeline::new("wave"))
        .with_source_parameters()
        .with_time();

    shader.derive_parameters(source.as_ref());
    shader.apply_time(1.5);

    let uniforms = shader.uniforms();
    assert_eq!(uniforms.source_size, [4.0, 2.0]);
    assert_eq!(uniforms.texel_size, [0.25, 0.5]);
    assert_eq!(uniforms.time, 1.5);

    let mut cmd = MockCommandList::new();
    shader.bind(&mut cmd).unwrap();
    assert_eq!(cmd.count("push_constants:0+32"), 1);
    assert_eq!(cmd.push_constant_data[0], bytemuck::bytes_of(&uniforms).to_vec());
}

#[test]
fn test_padding_inflates_rectangle() {
    let shader = PipelineShader::new("shadow", MockPipeline::new("shadow"))
        .with_padding(Vec2::new(4.0, 2.0));
    let grown = shader.expand_rectangle(&Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(grown, Rect::new(-4.0, -2.0, 18.0, 14.0));
}
