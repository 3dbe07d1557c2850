/// ChainRenderer - runs a node's shader chain and composites its buffers

use std::sync::Arc;
use rustc_hash::FxHashSet;
use crate::buffer_store::{BufferSlot, BufferStore};
use crate::draw_node::{BufferedDrawNode, DrawNode};
use crate::error::{Error, Result};
use crate::geometry::{Color, Quad, Rect};
use crate::graphics_device::{BlendMode, CommandList, FrameBuffer};
use crate::node::EffectNode;
use crate::shader::{ShaderCapabilities, ShaderChain};
use crate::time::Clock;
use crate::{engine_debug, engine_error, engine_trace};
use super::{ChainConfig, CompiledChain, CompiledEntry, CompiledStep, PassSource, PredecessorLink};

/// Counters of the renderer's populate passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainStats {
    /// Populate passes that ran (skipped, cached frames excluded)
    pub populate_count: u64,
    /// Chain elements rendered by the last populate pass
    pub last_passes: usize,
    /// Shader executions of the last populate pass
    pub last_steps: usize,
}

/// Draw node rendering an effect node through its shader chain
///
/// Per frame the owner calls `apply_state`, then draws the node (which
/// populates the buffers if they are stale and composites them):
///
/// ```ignore
/// renderer.apply_state(&node)?;
/// renderer.draw(&mut cmd)?;
/// ```
///
/// Populate renders the chain front to back: each pass reads its source
/// buffer and writes a newly allocated target stored under the shader's
/// slot. Drawing composites the stored buffers back to front onto the
/// node's screen quad.
pub struct ChainRenderer {
    name: String,
    base: BufferedDrawNode,
    chain: ShaderChain,
    compiled: CompiledChain,
    /// Content version of the node when sources were last turned into children
    applied_version: Option<u64>,
    default_source: PassSource,
    clock: Arc<dyn Clock>,
    load_time_ms: f64,
    stats: ChainStats,
}

impl ChainRenderer {
    /// Create a renderer owning `store`
    ///
    /// `load_time_ms` is the node's creation time on `clock`; time-driven
    /// shaders receive the seconds elapsed since then.
    pub fn new(
        name: &str,
        store: BufferStore,
        config: &ChainConfig,
        clock: Arc<dyn Clock>,
        load_time_ms: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            base: BufferedDrawNode::new(store, config.clear_color),
            chain: ShaderChain::empty(),
            compiled: CompiledChain::empty(),
            applied_version: None,
            default_source: config.default_source,
            clock,
            load_time_ms,
            stats: ChainStats::default(),
        }
    }

    // ===== APPLY STATE =====

    /// Pull the node's current state; called once per frame before drawing
    ///
    /// A chain that is not the same sequence as the captured one clears
    /// every stored buffer and is recompiled. A time-driven chain forces
    /// the next populate regardless of the content version.
    pub fn apply_state(&mut self, node: &EffectNode) -> Result<()> {
        if !self.chain.is_same(node.shaders()) {
            self.assign_chain(node.shaders().clone());
        }

        if self.applied_version != Some(node.version()) {
            let draw_rect = node.local_draw_rect();
            self.base.set_draw_rect(draw_rect)?;
            let children = node
                .sources()
                .iter()
                .map(|source| source.create_draw_node(draw_rect.min))
                .collect();
            self.base.set_children(children);
            self.base.set_content_version(node.version());
            self.applied_version = Some(node.version());
        }
        self.base.set_screen_quad(node.compute_screen_space_draw_quad());

        if self.compiled.needs_force_redraw() {
            engine_trace!("prism::ChainRenderer", "'{}' has time-driven shaders, forcing redraw", self.name);
            self.base.draw_version_mut().force_refresh();
        }
        Ok(())
    }

    fn assign_chain(&mut self, chain: ShaderChain) {
        let released = self.base.store_mut().clear_all();
        self.compiled = CompiledChain::compile(&chain, self.base.store_mut());
        self.chain = chain;
        self.base.draw_version_mut().force_refresh();

        engine_debug!("prism::ChainRenderer",
            "Shader chain of '{}' changed: {} shader(s), {} buffer(s) released",
            self.name, self.chain.len(), released);
        if self.chain.is_empty() {
            engine_debug!("prism::ChainRenderer", "'{}' has no shaders, drawing base buffer", self.name);
        }
    }

    // ===== POPULATE =====

    /// Re-render the base buffer and every pass if the cached buffers are stale
    ///
    /// Returns whether anything was rendered. On error the buffers stay
    /// stale so the next frame retries; targets not yet stored are dropped.
    ///
    /// # Errors
    ///
    /// `Error::UnresolvedPredecessor` when a pass reads a predecessor that
    /// has not rendered earlier in this populate pass, `Error::OutOfMemory`
    /// when a buffer cannot be allocated, and any command list error.
    pub fn populate_contents(&mut self, cmd: &mut dyn CommandList) -> Result<bool> {
        if !self.base.requires_redraw() {
            return Ok(false);
        }

        let base = self.base.rasterize_base(cmd)?;
        let elapsed_seconds = ((self.clock.now_ms() - self.load_time_ms) / 1000.0) as f32;

        let mut rendered = vec![false; self.compiled.len()];
        let mut previous = base.clone();
        for (index, entry) in self.compiled.entries().iter().enumerate() {
            let source = self.resolve_source(entry, &rendered, &base, &previous)?;
            let store = self.base.store_mut();
            let target = store.allocate()?;

            engine_trace!("prism::ChainRenderer", "'{}' pass {} '{}' ({} step(s))",
                self.name, index, entry.shader.name(), entry.steps.len());
            run_pass(store, cmd, entry, &source, &target, elapsed_seconds)?;

            store.put_slot(entry.slot, target.clone())?;
            rendered[index] = true;
            previous = target;
        }

        self.base.mark_populated();
        self.stats.populate_count += 1;
        self.stats.last_passes = self.compiled.len();
        self.stats.last_steps = self.compiled.step_count();
        Ok(true)
    }

    /// Source buffer of a pass
    ///
    /// `rendered[i]` is whether entry `i` stored its buffer during this pass.
    fn resolve_source(
        &self,
        entry: &CompiledEntry,
        rendered: &[bool],
        base: &Arc<dyn FrameBuffer>,
        previous: &Arc<dyn FrameBuffer>,
    ) -> Result<Arc<dyn FrameBuffer>> {
        let slot = match &entry.predecessor {
            PredecessorLink::None => {
                return Ok(match self.default_source {
                    PassSource::BaseBuffer => base.clone(),
                    PassSource::PreviousPass => previous.clone(),
                });
            }
            PredecessorLink::Resolved(slot) => *slot,
            PredecessorLink::Missing(predecessor) => {
                return Err(self.unresolved(entry, predecessor));
            }
        };

        let stored_this_pass = self
            .compiled
            .entries()
            .iter()
            .zip(rendered)
            .any(|(e, done)| e.slot == slot && *done);
        match self.base.store().get_slot(slot) {
            Some(buffer) if stored_this_pass => Ok(buffer.clone()),
            _ => {
                let predecessor = self.chain_name_of(slot);
                Err(self.unresolved(entry, &predecessor))
            }
        }
    }

    fn chain_name_of(&self, slot: BufferSlot) -> String {
        self.compiled
            .entries()
            .iter()
            .find(|e| e.slot == slot)
            .map(|e| e.shader.name().to_string())
            .unwrap_or_default()
    }

    fn unresolved(&self, entry: &CompiledEntry, predecessor: &str) -> Error {
        engine_error!("prism::ChainRenderer",
            "'{}': shader '{}' reads predecessor '{}' which has not rendered in this pass",
            self.name, entry.shader.name(), predecessor);
        Error::UnresolvedPredecessor {
            shader: entry.shader.name().to_string(),
            predecessor: predecessor.to_string(),
        }
    }

    // ===== DRAW =====

    /// Composite the stored buffers onto the node's screen quad
    ///
    /// Buffers are drawn in reverse chain order with the caller's blend
    /// mode, each stored buffer once even when its shader appears several
    /// times in the chain. Without stored buffers the base buffer is drawn
    /// instead.
    pub fn draw_contents(&self, cmd: &mut dyn CommandList) -> Result<()> {
        let store = self.base.store();
        let quad = self.base.screen_quad();

        let mut drawn: FxHashSet<BufferSlot> = FxHashSet::default();
        for entry in self.compiled.entries().iter().rev() {
            if drawn.contains(&entry.slot) {
                continue;
            }
            if let Some(buffer) = store.get_slot(entry.slot) {
                cmd.draw_quad(Some(buffer.color_texture()), quad, Color::WHITE)?;
                drawn.insert(entry.slot);
            }
        }
        if drawn.is_empty() {
            if let Some(base) = store.current_base_buffer() {
                cmd.draw_quad(Some(base.color_texture()), quad, Color::WHITE)?;
            }
        }
        Ok(())
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chain captured by the last `apply_state`
    pub fn chain(&self) -> &ShaderChain {
        &self.chain
    }

    pub fn compiled(&self) -> &CompiledChain {
        &self.compiled
    }

    pub fn store(&self) -> &BufferStore {
        self.base.store()
    }

    pub fn buffered(&self) -> &BufferedDrawNode {
        &self.base
    }

    pub fn stats(&self) -> ChainStats {
        self.stats
    }

    /// Make the next frame repopulate even if nothing changed
    pub fn force_refresh(&mut self) {
        self.base.draw_version_mut().force_refresh();
    }
}

impl DrawNode for ChainRenderer {
    fn draw(&mut self, cmd: &mut dyn CommandList) -> Result<()> {
        self.populate_contents(cmd)?;
        self.draw_contents(cmd)
    }

    fn children(&self) -> &[Box<dyn DrawNode>] {
        self.base.children()
    }

    fn needs_redraw(&self) -> bool {
        self.base.requires_redraw()
    }
}

// ===== PASS EXECUTION =====

/// Run every step of `entry`, reading `source` and leaving the result in `target`
///
/// Several steps ping-pong between `target` and one scratch buffer,
/// arranged so that the last step writes `target`.
fn run_pass(
    store: &mut BufferStore,
    cmd: &mut dyn CommandList,
    entry: &CompiledEntry,
    source: &Arc<dyn FrameBuffer>,
    target: &Arc<dyn FrameBuffer>,
    elapsed_seconds: f32,
) -> Result<()> {
    let count = entry.steps.len();
    if count == 0 {
        engine_error!("prism::ChainRenderer", "Shader '{}' has no steps", entry.shader.name());
        return Err(Error::InvalidResource(format!(
            "Shader '{}' has no steps",
            entry.shader.name()
        )));
    }

    let scratch = if count > 1 { Some(store.allocate()?) } else { None };
    let mut input = source.clone();
    let mut result = Ok(());
    for (index, step) in entry.steps.iter().enumerate() {
        let output = match &scratch {
            Some(scratch) if (count - 1 - index) % 2 == 1 => scratch,
            _ => target,
        };
        result = run_step(cmd, step, &input, output, elapsed_seconds);
        if result.is_err() {
            break;
        }
        input = output.clone();
    }
    drop(input);
    if let Some(scratch) = scratch {
        store.release(scratch);
    }
    result
}

/// One shader execution: draw `source` into `target` through `step`
fn run_step(
    cmd: &mut dyn CommandList,
    step: &CompiledStep,
    source: &Arc<dyn FrameBuffer>,
    target: &Arc<dyn FrameBuffer>,
    elapsed_seconds: f32,
) -> Result<()> {
    cmd.bind_frame_buffer(target)?;
    let drawn = draw_step(cmd, step, source, elapsed_seconds);
    cmd.unbind_frame_buffer()?;
    drawn
}

fn draw_step(
    cmd: &mut dyn CommandList,
    step: &CompiledStep,
    source: &Arc<dyn FrameBuffer>,
    elapsed_seconds: f32,
) -> Result<()> {
    let caps = step.capabilities;
    if caps.contains(ShaderCapabilities::PARAMETERIZED) {
        if let Some(parameterized) = step.shader.as_parameterized() {
            parameterized.derive_parameters(source.as_ref());
        }
    }
    if caps.contains(ShaderCapabilities::TIME_DRIVEN) {
        if let Some(time_driven) = step.shader.as_time_driven() {
            time_driven.apply_time(elapsed_seconds);
        }
    }
    let bindable = if caps.contains(ShaderCapabilities::BINDABLE) {
        step.shader.as_bindable()
    } else {
        None
    };
    if let Some(bindable) = bindable {
        bindable.bind(cmd)?;
    }

    let source_rect = Rect::from_size(source.size().as_vec2());
    let saved_blend = cmd.blend_mode();
    cmd.set_blend_mode(BlendMode::Disabled)?;
    let drawn = cmd.draw_quad(Some(source.color_texture()), &Quad::from_rect(&source_rect), Color::WHITE);
    cmd.set_blend_mode(saved_blend)?;

    if let Some(bindable) = bindable {
        bindable.unbind(cmd)?;
    }
    drawn
}

#[cfg(test)]
#[path = "chain_renderer_tests.rs"]
mod tests;
