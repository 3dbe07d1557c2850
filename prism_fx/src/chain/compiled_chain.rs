/// Chain resolved once per assignment

use crate::buffer_store::{BufferSlot, BufferStore};
use crate::engine_warn;
use crate::shader::{ShaderCapabilities, ShaderChain, ShaderRef};

/// Where a multi-step shader's first step reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredecessorLink {
    /// No predecessor: the pass reads the configured default source
    None,
    /// Predecessor is in the chain and owns this slot
    Resolved(BufferSlot),
    /// Predecessor is not part of the chain (named for the error)
    Missing(String),
}

/// One shader execution within a pass
#[derive(Debug, Clone)]
pub struct CompiledStep {
    pub shader: ShaderRef,
    pub capabilities: ShaderCapabilities,
}

/// One chain element: a pass writing one stored buffer
#[derive(Debug, Clone)]
pub struct CompiledEntry {
    pub shader: ShaderRef,
    pub slot: BufferSlot,
    pub capabilities: ShaderCapabilities,
    pub predecessor: PredecessorLink,
    /// Shaders run by this pass, in order (nested sequences flattened)
    pub steps: Vec<CompiledStep>,
}

/// A `ShaderChain` with capabilities, slots and links resolved
#[derive(Debug, Clone, Default)]
pub struct CompiledChain {
    entries: Vec<CompiledEntry>,
    needs_force_redraw: bool,
}

impl CompiledChain {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register every shader of `chain` in `store` and resolve the passes
    ///
    /// Slots are registered for the whole chain first, so a predecessor
    /// placed later in the chain still resolves to a slot; it then fails
    /// at render time because it has not rendered yet.
    pub fn compile(chain: &ShaderChain, store: &mut BufferStore) -> Self {
        let slots: Vec<BufferSlot> = chain.iter().map(|shader| store.register(shader)).collect();

        let mut entries = Vec::with_capacity(chain.len());
        for (shader, slot) in chain.iter().zip(slots) {
            let capabilities = shader.capabilities();
            let (steps, predecessor) = match shader.as_multi_step() {
                Some(multi_step) => {
                    let mut steps = Vec::new();
                    flatten_steps(multi_step.steps(), &mut steps);
                    let predecessor = match multi_step.predecessor() {
                        None => PredecessorLink::None,
                        Some(p) => match store.slot_of(p) {
                            Some(p_slot) => PredecessorLink::Resolved(p_slot),
                            None => {
                                engine_warn!("prism::CompiledChain",
                                    "Predecessor '{}' of '{}' is not in the chain",
                                    p.name(), shader.name());
                                PredecessorLink::Missing(p.name().to_string())
                            }
                        },
                    };
                    (steps, predecessor)
                }
                None => (
                    vec![CompiledStep { shader: shader.clone(), capabilities }],
                    PredecessorLink::None,
                ),
            };
            entries.push(CompiledEntry {
                shader: shader.clone(),
                slot,
                capabilities,
                predecessor,
                steps,
            });
        }

        let needs_force_redraw = entries.iter().any(|entry| {
            entry.capabilities.contains(ShaderCapabilities::TIME_DRIVEN)
                || entry.steps.iter().any(|s| s.capabilities.contains(ShaderCapabilities::TIME_DRIVEN))
        });

        Self { entries, needs_force_redraw }
    }

    pub fn entries(&self) -> &[CompiledEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Any shader or step is time-driven: the node must repopulate every frame
    pub fn needs_force_redraw(&self) -> bool {
        self.needs_force_redraw
    }

    /// Total shader executions of one populate pass
    pub fn step_count(&self) -> usize {
        self.entries.iter().map(|e| e.steps.len()).sum()
    }
}

/// Depth-first flattening; a nested sequence's own predecessor is ignored
fn flatten_steps(steps: &[ShaderRef], out: &mut Vec<CompiledStep>) {
    for step in steps {
        match step.as_multi_step() {
            Some(nested) => {
                if let Some(p) = nested.predecessor() {
                    engine_warn!("prism::CompiledChain",
                        "Ignoring predecessor '{}' of nested step '{}'", p.name(), step.name());
                }
                flatten_steps(nested.steps(), out);
            }
            None => out.push(CompiledStep {
                shader: step.clone(),
                capabilities: step.capabilities(),
            }),
        }
    }
}
