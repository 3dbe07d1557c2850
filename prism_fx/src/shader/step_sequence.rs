/// StepSequence - a multi-step shader

use crate::engine_error;
use crate::error::{Error, Result};
use super::{Shader, ShaderRef, MultiStep};

/// Runs an ordered list of shaders as one chain element
///
/// With a predecessor, the first step reads the predecessor's stored
/// output instead of the node's default pass source. Steps may themselves
/// be sequences; they are flattened depth-first when the chain compiles.
pub struct StepSequence {
    name: String,
    steps: Vec<ShaderRef>,
    predecessor: Option<ShaderRef>,
}

impl StepSequence {
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if `steps` is empty.
    pub fn new(name: &str, steps: Vec<ShaderRef>) -> Result<Self> {
        if steps.is_empty() {
            engine_error!("prism::StepSequence", "StepSequence '{}' has no steps", name);
            return Err(Error::InvalidResource(format!(
                "StepSequence '{}' has no steps",
                name
            )));
        }
        Ok(Self {
            name: name.to_string(),
            steps,
            predecessor: None,
        })
    }

    /// Read `predecessor`'s stored buffer instead of the default source
    pub fn with_predecessor(mut self, predecessor: ShaderRef) -> Self {
        self.predecessor = Some(predecessor);
        self
    }
}

impl Shader for StepSequence {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_multi_step(&self) -> Option<&dyn MultiStep> {
        Some(self)
    }
}

impl MultiStep for StepSequence {
    fn steps(&self) -> &[ShaderRef] {
        &self.steps
    }

    fn predecessor(&self) -> Option<&ShaderRef> {
        self.predecessor.as_ref()
    }
}
