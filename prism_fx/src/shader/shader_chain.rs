/// Ordered shader sequence assigned to a node.

use std::sync::Arc;
use super::ShaderRef;

/// Immutable, shared chain of shaders in render order
///
/// Chains are compared by sequence identity: a chain rebuilt from the
/// very same shaders is still a different chain, and assigning it
/// invalidates every buffer rendered for the previous one.
#[derive(Clone, Debug)]
pub struct ShaderChain {
    shaders: Arc<[ShaderRef]>,
}

impl ShaderChain {
    pub fn new(shaders: Vec<ShaderRef>) -> Self {
        Self { shaders: shaders.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Whether both handles refer to the same assigned sequence
    pub fn is_same(&self, other: &ShaderChain) -> bool {
        Arc::ptr_eq(&self.shaders, &other.shaders)
    }

    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShaderRef> {
        self.shaders.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShaderRef> {
        self.shaders.iter()
    }

    pub fn as_slice(&self) -> &[ShaderRef] {
        &self.shaders
    }
}

impl Default for ShaderChain {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<ShaderRef>> for ShaderChain {
    fn from(shaders: Vec<ShaderRef>) -> Self {
        Self::new(shaders)
    }
}

impl<'a> IntoIterator for &'a ShaderChain {
    type Item = &'a ShaderRef;
    type IntoIter = std::slice::Iter<'a, ShaderRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
