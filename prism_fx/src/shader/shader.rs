/// Shader trait, capability sub-traits and the identity handle.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;
use crate::error::Result;
use crate::geometry::Rect;
use crate::graphics_device::{CommandList, FrameBuffer};
use super::ShaderCapabilities;

/// A shader usable in a chain
///
/// Every capability accessor defaults to `None`; an implementation
/// overrides the ones it supports, usually by returning `Some(self)`.
pub trait Shader: Send + Sync {
    /// Name used in logs and error messages
    fn name(&self) -> &str;

    fn as_bindable(&self) -> Option<&dyn Bindable> {
        None
    }

    fn as_multi_step(&self) -> Option<&dyn MultiStep> {
        None
    }

    fn as_parameterized(&self) -> Option<&dyn Parameterized> {
        None
    }

    fn as_time_driven(&self) -> Option<&dyn TimeDriven> {
        None
    }

    fn as_bounds_affecting(&self) -> Option<&dyn BoundsAffecting> {
        None
    }

    /// Summary of the capability accessors
    fn capabilities(&self) -> ShaderCapabilities {
        let mut caps = ShaderCapabilities::empty();
        caps.set(ShaderCapabilities::BINDABLE, self.as_bindable().is_some());
        caps.set(ShaderCapabilities::MULTI_STEP, self.as_multi_step().is_some());
        caps.set(ShaderCapabilities::PARAMETERIZED, self.as_parameterized().is_some());
        caps.set(ShaderCapabilities::TIME_DRIVEN, self.as_time_driven().is_some());
        caps.set(ShaderCapabilities::BOUNDS_AFFECTING, self.as_bounds_affecting().is_some());
        caps
    }
}

/// Activated for the duration of one draw
pub trait Bindable {
    fn bind(&self, cmd: &mut dyn CommandList) -> Result<()>;
    fn unbind(&self, cmd: &mut dyn CommandList) -> Result<()>;
}

/// Runs `steps` in order instead of drawing itself
pub trait MultiStep {
    /// Ordered, non-empty sub-chain
    fn steps(&self) -> &[ShaderRef];

    /// Shader whose stored output feeds the first step
    fn predecessor(&self) -> Option<&ShaderRef>;
}

/// Derives draw-time uniforms from the buffer it is about to read
pub trait Parameterized {
    fn derive_parameters(&self, source: &dyn FrameBuffer);
}

/// Output depends on the time elapsed since the owning node was created
pub trait TimeDriven {
    fn apply_time(&self, elapsed_seconds: f32);
}

/// Can draw outside the node's natural rectangle
pub trait BoundsAffecting {
    /// Return the (possibly larger) rectangle this shader covers
    fn expand_rectangle(&self, rect: &Rect) -> Rect;
}

// ===== IDENTITY =====

/// Address of a shader allocation, valid while a `ShaderRef` to it is alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ShaderId(usize);

/// Shared shader handle compared by reference identity
///
/// Two handles are equal only when they point at the same allocation,
/// regardless of what the shaders contain.
#[derive(Clone)]
pub struct ShaderRef(Arc<dyn Shader>);

impl ShaderRef {
    pub fn new<S: Shader + 'static>(shader: S) -> Self {
        Self(Arc::new(shader))
    }

    pub fn from_arc(shader: Arc<dyn Shader>) -> Self {
        Self(shader)
    }

    pub fn ptr_eq(&self, other: &ShaderRef) -> bool {
        self.id() == other.id()
    }

    fn id(&self) -> ShaderId {
        ShaderId(Arc::as_ptr(&self.0) as *const () as usize)
    }
}

impl Deref for ShaderRef {
    type Target = dyn Shader;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ShaderRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ShaderRef {}

impl Hash for ShaderRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for ShaderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShaderRef({})", self.0.name())
    }
}
