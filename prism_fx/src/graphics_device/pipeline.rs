/// Pipeline trait - a compiled shader program ready to be bound

/// Graphics pipeline
///
/// Created by the backend from its own shader sources; Prism only binds it.
pub trait Pipeline: Send + Sync {
    /// Debug label
    fn label(&self) -> &str;

    /// Size in bytes of the push constant range this pipeline accepts
    fn push_constant_size(&self) -> u32 {
        0
    }
}
