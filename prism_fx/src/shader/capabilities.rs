use bitflags::bitflags;

bitflags! {
    /// Capabilities a shader implements, resolved once per chain assignment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ShaderCapabilities: u8 {
        /// Can be activated/deactivated around a draw
        const BINDABLE         = 1 << 0;
        /// Runs an ordered sub-chain, optionally fed by a predecessor
        const MULTI_STEP       = 1 << 1;
        /// Derives uniforms from its source buffer
        const PARAMETERIZED    = 1 << 2;
        /// Depends on the owning node's elapsed time
        const TIME_DRIVEN      = 1 << 3;
        /// May grow the node's visible bounds
        const BOUNDS_AFFECTING = 1 << 4;
    }
}
