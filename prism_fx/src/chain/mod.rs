//! Shader chain renderer
//!
//! `ChainRenderer` is the draw node of an effect node. Once per frame it
//! compares the node's shader chain against the one it captured, runs
//! the chain pass by pass into the node's `BufferStore` when the cached
//! buffers are stale, and composites the stored buffers onto the screen.

mod chain_config;
mod compiled_chain;
mod chain_renderer;

pub use chain_config::{ChainConfig, PassSource};
pub use compiled_chain::{CompiledChain, CompiledEntry, CompiledStep, PredecessorLink};
pub use chain_renderer::{ChainRenderer, ChainStats};
