//! Per-node offscreen buffer storage
//!
//! `BufferStore` maps each shader of the assigned chain to the buffer it
//! most recently rendered, through a small integer `BufferSlot` handed out
//! when the chain is assigned. Released buffers go through a `BufferPool`.

mod buffer_store;
mod buffer_pool;

pub use buffer_store::{BufferStore, BufferSlot};
pub use buffer_pool::BufferPool;

#[cfg(test)]
#[path = "buffer_store_tests.rs"]
mod tests;
