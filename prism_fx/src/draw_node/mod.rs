//! Draw nodes - the per-frame drawing tree
//!
//! A draw node records commands into a `CommandList`. Buffered draw nodes
//! first rasterize their children into an offscreen base buffer and only
//! redraw it when their content version moves past the version they last
//! populated.

mod draw_node;
mod draw_version;
mod buffered_draw_node;

pub use draw_node::{DrawNode, QuadDrawNode};
pub use draw_version::DrawVersion;
pub use buffered_draw_node::BufferedDrawNode;

#[cfg(test)]
#[path = "draw_node_tests.rs"]
mod tests;
