/*!
# Prism FX

Multi-pass shader chains for buffered draw nodes.

An effect node's content is rasterized into an offscreen base buffer and
then run through an ordered chain of shader passes. Each pass reads a
source buffer and writes a freshly allocated target that is stored per
shader; the stored buffers are composited back onto the screen.

## Architecture

- **Shader**: opaque shader handle with optional capabilities
  (bindable, multi-step, parameterized, time-driven, bounds-affecting)
- **BufferStore**: per-node table of the buffer each shader last produced
- **ChainRenderer**: applies the node's state, populates the buffers when
  stale, composites them when drawing
- **EffectNode**: scene-side owner of the chain, its content and its bounds
- **GraphicsDevice / CommandList**: the backend boundary, implemented
  outside this crate
*/

// Internal modules
mod error;
mod engine;
mod utils;
pub mod log;
pub mod geometry;
pub mod graphics_device;
pub mod time;
pub mod shader;
pub mod buffer_store;
pub mod draw_node;
pub mod chain;
pub mod node;

// Main prism namespace module
pub mod prism {
    // Error types
    pub use crate::error::{Error, Result};

    // Global logging sink
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Backend boundary and draw tree
    pub mod render {
        pub use crate::graphics_device::*;
        pub use crate::draw_node::*;
    }

    pub mod geometry {
        pub use crate::geometry::*;
    }

    pub mod shader {
        pub use crate::shader::*;
    }

    pub mod buffer {
        pub use crate::buffer_store::*;
    }

    pub mod chain {
        pub use crate::chain::*;
    }

    pub mod node {
        pub use crate::node::*;
    }

    pub mod time {
        pub use crate::time::*;
    }
}

// Re-export math library at crate root
pub use glam;
