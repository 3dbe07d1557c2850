/// Graphics device module - the boundary between Prism and a GPU backend
///
/// Only traits and descriptors live here. Backends (Vulkan, wgpu, GL, ...)
/// implement them; the shader chain renderer only ever talks to these traits.

// Module declarations
pub mod graphics_device;
pub mod texture;
pub mod frame_buffer;
pub mod pipeline;
pub mod command_list;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use texture::*;
pub use frame_buffer::*;
pub use pipeline::*;
pub use command_list::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
