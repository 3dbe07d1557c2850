//! Effect nodes - the scene-side owners of shader chains
//!
//! An `EffectNode` holds content sources, a shader chain and the
//! transform to screen space. Its draw node is a `ChainRenderer`.

mod content_source;
mod draw_rect_aggregator;
mod effect_node;

pub use content_source::{ContentSource, SolidContent};
pub use draw_rect_aggregator::DrawRectAggregator;
pub use effect_node::EffectNode;

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
