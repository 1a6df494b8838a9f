//! Static RGB triangle.
//!
//! Vertex positions and colors live in the vertex shader and are indexed by
//! `vertex_index`, so the pipeline has no vertex buffers. The frame is drawn
//! once (and again after resizes), optionally multisampled.

mod app;
mod renderer;

pub use app::{TriangleApp, TriangleConfig};
pub use renderer::TriangleRenderer;
