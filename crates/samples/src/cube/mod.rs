//! Rotating cube.
//!
//! A 36-vertex cube uploaded once into a vertex buffer, transformed by a
//! model-view-projection uniform rewritten every frame, depth tested and
//! back-face culled. Fragments are colored by their object-space position.

mod app;
pub mod camera;
pub mod geometry;
mod renderer;

pub use app::CubeApp;
pub use renderer::CubeRenderer;
