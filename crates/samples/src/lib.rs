//! WebGPU sample programs.
//!
//! Each module is one self-contained demo: its shaders, the renderer that owns
//! the GPU resources, and the [`App`](samples_engine::core::App) the binary
//! hands to the runtime.

pub mod cube;
pub mod triangle;
