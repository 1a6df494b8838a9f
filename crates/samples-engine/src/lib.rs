//! Host plumbing shared by the WebGPU sample programs.
//!
//! This crate owns the platform + GPU runtime pieces every demo needs: adapter
//! and device acquisition, surface configuration, shader compilation with
//! diagnostics, size-dependent attachments, and the window loop.

pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
