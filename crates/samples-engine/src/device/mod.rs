//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - compiling shader modules and reporting their diagnostics
//! - acquiring frames and providing encoders/views for rendering

mod context;
mod error;
mod init;
mod shader;
mod surface;

pub(crate) use shader::compile_wgsl;

pub use context::{Gpu, GpuFrame};
pub use error::{AdapterUnavailable, SurfaceErrorAction};
pub use init::GpuInit;
