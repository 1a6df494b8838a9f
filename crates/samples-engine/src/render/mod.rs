//! GPU rendering subsystem.
//!
//! Demos own their GPU resources (pipelines, buffers) and record their own
//! passes. This module only hands them the per-frame device handles and the
//! size-dependent attachments every demo would otherwise rebuild by hand.

mod ctx;
mod targets;

pub use ctx::{RenderCtx, RenderTarget};
pub use targets::{ColorTarget, DepthTarget, TargetKey, DEPTH_FORMAT};
