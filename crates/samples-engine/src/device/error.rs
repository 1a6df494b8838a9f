/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// No adapter on this host can drive the window's surface.
///
/// The runtime treats this as a quiet shutdown rather than a failure.
#[derive(Debug, thiserror::Error)]
#[error("no suitable GPU adapter available")]
pub struct AdapterUnavailable;
