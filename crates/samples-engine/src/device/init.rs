/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// When `false`, a linear 8-bit format is preferred instead, matching what a
    /// browser canvas reports as its preferred format.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    /// Canvas-style configuration: linear preferred format, opaque compositing.
    pub fn canvas() -> Self {
        Self {
            prefer_srgb: false,
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            ..Self::default()
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_prefers_linear_opaque() {
        let init = GpuInit::canvas();
        assert!(!init.prefer_srgb);
        assert_eq!(init.alpha_mode, Some(wgpu::CompositeAlphaMode::Opaque));
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
    }

    #[test]
    fn default_requests_no_features() {
        let init = GpuInit::default();
        assert!(init.prefer_srgb);
        assert!(init.required_features.is_empty());
        assert_eq!(init.desired_maximum_frame_latency, 2);
    }
}
