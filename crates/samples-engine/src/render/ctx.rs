use crate::device::compile_wgsl;

/// Renderer-facing context (device/queue + surface format + drawable size).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub width: u32,  // physical px
    pub height: u32, // physical px
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            width,
            height,
        }
    }

    /// Width over height; `1.0` for a degenerate surface.
    #[inline]
    pub fn aspect(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }

    /// Compiles a WGSL module, logging the compiler's messages.
    pub fn create_shader(&self, label: &str, source: &str) -> wgpu::ShaderModule {
        compile_wgsl(self.device, label, source)
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 { 1.0 } else { width as f32 / height as f32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_wide_surface() {
        assert_eq!(aspect_ratio(1280, 720), 1280.0 / 720.0);
    }

    #[test]
    fn aspect_degenerate_is_one() {
        assert_eq!(aspect_ratio(0, 720), 1.0);
        assert_eq!(aspect_ratio(1280, 0), 1.0);
    }
}
