//! Size-dependent render attachments.
//!
//! Both targets are rebuilt lazily: callers `ensure` them every frame and the
//! texture is only recreated when the surface size, format or sample count moved.

/// Depth format used by every depth-tested demo.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Identity of a size-dependent attachment.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TargetKey {
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    pub sample_count: u32,
}

impl TargetKey {
    /// Zero extents and sample counts are clamped to 1; wgpu rejects them.
    pub fn new(width: u32, height: u32, format: wgpu::TextureFormat, sample_count: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            format,
            sample_count: sample_count.max(1),
        }
    }

    fn extent(self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }
}

struct Attachment<V = wgpu::TextureView> {
    key: Option<TargetKey>,
    view: Option<V>,
}

impl<V> Default for Attachment<V> {
    fn default() -> Self {
        Self { key: None, view: None }
    }
}

impl<V> Attachment<V> {
    /// Returns the cached view, calling `make` only when `key` moved.
    fn ensure_with(&mut self, key: TargetKey, make: impl FnOnce(TargetKey) -> V) -> &V {
        if self.key != Some(key) {
            self.view = None;
        }

        let view = match self.view.take() {
            Some(view) => view,
            None => {
                self.key = Some(key);
                make(key)
            }
        };

        self.view.insert(view)
    }
}

impl Attachment {
    fn ensure(&mut self, device: &wgpu::Device, label: &str, key: TargetKey) -> &wgpu::TextureView {
        self.ensure_with(key, |key| {
            log::debug!(
                "{label}: {}x{} {:?} x{}",
                key.width,
                key.height,
                key.format,
                key.sample_count
            );

            let texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some(label),
                size: key.extent(),
                mip_level_count: 1,
                sample_count: key.sample_count,
                dimension: wgpu::TextureDimension::D2,
                format: key.format,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });

            texture.create_view(&wgpu::TextureViewDescriptor::default())
        })
    }
}

/// Multisampled color attachment that resolves into the surface.
#[derive(Default)]
pub struct ColorTarget {
    inner: Attachment,
}

impl ColorTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view matching `key`, recreating the texture if needed.
    pub fn ensure(&mut self, device: &wgpu::Device, key: TargetKey) -> &wgpu::TextureView {
        self.inner.ensure(device, "samples msaa color", key)
    }

    pub fn key(&self) -> Option<TargetKey> {
        self.inner.key
    }
}

/// Depth attachment sized to the surface.
#[derive(Default)]
pub struct DepthTarget {
    inner: Attachment,
}

impl DepthTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`DEPTH_FORMAT`] view of `width`x`height`.
    pub fn ensure(
        &mut self,
        device: &wgpu::Device,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> &wgpu::TextureView {
        let key = TargetKey::new(width, height, DEPTH_FORMAT, sample_count);
        self.inner.ensure(device, "samples depth", key)
    }

    pub fn key(&self) -> Option<TargetKey> {
        self.inner.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FMT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

    #[test]
    fn key_clamps_zero_extent() {
        let k = TargetKey::new(0, 0, FMT, 4);
        assert_eq!((k.width, k.height), (1, 1));
    }

    #[test]
    fn key_clamps_zero_samples() {
        assert_eq!(TargetKey::new(8, 8, FMT, 0).sample_count, 1);
    }

    #[test]
    fn key_differs_on_any_field() {
        let base = TargetKey::new(640, 480, FMT, 4);
        assert_eq!(base, TargetKey::new(640, 480, FMT, 4));
        assert_ne!(base, TargetKey::new(641, 480, FMT, 4));
        assert_ne!(base, TargetKey::new(640, 481, FMT, 4));
        assert_ne!(base, TargetKey::new(640, 480, wgpu::TextureFormat::Rgba8Unorm, 4));
        assert_ne!(base, TargetKey::new(640, 480, FMT, 1));
    }

    #[test]
    fn key_extent_is_single_layer() {
        let e = TargetKey::new(300, 200, DEPTH_FORMAT, 1).extent();
        assert_eq!((e.width, e.height, e.depth_or_array_layers), (300, 200, 1));
    }

    #[test]
    fn unchanged_key_reuses_view() {
        let mut att: Attachment<u32> = Attachment::default();
        let mut built = 0;
        let key = TargetKey::new(640, 480, FMT, 4);

        for _ in 0..3 {
            let view = *att.ensure_with(key, |_| {
                built += 1;
                built
            });
            assert_eq!(view, 1);
        }
        assert_eq!(built, 1);
    }

    #[test]
    fn changed_key_rebuilds_view() {
        let mut att: Attachment<u32> = Attachment::default();
        let mut built = 0;
        let mut make = |_: TargetKey| {
            built += 1;
            built
        };

        assert_eq!(*att.ensure_with(TargetKey::new(640, 480, FMT, 4), &mut make), 1);
        assert_eq!(*att.ensure_with(TargetKey::new(800, 600, FMT, 4), &mut make), 2);
        assert_eq!(*att.ensure_with(TargetKey::new(800, 600, FMT, 1), &mut make), 3);
        assert_eq!(*att.ensure_with(TargetKey::new(800, 600, FMT, 1), &mut make), 3);
        assert_eq!(att.key, Some(TargetKey::new(800, 600, FMT, 1)));
    }

    #[test]
    fn targets_start_unbuilt() {
        assert!(ColorTarget::new().key().is_none());
        assert!(DepthTarget::new().key().is_none());
    }
}
