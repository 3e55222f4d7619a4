//! wgpu Texture Allocation
//!
//! [`WgpuAllocator`] implements [`TextureAllocator`] on top of a
//! `wgpu::Device`, producing [`GpuTexture`]s with a pre-built default view.

use crate::renderer::resource_set::{TextureAllocator, TextureDesc};

/// A GPU texture together with its full-texture view.
#[derive(Debug)]
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl GpuTexture {
    #[inline]
    #[must_use]
    pub fn extent(&self) -> wgpu::Extent3d {
        self.texture.size()
    }
}

/// Allocates resource-set textures on a wgpu device.
pub struct WgpuAllocator<'a> {
    device: &'a wgpu::Device,
}

impl<'a> WgpuAllocator<'a> {
    #[must_use]
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }
}

impl TextureAllocator for WgpuAllocator<'_> {
    type Texture = GpuTexture;

    fn create_texture(&mut self, desc: &TextureDesc) -> GpuTexture {
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(desc.label),
            size: wgpu::Extent3d {
                width: desc.width,
                height: desc.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: desc.format,
            usage: desc.usage,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some(desc.label),
            ..Default::default()
        });

        GpuTexture { texture, view }
    }
}
