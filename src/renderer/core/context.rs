//! wgpu Context
//!
//! The [`WgpuContext`] holds the core GPU handles the reconstruction
//! pipeline records into: device, queue and a description of the adapter
//! that was picked.
//!
//! Presentation is owned by the host window layer. The context only knows
//! the display size and the format of the display target it blits into,
//! and can create an offscreen display target for headless runs.

use crate::errors::{ReconstructError, Result};
use crate::renderer::settings::ReconstructionSettings;

/// Format of the offscreen display target created by
/// [`WgpuContext::create_display_target`].
pub const DISPLAY_TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Core wgpu context holding GPU handles.
pub struct WgpuContext {
    /// The wgpu device for GPU operations
    pub device: wgpu::Device,
    /// The command queue for submitting work
    pub queue: wgpu::Queue,
    /// Adapter description, for logging and backend checks
    pub adapter_info: wgpu::AdapterInfo,
    /// Present mode the host should configure its surface with
    pub present_mode: wgpu::PresentMode,
}

impl WgpuContext {
    /// Requests an adapter and device matching `settings`.
    ///
    /// Fails with [`ReconstructError::UnsupportedBackend`] before touching the
    /// GPU if the requested backend cannot run the demo, and when the adapter
    /// wgpu picks does not use the requested backend.
    pub async fn new(settings: &ReconstructionSettings) -> Result<Self> {
        let requested_backend = settings.backend.to_wgpu()?;

        let instance = wgpu::Instance::default();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: settings.power_preference.into(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| ReconstructError::AdapterRequestFailed(e.to_string()))?;

        let adapter_info = adapter.get_info();
        if let Some(backend) = requested_backend
            && adapter_info.backend != backend
        {
            return Err(ReconstructError::UnsupportedBackend(format!(
                "requested {backend:?}, adapter '{}' uses {:?}",
                adapter_info.name, adapter_info.backend
            )));
        }

        log::info!(
            "Using adapter '{}' ({:?} backend)",
            adapter_info.name,
            adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Reconstruction Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await?;

        let present_mode = if settings.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        Ok(Self {
            device,
            queue,
            adapter_info,
            present_mode,
        })
    }

    /// Blocking variant of [`new`](Self::new) for native entry points.
    pub fn new_blocking(settings: &ReconstructionSettings) -> Result<Self> {
        pollster::block_on(Self::new(settings))
    }

    /// Creates an offscreen texture standing in for the swap-chain image.
    #[must_use]
    pub fn create_display_target(&self, width: u32, height: u32) -> wgpu::TextureView {
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Display Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DISPLAY_TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}
