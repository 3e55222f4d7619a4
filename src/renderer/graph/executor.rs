//! Frame Executor
//!
//! Records a [`FramePlan`] into wgpu command encoders, one encoder per
//! [`Submission`](super::Submission), submitting each before the next one is
//! opened.
//!
//! # Data Flow
//!
//! ```text
//! FramePlan ─► write uniforms ─► for each submission:
//!                                   encoder ─► clears / copies (here)
//!                                           ─► scene / temporal / FSR / blit (host passes)
//!                                   queue.submit
//! ```
//!
//! Clears go through an empty render pass with `LoadOp::Clear`, which needs
//! no optional device features.

use crate::renderer::core::{GpuTexture, WgpuContext};
use crate::renderer::graph::node::{PassFrame, ReconstructionPasses};
use crate::renderer::graph::plan::{FramePlan, FrameStep};
use crate::renderer::resource_set::{ResourceSet, TextureSlot};
use crate::renderer::view::FrameViews;
use crate::resources::{FrameStatus, FsrConstants, SamplingRateUniform, ViewConstants};

/// Uniform buffers shared by all passes of a frame.
pub struct FrameUniforms {
    pub view: wgpu::Buffer,
    pub previous_view: wgpu::Buffer,
    pub display_view: wgpu::Buffer,
    pub status: wgpu::Buffer,
    pub sampling_rate: wgpu::Buffer,
    /// EASU and RCAS constants share one buffer; each is written right
    /// before the submission that dispatches it.
    pub fsr: wgpu::Buffer,
}

impl FrameUniforms {
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        let create = |label: &str, size: usize| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: size as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };

        Self {
            view: create("ThisFrameViewConstants", size_of::<ViewConstants>()),
            previous_view: create("LastFrameViewConstants", size_of::<ViewConstants>()),
            display_view: create("DisplayViewConstants", size_of::<ViewConstants>()),
            // Uniform bindings need at least 16 bytes
            status: create("FrameStatus", size_of::<FrameStatus>().max(16)),
            sampling_rate: create("SamplingRate", size_of::<SamplingRateUniform>()),
            fsr: create("FSRConstants", size_of::<FsrConstants>()),
        }
    }
}

/// Records frame plans on a wgpu device.
pub struct FrameExecutor {
    uniforms: FrameUniforms,
}

impl FrameExecutor {
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            uniforms: FrameUniforms::new(device),
        }
    }

    #[inline]
    #[must_use]
    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }

    /// Records and submits every submission of `plan`.
    pub fn execute(
        &self,
        ctx: &WgpuContext,
        plan: &FramePlan,
        views: &FrameViews,
        resources: &ResourceSet<GpuTexture>,
        passes: &mut dyn ReconstructionPasses,
        display_target: &wgpu::TextureView,
    ) {
        if resources.generation() != plan.generation {
            log::error!(
                "Refusing to execute frame {}: plan generation {} does not match resources generation {}",
                plan.frame_index,
                plan.generation.get(),
                resources.generation().get(),
            );
            return;
        }

        let queue = &ctx.queue;
        queue.write_buffer(&self.uniforms.view, 0, bytemuck::bytes_of(&views.current));
        queue.write_buffer(&self.uniforms.previous_view, 0, bytemuck::bytes_of(&views.previous));
        queue.write_buffer(&self.uniforms.display_view, 0, bytemuck::bytes_of(&views.display));
        queue.write_buffer(&self.uniforms.status, 0, bytemuck::bytes_of(&plan.status()));
        queue.write_buffer(
            &self.uniforms.sampling_rate,
            0,
            bytemuck::bytes_of(&SamplingRateUniform::new(plan.sampling_rate)),
        );

        let frame = PassFrame {
            plan,
            resources,
            uniforms: &self.uniforms,
            display_target,
        };

        for submission in &plan.submissions {
            if submission.is_empty() {
                continue;
            }

            for step in &submission.steps {
                if let FrameStep::Dispatch { constants, .. } = step {
                    queue.write_buffer(&self.uniforms.fsr, 0, constants.as_bytes());
                }
            }

            let mut encoder = ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some(submission.label),
                });

            for step in &submission.steps {
                Self::record_step(&frame, passes, &mut encoder, step);
            }

            queue.submit(std::iter::once(encoder.finish()));
        }
    }

    fn record_step(
        frame: &PassFrame,
        passes: &mut dyn ReconstructionPasses,
        encoder: &mut wgpu::CommandEncoder,
        step: &FrameStep,
    ) {
        match step {
            FrameStep::ClearColor(slot) => {
                let Some(texture) = texture_or_warn(frame, *slot) else {
                    return;
                };
                let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some(slot.label()),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &texture.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                    multiview_mask: None,
                });
            }
            FrameStep::ClearDepth(slot) => {
                let Some(texture) = texture_or_warn(frame, *slot) else {
                    return;
                };
                let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some(slot.label()),
                    color_attachments: &[],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        view: &texture.view,
                        depth_ops: Some(wgpu::Operations {
                            // Reverse-Z: 0.0 = far plane
                            load: wgpu::LoadOp::Clear(0.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(0),
                            store: wgpu::StoreOp::Store,
                        }),
                    }),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                    multiview_mask: None,
                });
            }
            FrameStep::RenderScene { .. } => passes.render_scene(frame, encoder),
            FrameStep::TemporalResolve { pass, reset } => {
                passes.resolve_temporal(frame, encoder, *pass, *reset);
            }
            FrameStep::CopyTexture { src, dst } => {
                let (Some(src_tex), Some(dst_tex)) =
                    (texture_or_warn(frame, *src), texture_or_warn(frame, *dst))
                else {
                    return;
                };
                let size = src_tex.extent();
                if size != dst_tex.extent() {
                    log::warn!(
                        "Copy {} -> {} skipped: extents differ ({:?} vs {:?})",
                        src.label(),
                        dst.label(),
                        size,
                        dst_tex.extent()
                    );
                    return;
                }
                encoder.copy_texture_to_texture(
                    wgpu::TexelCopyTextureInfo {
                        texture: &src_tex.texture,
                        mip_level: 0,
                        origin: wgpu::Origin3d::ZERO,
                        aspect: wgpu::TextureAspect::All,
                    },
                    wgpu::TexelCopyTextureInfo {
                        texture: &dst_tex.texture,
                        mip_level: 0,
                        origin: wgpu::Origin3d::ZERO,
                        aspect: wgpu::TextureAspect::All,
                    },
                    size,
                );
            }
            FrameStep::Dispatch {
                pass,
                src,
                dst,
                workgroups,
                ..
            } => {
                let (Some(src_tex), Some(dst_tex)) =
                    (texture_or_warn(frame, *src), texture_or_warn(frame, *dst))
                else {
                    return;
                };
                passes.dispatch_fsr(frame, encoder, *pass, src_tex, dst_tex, *workgroups);
            }
            FrameStep::Blit { src } => {
                let Some(src_tex) = texture_or_warn(frame, *src) else {
                    return;
                };
                passes.blit(frame, encoder, src_tex);
            }
        }
    }
}

fn texture_or_warn<'a>(frame: &'a PassFrame, slot: TextureSlot) -> Option<&'a GpuTexture> {
    let texture = frame.texture(slot);
    if texture.is_none() {
        log::warn!(
            "FrameExecutor: {} missing from resource set for {}, skipping step",
            slot.label(),
            frame.plan.mode
        );
    }
    texture
}
