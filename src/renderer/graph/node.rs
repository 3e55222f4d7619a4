//! Reconstruction Pass Interface
//!
//! The shader-backed work of a frame (scene draw, temporal resolve, FSR
//! compute, final blit) belongs to the host's rendering framework: it owns
//! the pipelines, bind groups and scene data. [`ReconstructionPasses`] is
//! the seam through which [`FrameExecutor`](super::FrameExecutor) asks the
//! host to record that work.
//!
//! # Design
//! - The executor records clears and copies itself; the host only sees
//!   steps that need a pipeline.
//! - Every method receives the frame's [`PassFrame`] with the plan, the
//!   allocated resource set and the uniform buffers already written for
//!   the current submission.
//! - Methods record into the given encoder and must not submit.

use crate::renderer::core::GpuTexture;
use crate::renderer::graph::executor::FrameUniforms;
use crate::renderer::graph::plan::FramePlan;
use crate::renderer::resource_set::{ResourceSet, TextureSlot};
use crate::renderer::strategy::ReconstructionPass;

/// Read-only view of everything a pass may bind.
pub struct PassFrame<'a> {
    pub plan: &'a FramePlan,
    pub resources: &'a ResourceSet<GpuTexture>,
    pub uniforms: &'a FrameUniforms,
    /// The image shown on screen (swap-chain view or offscreen target).
    pub display_target: &'a wgpu::TextureView,
}

impl PassFrame<'_> {
    /// Looks up a texture of the current resource set.
    #[inline]
    #[must_use]
    pub fn texture(&self, slot: TextureSlot) -> Option<&GpuTexture> {
        self.resources.get(slot)
    }
}

/// Host-provided passes.
pub trait ReconstructionPasses {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Draws the scene into the render-resolution G-buffer
    /// (`SceneColor`, `Normal`, `MotionVector`, `Depth`), using
    /// `uniforms.view` (jittered) and `uniforms.previous_view`.
    fn render_scene(&mut self, frame: &PassFrame, encoder: &mut wgpu::CommandEncoder);

    /// Runs a temporal pass writing `ResolvedColor`.
    ///
    /// When `reset` is set, `HistoryColor` has just been cleared and must
    /// not be blended in; the pass outputs the current frame only.
    fn resolve_temporal(
        &mut self,
        frame: &PassFrame,
        encoder: &mut wgpu::CommandEncoder,
        pass: ReconstructionPass,
        reset: bool,
    );

    /// Dispatches EASU or RCAS from `src` into `dst` with `workgroups`
    /// 16x16 groups. Constants are in `uniforms.fsr`.
    fn dispatch_fsr(
        &mut self,
        frame: &PassFrame,
        encoder: &mut wgpu::CommandEncoder,
        pass: ReconstructionPass,
        src: &GpuTexture,
        dst: &GpuTexture,
        workgroups: (u32, u32),
    );

    /// Draws `src` onto `frame.display_target`, rescaling to the display size.
    fn blit(&mut self, frame: &PassFrame, encoder: &mut wgpu::CommandEncoder, src: &GpuTexture);
}
