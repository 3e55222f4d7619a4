//! Frame Plan
//!
//! A [`FramePlan`] is the fully-resolved list of GPU work for one frame,
//! grouped into [`Submission`]s. Each submission is recorded into its own
//! command encoder and submitted before the next one starts.
//!
//! ```text
//! Scene ──► Reconstruction ──► Sharpen ──► Present
//! ```
//!
//! The plan is plain data. [`FrameExecutor`](super::FrameExecutor) records it.

use smallvec::SmallVec;

use crate::renderer::resource_set::TextureSlot;
use crate::renderer::strategy::ReconstructionPass;
use crate::resources::{AaMode, FrameStatus, FsrConstants, Generation, JitterOffset};

/// One unit of GPU work.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStep {
    /// Clears a color texture to transparent black.
    ClearColor(TextureSlot),
    /// Clears a depth-stencil texture (reverse-Z: depth 0.0, stencil 0).
    ClearDepth(TextureSlot),
    /// Draws the scene at render resolution with the given camera jitter.
    RenderScene {
        size: (u32, u32),
        jitter: JitterOffset,
    },
    /// Full-screen temporal pass producing the resolved color.
    TemporalResolve {
        pass: ReconstructionPass,
        reset: bool,
    },
    /// Same-size texture copy.
    CopyTexture { src: TextureSlot, dst: TextureSlot },
    /// FSR compute dispatch.
    Dispatch {
        pass: ReconstructionPass,
        src: TextureSlot,
        dst: TextureSlot,
        workgroups: (u32, u32),
        constants: FsrConstants,
    },
    /// Draws `src` onto the display target, rescaling if needed.
    Blit { src: TextureSlot },
}

/// Ordered group of steps recorded into one command encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub label: &'static str,
    pub steps: SmallVec<[FrameStep; 6]>,
}

impl Submission {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            steps: SmallVec::new(),
        }
    }

    pub fn push(&mut self, step: FrameStep) {
        self.steps.push(step);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Everything the GPU does for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub frame_index: u64,
    pub mode: AaMode,
    pub generation: Generation,
    /// First frame rendered with this resource generation.
    pub frame_has_been_reset: bool,
    pub jitter: JitterOffset,
    pub render_size: (u32, u32),
    pub display_size: (u32, u32),
    pub sampling_rate: f32,
    pub submissions: Vec<Submission>,
}

impl FramePlan {
    /// Status pair uploaded to the shaders.
    #[must_use]
    pub fn status(&self) -> FrameStatus {
        FrameStatus::new(self.frame_has_been_reset, self.mode)
    }

    /// All steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &FrameStep> {
        self.submissions.iter().flat_map(|s| s.steps.iter())
    }

    /// Execution-order index of the first step matching `pred`.
    pub fn position(&self, pred: impl FnMut(&FrameStep) -> bool) -> Option<usize> {
        self.steps().position(pred)
    }

    /// Reconstruction passes in the order they run.
    #[must_use]
    pub fn passes(&self) -> Vec<ReconstructionPass> {
        self.steps()
            .filter_map(|step| match step {
                FrameStep::TemporalResolve { pass, .. } | FrameStep::Dispatch { pass, .. } => {
                    Some(*pass)
                }
                _ => None,
            })
            .collect()
    }
}
