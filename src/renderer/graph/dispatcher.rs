//! Reconstruction Pass Dispatcher
//!
//! Decides whether a frame is a *reset* frame and turns the active
//! [`ModeProfile`] into a [`FramePlan`].
//!
//! # State Machine
//!
//! ```text
//!              first frame of a generation
//! Uninitialized ───────────────────────────► Steady
//!       ▲                                      │
//!       └──────── invalidate() ◄───────────────┘
//!            (mode switch / resize / rate change)
//! ```
//!
//! The transition frame carries `frame_has_been_reset = true`: the history
//! buffer holds nothing meaningful yet, so it is cleared before the temporal
//! pass reads it and the pass seeds it from the current frame instead of
//! blending.

use crate::renderer::graph::plan::{FramePlan, FrameStep, Submission};
use crate::renderer::resource_set::{ResourceSetLayout, TextureSlot};
use crate::renderer::strategy::{ModeProfile, ReconstructionPass};
use crate::resources::fsr::dispatch_size;
use crate::resources::{FsrConstants, Generation};

/// Dispatcher state for the current resource generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    /// No frame has been rendered with the current resources.
    #[default]
    Uninitialized,
    /// History buffers hold valid data from a previous frame.
    Steady { generation: Generation },
}

/// Per-frame pass sequencing.
#[derive(Debug)]
pub struct FrameDispatcher {
    state: DispatchState,
    rcas_attenuation: f32,
}

impl FrameDispatcher {
    #[must_use]
    pub fn new(rcas_attenuation: f32) -> Self {
        Self {
            state: DispatchState::Uninitialized,
            rcas_attenuation,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Forces the next frame to be a reset frame.
    pub fn invalidate(&mut self) {
        self.state = DispatchState::Uninitialized;
    }

    /// Records that a frame is about to render with `generation` and
    /// returns whether it is a reset frame.
    pub fn begin_frame(&mut self, generation: Generation) -> bool {
        let reset = match self.state {
            DispatchState::Uninitialized => true,
            DispatchState::Steady { generation: seen } => seen != generation,
        };
        self.state = DispatchState::Steady { generation };
        reset
    }

    /// Builds the frame plan for one frame.
    #[must_use]
    pub fn plan(
        &self,
        profile: &ModeProfile,
        layout: &ResourceSetLayout,
        generation: Generation,
        frame_index: u64,
        frame_has_been_reset: bool,
        sampling_rate: f32,
    ) -> FramePlan {
        let jitter = profile.jitter.offset(frame_index);
        let workgroups = dispatch_size(layout.display_size);

        // --- Scene ---------------------------------------------------------
        let mut scene = Submission::new("Scene");
        scene.push(FrameStep::ClearDepth(TextureSlot::Depth));
        scene.push(FrameStep::RenderScene {
            size: layout.render_size,
            jitter,
        });

        // --- Reconstruction ------------------------------------------------
        let mut reconstruction = Submission::new("Reconstruction");
        let mut sharpen = Submission::new("Sharpen");
        for &pass in profile.passes {
            match pass {
                ReconstructionPass::TemporalAccumulate | ReconstructionPass::TemporalBlend => {
                    if frame_has_been_reset {
                        reconstruction.push(FrameStep::ClearColor(TextureSlot::HistoryColor));
                    }
                    reconstruction.push(FrameStep::TemporalResolve {
                        pass,
                        reset: frame_has_been_reset,
                    });
                }
                ReconstructionPass::Easu => {
                    reconstruction.push(FrameStep::CopyTexture {
                        src: TextureSlot::SceneColor,
                        dst: TextureSlot::FsrInput,
                    });
                    reconstruction.push(FrameStep::Dispatch {
                        pass,
                        src: TextureSlot::FsrInput,
                        dst: TextureSlot::FsrIntermediate,
                        workgroups,
                        constants: FsrConstants::easu(
                            layout.render_size,
                            layout.render_size,
                            layout.display_size,
                        ),
                    });
                }
                ReconstructionPass::Rcas => {
                    sharpen.push(FrameStep::Dispatch {
                        pass,
                        src: TextureSlot::FsrIntermediate,
                        dst: TextureSlot::FsrOutput,
                        workgroups,
                        constants: FsrConstants::rcas(self.rcas_attenuation),
                    });
                }
            }
        }

        // --- Present -------------------------------------------------------
        let mut present = Submission::new("Present");
        if profile.uses_history() {
            present.push(FrameStep::CopyTexture {
                src: TextureSlot::ResolvedColor,
                dst: TextureSlot::HistoryColor,
            });
        }
        present.push(FrameStep::Blit {
            src: layout.output_slot(),
        });
        for desc in &layout.textures {
            if desc.slot.is_per_frame_signal() {
                present.push(FrameStep::ClearColor(desc.slot));
            }
        }

        FramePlan {
            frame_index,
            mode: profile.mode,
            generation,
            frame_has_been_reset,
            jitter,
            render_size: layout.render_size,
            display_size: layout.display_size,
            sampling_rate,
            submissions: vec![scene, reconstruction, sharpen, present],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::GenerationTracker;

    #[test]
    fn only_first_frame_of_generation_resets() {
        let mut tracker = GenerationTracker::new();
        let mut dispatcher = FrameDispatcher::new(0.25);
        let g1 = tracker.invalidate();

        assert!(dispatcher.begin_frame(g1));
        assert!(!dispatcher.begin_frame(g1));

        let g2 = tracker.invalidate();
        assert!(dispatcher.begin_frame(g2));
        assert!(!dispatcher.begin_frame(g2));
    }

    #[test]
    fn invalidate_forces_reset_even_for_same_generation() {
        let mut dispatcher = FrameDispatcher::new(0.25);
        let g = GenerationTracker::new().invalidate();
        dispatcher.begin_frame(g);
        dispatcher.invalidate();
        assert_eq!(dispatcher.state(), DispatchState::Uninitialized);
        assert!(dispatcher.begin_frame(g));
    }
}
