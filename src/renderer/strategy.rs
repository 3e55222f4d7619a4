//! Mode Strategy Table
//!
//! Maps each [`AaMode`] to a static [`ModeProfile`] describing how a frame
//! is produced in that mode. The profile is looked up once when the mode
//! changes and then drives resource allocation and pass planning, instead
//! of re-branching on the mode at every call site.
//!
//! | Mode    | Render scale   | Jitter          | Reconstruction passes |
//! |---------|----------------|-----------------|-----------------------|
//! | NATIVE  | display        | none            | -                     |
//! | UPSCALED| × sampling rate| none            | -                     |
//! | TSS     | × sampling rate| Halton (2,3)    | temporal accumulate   |
//! | TAA     | display        | Van der Corput  | temporal blend        |
//! | FSR     | × sampling rate| none            | EASU                  |
//! | FSR+RCAS| × sampling rate| none            | EASU → RCAS           |

use crate::resources::{AaMode, JitterPolicy};

/// How the render extent relates to the display extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScale {
    /// Render at display resolution.
    Display,
    /// Render at display resolution multiplied by the sampling rate.
    Sampled,
}

/// A reconstruction pass that turns the scene render into the display image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconstructionPass {
    /// Accumulates jittered low-resolution samples into a display-resolution history.
    TemporalAccumulate,
    /// Blends the jittered frame with the reprojected history at display resolution.
    TemporalBlend,
    /// FSR edge-adaptive spatial upsampling.
    Easu,
    /// FSR robust contrast-adaptive sharpening.
    Rcas,
}

impl ReconstructionPass {
    /// Returns `true` for passes that read the history buffer.
    #[inline]
    #[must_use]
    pub const fn uses_history(self) -> bool {
        matches!(self, Self::TemporalAccumulate | Self::TemporalBlend)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TemporalAccumulate => "Temporal Accumulate",
            Self::TemporalBlend => "Temporal Blend",
            Self::Easu => "FSR EASU",
            Self::Rcas => "FSR RCAS",
        }
    }
}

/// Everything that differs between modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeProfile {
    pub mode: AaMode,
    pub render_scale: RenderScale,
    pub jitter: JitterPolicy,
    /// Reconstruction passes in execution order. Empty means the scene
    /// render is blitted directly to the display.
    pub passes: &'static [ReconstructionPass],
}

const PROFILES: [ModeProfile; AaMode::COUNT] = [
    ModeProfile {
        mode: AaMode::NativeResolution,
        render_scale: RenderScale::Display,
        jitter: JitterPolicy::None,
        passes: &[],
    },
    ModeProfile {
        mode: AaMode::RawUpscaled,
        render_scale: RenderScale::Sampled,
        jitter: JitterPolicy::None,
        passes: &[],
    },
    ModeProfile {
        mode: AaMode::TemporalSupersampling,
        render_scale: RenderScale::Sampled,
        jitter: JitterPolicy::Halton23,
        passes: &[ReconstructionPass::TemporalAccumulate],
    },
    ModeProfile {
        mode: AaMode::TemporalAntialiasing,
        render_scale: RenderScale::Display,
        jitter: JitterPolicy::VanDerCorput2D,
        passes: &[ReconstructionPass::TemporalBlend],
    },
    ModeProfile {
        mode: AaMode::FsrWithoutRcas,
        render_scale: RenderScale::Sampled,
        jitter: JitterPolicy::None,
        passes: &[ReconstructionPass::Easu],
    },
    ModeProfile {
        mode: AaMode::FsrWithRcas,
        render_scale: RenderScale::Sampled,
        jitter: JitterPolicy::None,
        passes: &[ReconstructionPass::Easu, ReconstructionPass::Rcas],
    },
];

impl ModeProfile {
    /// Looks up the profile of `mode`.
    #[inline]
    #[must_use]
    pub fn of(mode: AaMode) -> &'static ModeProfile {
        &PROFILES[mode.index()]
    }

    /// Computes the render extent for a display extent.
    ///
    /// Scaled dimensions truncate toward zero and are clamped to at least 1.
    #[must_use]
    pub fn render_size(&self, display: (u32, u32), sampling_rate: f32) -> (u32, u32) {
        match self.render_scale {
            RenderScale::Display => display,
            RenderScale::Sampled => (
                scale_dimension(display.0, sampling_rate),
                scale_dimension(display.1, sampling_rate),
            ),
        }
    }

    /// Returns `true` if any pass reads the history buffer.
    #[must_use]
    pub fn uses_history(&self) -> bool {
        self.passes.iter().any(|p| p.uses_history())
    }

    /// Returns `true` if this profile runs `pass`.
    #[must_use]
    pub fn runs(&self, pass: ReconstructionPass) -> bool {
        self.passes.contains(&pass)
    }
}

fn scale_dimension(size: u32, rate: f32) -> u32 {
    ((size as f32 * rate) as u32).max(1)
}
