//! Anti-Aliasing / Upscaling Mode
//!
//! [`AaMode`] enumerates the six reconstruction strategies the demo can
//! switch between at runtime. The mode is immutable for the duration of a
//! frame and advances cyclically on a user command.
//!
//! | Mode                    | Label               |
//! |-------------------------|---------------------|
//! | `NativeResolution`      | NATIVE              |
//! | `RawUpscaled`           | UPSCALED            |
//! | `TemporalSupersampling` | TSS                 |
//! | `TemporalAntialiasing`  | TAA                 |
//! | `FsrWithoutRcas`        | FSR (Unsharpened)   |
//! | `FsrWithRcas`           | FSR (Sharpened)     |
//!
//! What each mode actually does (render scale, jitter, passes) lives in the
//! strategy table of [`crate::renderer::strategy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ReconstructError;

/// Active reconstruction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AaMode {
    /// Render at display resolution, no reconstruction.
    #[serde(rename = "native")]
    NativeResolution,
    /// Render at reduced resolution and stretch to the display.
    #[serde(rename = "upscaled")]
    RawUpscaled,
    /// Jittered reduced-resolution rendering accumulated into a
    /// display-resolution history (default).
    #[default]
    #[serde(rename = "tss")]
    TemporalSupersampling,
    /// Jittered display-resolution rendering blended with history.
    #[serde(rename = "taa")]
    TemporalAntialiasing,
    /// FSR 1.0 edge-adaptive spatial upsampling only.
    #[serde(rename = "fsr")]
    FsrWithoutRcas,
    /// FSR 1.0 upsampling followed by contrast-adaptive sharpening.
    #[serde(rename = "fsr_rcas")]
    FsrWithRcas,
}

impl AaMode {
    /// Number of selectable modes.
    pub const COUNT: usize = 6;

    /// Returns all modes in cycling order.
    #[must_use]
    pub const fn all() -> &'static [AaMode; Self::COUNT] {
        &[
            Self::NativeResolution,
            Self::RawUpscaled,
            Self::TemporalSupersampling,
            Self::TemporalAntialiasing,
            Self::FsrWithoutRcas,
            Self::FsrWithRcas,
        ]
    }

    /// Position of this mode in the cycling order.
    ///
    /// Also the value uploaded as the second component of the frame status,
    /// which shaders use to branch on the active mode.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::NativeResolution => 0,
            Self::RawUpscaled => 1,
            Self::TemporalSupersampling => 2,
            Self::TemporalAntialiasing => 3,
            Self::FsrWithoutRcas => 4,
            Self::FsrWithRcas => 5,
        }
    }

    /// The mode that follows this one, wrapping after the last.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self::all()[(self.index() + 1) % Self::COUNT]
    }

    /// Short label shown in the window title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NativeResolution => "NATIVE",
            Self::RawUpscaled => "UPSCALED",
            Self::TemporalSupersampling => "TSS",
            Self::TemporalAntialiasing => "TAA",
            Self::FsrWithoutRcas => "FSR (Unsharpened)",
            Self::FsrWithRcas => "FSR (Sharpened)",
        }
    }

    /// Stable identifier used by configuration files and the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NativeResolution => "native",
            Self::RawUpscaled => "upscaled",
            Self::TemporalSupersampling => "tss",
            Self::TemporalAntialiasing => "taa",
            Self::FsrWithoutRcas => "fsr",
            Self::FsrWithRcas => "fsr_rcas",
        }
    }

    /// Returns `true` for modes that keep a history buffer between frames.
    #[inline]
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::TemporalSupersampling | Self::TemporalAntialiasing)
    }

    /// Returns `true` for both FSR variants.
    #[inline]
    #[must_use]
    pub const fn is_fsr(self) -> bool {
        matches!(self, Self::FsrWithoutRcas | Self::FsrWithRcas)
    }
}

impl fmt::Display for AaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AaMode {
    type Err = ReconstructError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.key() == needle)
            .ok_or_else(|| ReconstructError::UnknownMode(s.to_string()))
    }
}
