//! Reconstruction Settings
//!
//! Startup configuration for the reconstruction pipeline and the GPU
//! context that drives it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use myth_reconstruct::prelude::*;
//!
//! // Defaults: 1280x720, TSS at half resolution, vsync on
//! let settings = ReconstructionSettings::default();
//!
//! // FSR with sharpening at 67% resolution
//! let settings = ReconstructionSettings {
//!     initial_mode: AaMode::FsrWithRcas,
//!     sampling_rate: 0.67,
//!     ..Default::default()
//! };
//! settings.validate()?;
//! ```
//!
//! Settings can also be loaded from a JSON file with
//! [`ReconstructionSettings::from_json_file`]; missing fields fall back to
//! their defaults.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ReconstructError, Result};
use crate::resources::{AaMode, DEFAULT_RCAS_ATTENUATION};

// ---------------------------------------------------------------------------
// GraphicsBackend
// ---------------------------------------------------------------------------

/// Graphics API requested on the command line.
///
/// `Dx11` is accepted by the parser so the caller can report it explicitly:
/// the pipeline relies on compute-based FSR and storage textures, which the
/// demo does not support on D3D11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphicsBackend {
    /// Let wgpu pick the best backend for the platform.
    #[default]
    Auto,
    Vulkan,
    Dx12,
    Metal,
    Gl,
    Dx11,
}

impl GraphicsBackend {
    /// Resolves to a concrete wgpu backend, `None` meaning "any".
    pub fn to_wgpu(self) -> Result<Option<wgpu::Backend>> {
        match self {
            Self::Auto => Ok(None),
            Self::Vulkan => Ok(Some(wgpu::Backend::Vulkan)),
            Self::Dx12 => Ok(Some(wgpu::Backend::Dx12)),
            Self::Metal => Ok(Some(wgpu::Backend::Metal)),
            Self::Gl => Ok(Some(wgpu::Backend::Gl)),
            Self::Dx11 => Err(ReconstructError::UnsupportedBackend(
                "D3D11 is not supported by this demo".to_string(),
            )),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Vulkan => "vulkan",
            Self::Dx12 => "dx12",
            Self::Metal => "metal",
            Self::Gl => "gl",
            Self::Dx11 => "dx11",
        }
    }
}

impl fmt::Display for GraphicsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphicsBackend {
    type Err = ReconstructError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "vulkan" | "vk" => Ok(Self::Vulkan),
            "dx12" | "d3d12" => Ok(Self::Dx12),
            "metal" => Ok(Self::Metal),
            "gl" | "opengl" | "gles" => Ok(Self::Gl),
            "dx11" | "d3d11" => Ok(Self::Dx11),
            other => Err(ReconstructError::UnsupportedBackend(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// PowerPreference
// ---------------------------------------------------------------------------

/// GPU adapter selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerPreference {
    /// Prefer discrete / dedicated GPU
    #[default]
    HighPerformance,
    /// Prefer integrated GPU
    LowPower,
}

impl From<PowerPreference> for wgpu::PowerPreference {
    fn from(value: PowerPreference) -> Self {
        match value {
            PowerPreference::HighPerformance => wgpu::PowerPreference::HighPerformance,
            PowerPreference::LowPower => wgpu::PowerPreference::LowPower,
        }
    }
}

// ---------------------------------------------------------------------------
// ReconstructionSettings
// ---------------------------------------------------------------------------

/// Global configuration for the reconstruction pipeline.
///
/// # Fields
///
/// | Field              | Description                               | Default        |
/// |--------------------|-------------------------------------------|----------------|
/// | `display_width`    | Back buffer width                         | 1280           |
/// | `display_height`   | Back buffer height                        | 720            |
/// | `sampling_rate`    | Render / display resolution ratio         | 0.5            |
/// | `initial_mode`     | Mode active on the first frame            | TSS            |
/// | `vsync`            | Vertical sync enabled                     | `true`         |
/// | `backend`          | Forced graphics backend                   | `Auto`         |
/// | `power_preference` | GPU adapter selection strategy            | HighPerformance|
/// | `rcas_attenuation` | RCAS sharpening attenuation (stops)       | 0.25           |
/// | `animations`       | Scene animations start enabled            | `true`         |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionSettings {
    /// Display (back buffer) width in pixels.
    pub display_width: u32,
    /// Display (back buffer) height in pixels.
    pub display_height: u32,

    /// Ratio of render resolution to display resolution, in `(0, 1]`.
    ///
    /// Only applied by modes whose strategy renders at reduced resolution.
    pub sampling_rate: f32,

    /// Mode selected when the pipeline starts.
    pub initial_mode: AaMode,

    /// Enable vertical synchronization (VSync).
    pub vsync: bool,

    /// Graphics backend to request.
    pub backend: GraphicsBackend,

    /// GPU adapter selection preference.
    pub power_preference: PowerPreference,

    /// RCAS attenuation in stops; `0.0` is the sharpest.
    pub rcas_attenuation: f32,

    /// Whether scene animations play from the start.
    pub animations: bool,
}

impl Default for ReconstructionSettings {
    fn default() -> Self {
        Self {
            display_width: 1280,
            display_height: 720,
            sampling_rate: 0.5,
            initial_mode: AaMode::default(),
            vsync: true,
            backend: GraphicsBackend::default(),
            power_preference: PowerPreference::default(),
            rcas_attenuation: DEFAULT_RCAS_ATTENUATION,
            animations: true,
        }
    }
}

impl ReconstructionSettings {
    /// Checks invariants that the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        validate_sampling_rate(self.sampling_rate)?;
        validate_resolution(self.display_width, self.display_height)?;
        Ok(())
    }

    /// Display resolution as `(width, height)`.
    #[inline]
    #[must_use]
    pub fn display_size(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }

    /// Parses settings from a JSON string and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a JSON file and validates them.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading reconstruction settings from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the settings as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub(crate) fn validate_sampling_rate(rate: f32) -> Result<()> {
    if rate > 0.0 && rate <= 1.0 {
        Ok(())
    } else {
        Err(ReconstructError::InvalidSamplingRate(rate))
    }
}

pub(crate) fn validate_resolution(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ReconstructError::InvalidResolution { width, height });
    }
    Ok(())
}
