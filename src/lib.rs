#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

//! Temporal anti-aliasing, temporal supersampling and FSR 1.0 reconstruction
//! for wgpu.
//!
//! The crate decides, per frame, which resolution the scene renders at, which
//! sub-pixel jitter it uses, which reconstruction passes run and when the
//! history has to be discarded. Shader passes are supplied by the host through
//! [`renderer::graph::ReconstructionPasses`].

pub mod app;
pub mod errors;
pub mod renderer;
pub mod resources;

pub use app::{AnimationClock, Command, DemoState};
pub use errors::{ReconstructError, Result};
pub use renderer::Reconstructor;
pub use renderer::core::WgpuContext;
pub use renderer::settings::ReconstructionSettings;
pub use resources::AaMode;

pub mod prelude {
    pub use crate::errors::{ReconstructError, Result};
    pub use crate::renderer::core::{GpuTexture, WgpuAllocator, WgpuContext};
    pub use crate::renderer::graph::{
        FrameExecutor, FramePlan, FrameStep, PassFrame, ReconstructionPasses,
    };
    pub use crate::renderer::resource_set::{ResourceSet, TextureSlot};
    pub use crate::renderer::settings::{GraphicsBackend, ReconstructionSettings};
    pub use crate::renderer::strategy::{ModeProfile, ReconstructionPass};
    pub use crate::renderer::view::{FrameViews, ViewHistory, ViewSetup};
    pub use crate::renderer::Reconstructor;
    pub use crate::resources::{AaMode, JitterOffset, JitterPolicy};
}
