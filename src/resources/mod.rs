//! Pure-data building blocks of the reconstruction pipeline.
//!
//! Nothing in here touches the GPU: modes, jitter sequences, FSR constant
//! derivation, uniform layouts and resource generations.

pub mod aa_mode;
pub mod fsr;
pub mod jitter;
pub mod uniforms;
pub mod version_tracker;

pub use aa_mode::AaMode;
pub use fsr::{DEFAULT_RCAS_ATTENUATION, FSR_THREAD_GROUP_SIZE, FsrConstants};
pub use jitter::{JITTER_PERIOD, JitterOffset, JitterPolicy, halton_2_3, van_der_corput};
pub use uniforms::{FrameStatus, SamplingRateUniform, ViewConstants};
pub use version_tracker::{Generation, GenerationTracker};
