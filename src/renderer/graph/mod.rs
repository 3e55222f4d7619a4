//! Frame graph: pass planning and recording.
//!
//! - [`FrameDispatcher`]: reset-frame state machine and plan construction
//! - [`FramePlan`]: the per-frame list of GPU work
//! - [`FrameExecutor`]: records a plan into wgpu command encoders
//! - [`ReconstructionPasses`]: host-provided shader passes

pub mod dispatcher;
pub mod executor;
pub mod node;
pub mod plan;

pub use dispatcher::{DispatchState, FrameDispatcher};
pub use executor::{FrameExecutor, FrameUniforms};
pub use node::{PassFrame, ReconstructionPasses};
pub use plan::{FramePlan, FrameStep, Submission};
