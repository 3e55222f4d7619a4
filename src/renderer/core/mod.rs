//! GPU-facing core: device context and texture allocation.

pub mod allocator;
pub mod context;

pub use allocator::{GpuTexture, WgpuAllocator};
pub use context::{DISPLAY_TARGET_FORMAT, WgpuContext};
