//! GPU Uniform Layouts
//!
//! `#[repr(C)]` blocks uploaded once per frame by the reconstruction
//! pipeline. All types are [`Pod`] so they can be written with
//! `queue.write_buffer(.., bytemuck::bytes_of(&value))`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

use crate::resources::AaMode;

/// Per-view camera constants.
///
/// `view_projection` includes the sub-pixel jitter; `view_projection_unjittered`
/// does not and is what motion vectors should be computed against.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ViewConstants {
    pub view_projection: [[f32; 4]; 4],
    pub view_projection_unjittered: [[f32; 4]; 4],
    /// Viewport size in pixels
    pub viewport_size: [f32; 2],
    /// Jitter offset in NDC units
    pub jitter_ndc: [f32; 2],
}

impl ViewConstants {
    #[must_use]
    pub fn new(view_projection: Mat4, unjittered: Mat4, viewport: (u32, u32), jitter_ndc: Vec2) -> Self {
        Self {
            view_projection: view_projection.to_cols_array_2d(),
            view_projection_unjittered: unjittered.to_cols_array_2d(),
            viewport_size: [viewport.0 as f32, viewport.1 as f32],
            jitter_ndc: jitter_ndc.to_array(),
        }
    }
}

/// Frame status consumed by the scene and temporal shaders.
///
/// Matches an `ivec2`: `x` = reset flag (0/1), `y` = active mode index.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct FrameStatus {
    pub frame_has_been_reset: i32,
    pub mode: i32,
}

impl FrameStatus {
    #[must_use]
    pub fn new(frame_has_been_reset: bool, mode: AaMode) -> Self {
        Self {
            frame_has_been_reset: i32::from(frame_has_been_reset),
            mode: mode.index() as i32,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.frame_has_been_reset != 0
    }
}

/// Render / display resolution ratio, padded to 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SamplingRateUniform {
    pub rate: f32,
    pub _padding: [f32; 3],
}

impl SamplingRateUniform {
    #[must_use]
    pub fn new(rate: f32) -> Self {
        Self {
            rate,
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<ViewConstants>() % 16, 0);
        assert_eq!(std::mem::size_of::<SamplingRateUniform>(), 16);
        assert_eq!(std::mem::size_of::<FrameStatus>(), 8);
    }
}
