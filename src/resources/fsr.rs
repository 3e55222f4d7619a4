//! FSR 1.0 Constant Blocks
//!
//! CPU-side derivation of the constants consumed by the FidelityFX Super
//! Resolution compute shaders:
//!
//! - **EASU** (Edge-Adaptive Spatial Upsampling): four `uvec4` blocks that
//!   map output pixels to input texels and locate the 12-tap gather pattern.
//! - **RCAS** (Robust Contrast-Adaptive Sharpening): one `uvec4` holding the
//!   sharpness as `f32` bits and as a packed `f16` pair.
//!
//! Both passes share the same GPU layout ([`FsrConstants`]), five `uvec4`s,
//! the last of which carries the sample flag.
//!
//! # Sample flag
//!
//! `sample.x` is fixed to `0` for every mode. It is not tied to HDR output
//! or to whether RCAS follows EASU.

use bytemuck::{Pod, Zeroable};
use half::f16;

/// Thread-group edge length of the EASU and RCAS compute shaders.
pub const FSR_THREAD_GROUP_SIZE: u32 = 16;

/// Default RCAS attenuation in stops (0 = maximum sharpness).
pub const DEFAULT_RCAS_ATTENUATION: f32 = 0.25;

/// GPU layout shared by the EASU and RCAS passes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct FsrConstants {
    pub const0: [u32; 4],
    pub const1: [u32; 4],
    pub const2: [u32; 4],
    pub const3: [u32; 4],
    pub sample: [u32; 4],
}

impl FsrConstants {
    /// Builds the EASU constants.
    ///
    /// - `viewport`: the region of the input texture holding the rendered image
    /// - `input_size`: full input texture size
    /// - `output_size`: display (output) size
    #[must_use]
    pub fn easu(viewport: (u32, u32), input_size: (u32, u32), output_size: (u32, u32)) -> Self {
        let (vx, vy) = (viewport.0 as f32, viewport.1 as f32);
        let (ix, iy) = (input_size.0 as f32, input_size.1 as f32);
        let (ox, oy) = (output_size.0 as f32, output_size.1 as f32);

        let rcp_ix = 1.0 / ix;
        let rcp_iy = 1.0 / iy;

        // Output integer position to a pixel position in the viewport.
        let const0 = [
            (vx / ox).to_bits(),
            (vy / oy).to_bits(),
            (0.5 * vx / ox - 0.5).to_bits(),
            (0.5 * vy / oy - 0.5).to_bits(),
        ];
        // Viewport pixel position to normalized image space, plus the first
        // gather4 center offset from the upper-left of the 'F' pattern.
        let const1 = [
            rcp_ix.to_bits(),
            rcp_iy.to_bits(),
            rcp_ix.to_bits(),
            (-rcp_iy).to_bits(),
        ];
        let const2 = [
            (-rcp_ix).to_bits(),
            (2.0 * rcp_iy).to_bits(),
            rcp_ix.to_bits(),
            (2.0 * rcp_iy).to_bits(),
        ];
        let const3 = [0.0_f32.to_bits(), (4.0 * rcp_iy).to_bits(), 0, 0];

        Self {
            const0,
            const1,
            const2,
            const3,
            sample: [0; 4],
        }
    }

    /// Builds the RCAS constants for an attenuation given in stops.
    ///
    /// Attenuation is clamped to be non-negative; `0.0` is the sharpest.
    #[must_use]
    pub fn rcas(attenuation: f32) -> Self {
        let sharpness = (-attenuation.max(0.0)).exp2();
        let half_bits = u32::from(f16::from_f32(sharpness).to_bits());

        Self {
            const0: [sharpness.to_bits(), half_bits | (half_bits << 16), 0, 0],
            ..Self::default()
        }
    }

    /// Views the block as raw bytes for a uniform upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Workgroup count covering `size` pixels with 16x16 thread groups.
#[inline]
#[must_use]
pub const fn dispatch_size(size: (u32, u32)) -> (u32, u32) {
    (
        size.0.div_ceil(FSR_THREAD_GROUP_SIZE),
        size.1.div_ceil(FSR_THREAD_GROUP_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_block_is_five_uvec4() {
        assert_eq!(std::mem::size_of::<FsrConstants>(), 80);
    }

    #[test]
    fn dispatch_rounds_up() {
        assert_eq!(dispatch_size((1280, 720)), (80, 45));
        assert_eq!(dispatch_size((1281, 1)), (81, 1));
    }
}
