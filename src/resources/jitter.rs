//! Sub-pixel Jitter Sequences
//!
//! Temporal reconstruction needs the camera to sample a different sub-pixel
//! position every frame. This module provides the deterministic
//! low-discrepancy generators and the per-frame policy built on top of them.
//!
//! # Policy
//!
//! ```text
//! frame_index ──► clamped = frame_index % 16 + 1 ──► (vdc(clamped, 2), vdc(clamped, 3)) - 0.5
//! ```
//!
//! The `+ 1` skips index 0, which would collapse both axes to `0.0`. The
//! modulo bounds the cycle to [`JITTER_PERIOD`] frames so the accumulated
//! history converges to a stable pattern.
//!
//! Offsets are expressed in **pixel units** of the render target, in
//! `[-0.5, 0.5)`. Use [`JitterOffset::to_ndc`] or
//! [`JitterOffset::apply_to_projection`] to feed them to a camera.

use glam::{Mat4, Vec2, Vec4};

/// Number of frames before the jitter pattern repeats.
pub const JITTER_PERIOD: u64 = 16;

/// Radix-`base` digit reversal of `n` (Van der Corput sequence).
///
/// Returns a value in `[0, 1)`. Index `0` degenerates to `0.0`.
#[inline]
#[must_use]
pub fn van_der_corput(mut n: u64, base: u32) -> f32 {
    debug_assert!(base >= 2, "Van der Corput base must be at least 2");
    let base = u64::from(base);
    let inv_base = 1.0 / base as f64;

    let mut q = 0.0_f64;
    let mut bk = inv_base;
    while n > 0 {
        q += (n % base) as f64 * bk;
        n /= base;
        bk *= inv_base;
    }

    // Accumulate in f64: rounding 0.999.. up to 1.0 in f32 is still
    // possible for very long indices, so clamp below 1.
    (q as f32).min(1.0 - f32::EPSILON)
}

/// 2D Halton point with bases 2 and 3.
#[inline]
#[must_use]
pub fn halton_2_3(index: u64) -> Vec2 {
    Vec2::new(van_der_corput(index, 2), van_der_corput(index, 3))
}

/// Reduces a frame index into the non-zero sequence index `1..=16`.
#[inline]
#[must_use]
pub const fn clamped_sequence_index(frame_index: u64) -> u64 {
    frame_index % JITTER_PERIOD + 1
}

/// Which generator drives the camera jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JitterPolicy {
    /// No jitter: the offset is exactly `(0, 0)`.
    None,
    /// Halton (2, 3) point, re-centered around the pixel center.
    Halton23,
    /// Independent Van der Corput sequences in bases 2 and 3, re-centered.
    VanDerCorput2D,
}

impl JitterPolicy {
    /// Computes the pixel offset for `frame_index`.
    #[must_use]
    pub fn offset(self, frame_index: u64) -> JitterOffset {
        let index = clamped_sequence_index(frame_index);
        let point = match self {
            Self::None => return JitterOffset::ZERO,
            Self::Halton23 => halton_2_3(index),
            Self::VanDerCorput2D => Vec2::new(van_der_corput(index, 2), van_der_corput(index, 3)),
        };
        JitterOffset(point - Vec2::splat(0.5))
    }

    /// Returns `true` when this policy produces non-zero offsets.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Sub-pixel camera offset for a single frame, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JitterOffset(pub Vec2);

impl JitterOffset {
    /// No offset.
    pub const ZERO: Self = Self(Vec2::ZERO);

    /// Offset in pixels.
    #[inline]
    #[must_use]
    pub fn pixels(self) -> Vec2 {
        self.0
    }

    /// Converts the pixel offset into clip-space (NDC) units for a target
    /// of `width` x `height` pixels.
    ///
    /// NDC spans 2 units across the viewport and its Y axis points up while
    /// pixel rows grow downwards, hence the sign flip on Y.
    #[inline]
    #[must_use]
    pub fn to_ndc(self, width: u32, height: u32) -> Vec2 {
        Vec2::new(
            2.0 * self.0.x / width.max(1) as f32,
            -2.0 * self.0.y / height.max(1) as f32,
        )
    }

    /// Shifts `proj` by this offset in clip space.
    ///
    /// Equivalent to adding the NDC offset scaled by `w` to the projected
    /// position, which works for both perspective and orthographic matrices.
    #[must_use]
    pub fn apply_to_projection(self, proj: Mat4, width: u32, height: u32) -> Mat4 {
        if self.0 == Vec2::ZERO {
            return proj;
        }
        let ndc = self.to_ndc(width, height);
        // clip.xy += ndc * clip.w
        let jitter = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::new(ndc.x, ndc.y, 0.0, 1.0));
        jitter * proj
    }
}
