//! Frame View Constants
//!
//! Builds the camera constants for a frame from the host's world-to-view
//! matrix and the [`FramePlan`]:
//!
//! - **current**: render-resolution viewport, projection jittered by the plan's offset
//! - **previous**: last frame's `current`, for motion vectors and reprojection
//! - **display**: display-resolution viewport, unjittered, for the temporal pass
//!
//! The projection is a reverse-Z infinite perspective (far plane at depth 0).

use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Vec2};

use crate::renderer::graph::FramePlan;
use crate::resources::ViewConstants;

/// Camera projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSetup {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near plane distance.
    pub near: f32,
}

impl Default for ViewSetup {
    fn default() -> Self {
        Self {
            fov_y: FRAC_PI_4,
            near: 0.1,
        }
    }
}

impl ViewSetup {
    /// Reverse-Z infinite perspective for a `width` x `height` viewport.
    #[must_use]
    pub fn projection(&self, size: (u32, u32)) -> Mat4 {
        let aspect = size.0.max(1) as f32 / size.1.max(1) as f32;
        Mat4::perspective_infinite_reverse_rh(self.fov_y, aspect, self.near)
    }
}

/// View constants of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameViews {
    pub current: ViewConstants,
    pub previous: ViewConstants,
    pub display: ViewConstants,
}

/// Carries the previous frame's view constants across frames.
#[derive(Debug, Clone, Default)]
pub struct ViewHistory {
    setup: ViewSetup,
    previous: Option<ViewConstants>,
}

impl ViewHistory {
    #[must_use]
    pub fn new(setup: ViewSetup) -> Self {
        Self {
            setup,
            previous: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn setup(&self) -> &ViewSetup {
        &self.setup
    }

    /// Computes this frame's views and remembers `current` for the next frame.
    ///
    /// On a reset frame the stored history belongs to stale resources, so
    /// `previous` is the current view itself (zero motion).
    pub fn advance(&mut self, world_to_view: Mat4, plan: &FramePlan) -> FrameViews {
        let render_proj = self.setup.projection(plan.render_size);
        let jittered_proj =
            plan.jitter
                .apply_to_projection(render_proj, plan.render_size.0, plan.render_size.1);
        let jitter_ndc = plan.jitter.to_ndc(plan.render_size.0, plan.render_size.1);

        let current = ViewConstants::new(
            jittered_proj * world_to_view,
            render_proj * world_to_view,
            plan.render_size,
            jitter_ndc,
        );

        let display_vp = self.setup.projection(plan.display_size) * world_to_view;
        let display = ViewConstants::new(display_vp, display_vp, plan.display_size, Vec2::ZERO);

        let previous = match self.previous {
            Some(prev) if !plan.frame_has_been_reset => prev,
            _ => current,
        };
        self.previous = Some(current);

        FrameViews {
            current,
            previous,
            display,
        }
    }

    /// Drops the remembered view.
    pub fn clear(&mut self) {
        self.previous = None;
    }
}
