//! Reconstruction Renderer
//!
//! [`Reconstructor`] owns the per-frame state of the pipeline: the active
//! mode, the frame index, the resource generation and the allocated
//! resource set. It is driven once per frame by the render loop:
//!
//! ```text
//! ┌──────────────┐  prepare_frame(alloc)  ┌────────────┐  execute  ┌──────────┐
//! │ Reconstructor│ ─────────────────────► │ FramePlan  │ ────────► │ Executor │
//! └──────────────┘                        └────────────┘           └──────────┘
//!        ▲ next_mode / resize / set_sampling_rate (invalidate generation)
//! ```
//!
//! Anything that changes the shape of the resource set only bumps the
//! generation. Reallocation happens lazily inside the next
//! [`prepare_frame`](Reconstructor::prepare_frame), which also marks that
//! frame as a reset frame.
//!
//! The renderer is single-threaded: all state belongs to the render loop.

pub mod core;
pub mod graph;
pub mod resource_set;
pub mod settings;
pub mod strategy;
pub mod view;

use crate::errors::Result;
use crate::renderer::graph::{FrameDispatcher, FramePlan};
use crate::renderer::resource_set::{ResourceSet, ResourceSetLayout, TextureAllocator};
use crate::renderer::settings::{ReconstructionSettings, validate_resolution, validate_sampling_rate};
use crate::renderer::strategy::ModeProfile;
use crate::resources::{AaMode, Generation, GenerationTracker};

pub use settings::{GraphicsBackend, PowerPreference};

/// Per-frame orchestration of the reconstruction pipeline.
///
/// Generic over the texture type so the same state machine drives wgpu
/// textures ([`core::GpuTexture`]) and CPU-side stand-ins in tests.
pub struct Reconstructor<T> {
    mode: AaMode,
    profile: &'static ModeProfile,
    sampling_rate: f32,
    display_size: (u32, u32),
    frame_index: u64,

    generations: GenerationTracker,
    dispatcher: FrameDispatcher,
    resources: Option<ResourceSet<T>>,
}

impl<T> Reconstructor<T> {
    /// Creates the renderer state from validated settings.
    ///
    /// No resources are allocated until the first frame.
    pub fn new(settings: &ReconstructionSettings) -> Result<Self> {
        settings.validate()?;

        let mut generations = GenerationTracker::new();
        generations.invalidate();

        Ok(Self {
            mode: settings.initial_mode,
            profile: ModeProfile::of(settings.initial_mode),
            sampling_rate: settings.sampling_rate,
            display_size: settings.display_size(),
            frame_index: 0,
            generations,
            dispatcher: FrameDispatcher::new(settings.rcas_attenuation),
            resources: None,
        })
    }

    // === Accessors ===

    #[inline]
    #[must_use]
    pub fn mode(&self) -> AaMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn profile(&self) -> &'static ModeProfile {
        self.profile
    }

    #[inline]
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    #[inline]
    #[must_use]
    pub fn sampling_rate(&self) -> f32 {
        self.sampling_rate
    }

    #[inline]
    #[must_use]
    pub fn display_size(&self) -> (u32, u32) {
        self.display_size
    }

    /// Generation the next frame will render with.
    #[inline]
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generations.current()
    }

    /// Resources of the current generation, if already allocated.
    #[must_use]
    pub fn resources(&self) -> Option<&ResourceSet<T>> {
        self.resources
            .as_ref()
            .filter(|set| self.generations.is_current(set.generation()))
    }

    // === State changes ===

    /// Advances to the next mode (the "cycle mode" key) and returns it.
    pub fn next_mode(&mut self) -> AaMode {
        self.set_mode(self.mode.next());
        self.mode
    }

    /// Switches to `mode`, tearing down every derived resource.
    ///
    /// Selecting the active mode again is a no-op.
    pub fn set_mode(&mut self, mode: AaMode) {
        if mode == self.mode {
            return;
        }
        log::info!("AA mode: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.profile = ModeProfile::of(mode);
        self.invalidate();
    }

    /// Handles a display (back buffer) resize.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        validate_resolution(width, height)?;
        if (width, height) != self.display_size {
            log::debug!("Display resized to {width}x{height}");
            self.display_size = (width, height);
            self.invalidate();
        }
        Ok(())
    }

    /// Changes the render / display resolution ratio.
    pub fn set_sampling_rate(&mut self, rate: f32) -> Result<()> {
        validate_sampling_rate(rate)?;
        if (rate - self.sampling_rate).abs() > f32::EPSILON {
            self.sampling_rate = rate;
            self.invalidate();
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        // Drop the stale set right away so it can never be bound again.
        self.resources = None;
        self.generations.invalidate();
        self.dispatcher.invalidate();
    }

    // === Per-frame ===

    /// Plans the current frame, (re)allocating resources if the generation
    /// changed since the last frame.
    pub fn prepare_frame<A>(&mut self, allocator: &mut A) -> FramePlan
    where
        A: TextureAllocator<Texture = T>,
    {
        let generation = self.generations.current();

        let resources = match self.resources.take() {
            Some(set) if set.generation() == generation => set,
            _ => {
                let layout =
                    ResourceSetLayout::new(self.profile, self.display_size, self.sampling_rate);
                ResourceSet::allocate(layout, generation, allocator)
            }
        };

        let reset = self.dispatcher.begin_frame(generation);
        let plan = self.dispatcher.plan(
            self.profile,
            resources.layout(),
            generation,
            self.frame_index,
            reset,
            self.sampling_rate,
        );

        self.resources = Some(resources);
        plan
    }

    /// Marks the current frame as rendered.
    pub fn end_frame(&mut self) {
        self.frame_index += 1;
    }
}
