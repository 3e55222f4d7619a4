//! Intermediate Resource Set
//!
//! The textures a frame renders through depend on the active mode: temporal
//! modes keep history buffers, FSR modes need an input copy and one or two
//! display-resolution outputs, and the render extent follows the sampling
//! rate for reduced-resolution modes.
//!
//! # Design
//!
//! ```text
//! ModeProfile + display size + sampling rate
//!         │
//!         ▼
//! ResourceSetLayout   (pure description: slots, extents, formats)
//!         │  TextureAllocator::create_texture
//!         ▼
//! ResourceSet<T>      (allocated textures, tagged with a Generation)
//! ```
//!
//! A [`ResourceSet`] is never patched in place. When anything changes, the
//! generation is invalidated and the whole set is rebuilt from a fresh
//! layout on the next frame.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::renderer::strategy::{ModeProfile, ReconstructionPass};
use crate::resources::{AaMode, Generation};

/// HDR color format shared by every color-like intermediate.
pub const INTERMEDIATE_COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Depth format of the scene pass.
pub const SCENE_DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24PlusStencil8;

// ─── Slots ────────────────────────────────────────────────────────────────────

/// Which resolution a slot is allocated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Render,
    Display,
}

/// Named role of an intermediate texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextureSlot {
    /// Jittered scene color at render resolution.
    SceneColor,
    /// Scene depth at render resolution.
    Depth,
    /// Scene normals at render resolution.
    Normal,
    /// Screen-space motion vectors at render resolution.
    MotionVector,
    /// Previous frame's normals, used to reject disoccluded history.
    /// Written by the temporal pass and cleared at the end of every frame.
    HistoryNormal,
    /// Output of the temporal pass at display resolution.
    ResolvedColor,
    /// Previous frame's reconstructed output.
    HistoryColor,
    /// Copy of the scene color fed to EASU.
    FsrInput,
    /// EASU output (RCAS input).
    FsrIntermediate,
    /// RCAS output.
    FsrOutput,
}

impl TextureSlot {
    /// Debug label attached to the GPU texture.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SceneColor => "JitteredCurrentBuffer",
            Self::Depth => "DepthBuffer",
            Self::Normal => "NormalBuffer",
            Self::MotionVector => "MotionVector",
            Self::HistoryNormal => "HistoryNormal",
            Self::ResolvedColor => "SupersampledColor",
            Self::HistoryColor => "HistoryColor",
            Self::FsrInput => "InputFSR",
            Self::FsrIntermediate => "IntermediateFSR",
            Self::FsrOutput => "OutputFSR",
        }
    }

    #[must_use]
    pub const fn resolution(self) -> Resolution {
        match self {
            Self::SceneColor
            | Self::Depth
            | Self::Normal
            | Self::MotionVector
            | Self::HistoryNormal
            | Self::FsrInput => Resolution::Render,
            Self::ResolvedColor | Self::HistoryColor | Self::FsrIntermediate | Self::FsrOutput => {
                Resolution::Display
            }
        }
    }

    #[must_use]
    pub const fn format(self) -> wgpu::TextureFormat {
        match self {
            Self::Depth => SCENE_DEPTH_FORMAT,
            _ => INTERMEDIATE_COLOR_FORMAT,
        }
    }

    #[must_use]
    pub fn usage(self) -> wgpu::TextureUsages {
        let base = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        match self {
            Self::Depth => base,
            // Written by compute shaders
            Self::FsrIntermediate | Self::FsrOutput => {
                base | wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::COPY_SRC
            }
            _ => base | wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::COPY_DST,
        }
    }

    /// Per-frame signal buffers, cleared at the end of every frame.
    #[must_use]
    pub const fn is_per_frame_signal(self) -> bool {
        matches!(
            self,
            Self::SceneColor
                | Self::Normal
                | Self::MotionVector
                | Self::HistoryNormal
                | Self::ResolvedColor
        )
    }
}

// ─── Layout ───────────────────────────────────────────────────────────────────

/// Descriptor of one texture in the set.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc {
    pub slot: TextureSlot,
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    pub usage: wgpu::TextureUsages,
    pub label: &'static str,
}

impl TextureDesc {
    #[inline]
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Description of every texture a mode needs, before allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSetLayout {
    pub mode: AaMode,
    pub display_size: (u32, u32),
    pub render_size: (u32, u32),
    pub textures: SmallVec<[TextureDesc; 10]>,
}

impl ResourceSetLayout {
    /// Builds the layout a profile needs at the given display size.
    #[must_use]
    pub fn new(profile: &ModeProfile, display_size: (u32, u32), sampling_rate: f32) -> Self {
        let render_size = profile.render_size(display_size, sampling_rate);

        let mut slots: SmallVec<[TextureSlot; 10]> = SmallVec::new();
        slots.extend([
            TextureSlot::SceneColor,
            TextureSlot::Depth,
            TextureSlot::Normal,
            TextureSlot::MotionVector,
        ]);
        if profile.uses_history() {
            slots.extend([
                TextureSlot::HistoryNormal,
                TextureSlot::ResolvedColor,
                TextureSlot::HistoryColor,
            ]);
        }
        if profile.runs(ReconstructionPass::Easu) {
            slots.extend([TextureSlot::FsrInput, TextureSlot::FsrIntermediate]);
        }
        if profile.runs(ReconstructionPass::Rcas) {
            slots.push(TextureSlot::FsrOutput);
        }

        let textures = slots
            .into_iter()
            .map(|slot| {
                let (width, height) = match slot.resolution() {
                    Resolution::Render => render_size,
                    Resolution::Display => display_size,
                };
                TextureDesc {
                    slot,
                    width,
                    height,
                    format: slot.format(),
                    usage: slot.usage(),
                    label: slot.label(),
                }
            })
            .collect();

        Self {
            mode: profile.mode,
            display_size,
            render_size,
            textures,
        }
    }

    #[must_use]
    pub fn get(&self, slot: TextureSlot) -> Option<&TextureDesc> {
        self.textures.iter().find(|t| t.slot == slot)
    }

    #[must_use]
    pub fn contains(&self, slot: TextureSlot) -> bool {
        self.get(slot).is_some()
    }

    /// The texture that ends up on screen for this layout's mode.
    #[must_use]
    pub fn output_slot(&self) -> TextureSlot {
        if self.contains(TextureSlot::FsrOutput) {
            TextureSlot::FsrOutput
        } else if self.contains(TextureSlot::FsrIntermediate) {
            TextureSlot::FsrIntermediate
        } else if self.contains(TextureSlot::ResolvedColor) {
            TextureSlot::ResolvedColor
        } else {
            TextureSlot::SceneColor
        }
    }
}

// ─── Allocation ───────────────────────────────────────────────────────────────

/// Creates GPU textures from descriptors.
///
/// Implemented for `wgpu` by [`crate::renderer::core::WgpuAllocator`];
/// tests use a CPU-side stand-in.
pub trait TextureAllocator {
    type Texture;

    fn create_texture(&mut self, desc: &TextureDesc) -> Self::Texture;
}

/// Allocated textures for one generation.
pub struct ResourceSet<T> {
    layout: ResourceSetLayout,
    generation: Generation,
    textures: FxHashMap<TextureSlot, T>,
}

impl<T> ResourceSet<T> {
    /// Allocates every texture in `layout`.
    pub fn allocate<A>(layout: ResourceSetLayout, generation: Generation, allocator: &mut A) -> Self
    where
        A: TextureAllocator<Texture = T>,
    {
        log::debug!(
            "Allocating resource set for {} (generation {}, render {}x{}, display {}x{}, {} textures)",
            layout.mode,
            generation.get(),
            layout.render_size.0,
            layout.render_size.1,
            layout.display_size.0,
            layout.display_size.1,
            layout.textures.len(),
        );

        let textures = layout
            .textures
            .iter()
            .map(|desc| (desc.slot, allocator.create_texture(desc)))
            .collect();

        Self {
            layout,
            generation,
            textures,
        }
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> &ResourceSetLayout {
        &self.layout
    }

    #[inline]
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn get(&self, slot: TextureSlot) -> Option<&T> {
        self.textures.get(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
