//! Mode & Strategy Tests
//!
//! Tests for:
//! - AaMode: cycling order, labels, parsing
//! - ModeProfile: render scale, jitter policy and passes per mode
//! - ResourceSetLayout: which textures each mode allocates, and at what size

use myth_reconstruct::renderer::resource_set::{
    INTERMEDIATE_COLOR_FORMAT, ResourceSetLayout, SCENE_DEPTH_FORMAT, TextureSlot,
};
use myth_reconstruct::renderer::strategy::{ModeProfile, ReconstructionPass, RenderScale};
use myth_reconstruct::resources::{AaMode, JitterPolicy};

const DISPLAY: (u32, u32) = (1280, 720);

// ============================================================================
// AaMode Tests
// ============================================================================

#[test]
fn default_mode_is_tss() {
    assert_eq!(AaMode::default(), AaMode::TemporalSupersampling);
}

#[test]
fn cycling_six_times_returns_to_start() {
    for start in AaMode::all() {
        let mut mode = *start;
        for _ in 0..AaMode::COUNT {
            mode = mode.next();
        }
        assert_eq!(mode, *start);
    }
}

#[test]
fn cycling_order() {
    let mut mode = AaMode::NativeResolution;
    let mut seen = vec![mode];
    for _ in 1..AaMode::COUNT {
        mode = mode.next();
        seen.push(mode);
    }
    assert_eq!(seen, AaMode::all().to_vec());
    assert_eq!(AaMode::FsrWithRcas.next(), AaMode::NativeResolution);
}

#[test]
fn labels_match_window_title_names() {
    assert_eq!(AaMode::NativeResolution.label(), "NATIVE");
    assert_eq!(AaMode::RawUpscaled.label(), "UPSCALED");
    assert_eq!(AaMode::TemporalSupersampling.label(), "TSS");
    assert_eq!(AaMode::TemporalAntialiasing.label(), "TAA");
    assert_eq!(AaMode::FsrWithoutRcas.label(), "FSR (Unsharpened)");
    assert_eq!(AaMode::FsrWithRcas.label(), "FSR (Sharpened)");
}

#[test]
fn keys_round_trip_through_from_str() {
    for mode in AaMode::all() {
        assert_eq!(mode.key().parse::<AaMode>().unwrap(), *mode);
    }
}

// ============================================================================
// Strategy Table Tests
// ============================================================================

#[test]
fn render_scale_per_mode() {
    let sampled = [
        AaMode::RawUpscaled,
        AaMode::TemporalSupersampling,
        AaMode::FsrWithoutRcas,
        AaMode::FsrWithRcas,
    ];
    for mode in AaMode::all() {
        let expected = if sampled.contains(mode) {
            RenderScale::Sampled
        } else {
            RenderScale::Display
        };
        assert_eq!(ModeProfile::of(*mode).render_scale, expected, "{mode}");
    }
}

#[test]
fn render_size_follows_sampling_rate() {
    let tss = ModeProfile::of(AaMode::TemporalSupersampling);
    assert_eq!(tss.render_size(DISPLAY, 0.5), (640, 360));
    assert_eq!(tss.render_size(DISPLAY, 1.0), DISPLAY);

    let taa = ModeProfile::of(AaMode::TemporalAntialiasing);
    assert_eq!(taa.render_size(DISPLAY, 0.5), DISPLAY);
}

#[test]
fn jitter_policy_per_mode() {
    assert_eq!(
        ModeProfile::of(AaMode::TemporalSupersampling).jitter,
        JitterPolicy::Halton23
    );
    assert_eq!(
        ModeProfile::of(AaMode::TemporalAntialiasing).jitter,
        JitterPolicy::VanDerCorput2D
    );
    assert_eq!(ModeProfile::of(AaMode::FsrWithRcas).jitter, JitterPolicy::None);
}

#[test]
fn passes_per_mode() {
    assert!(ModeProfile::of(AaMode::NativeResolution).passes.is_empty());
    assert!(ModeProfile::of(AaMode::RawUpscaled).passes.is_empty());
    assert_eq!(
        ModeProfile::of(AaMode::TemporalSupersampling).passes,
        &[ReconstructionPass::TemporalAccumulate]
    );
    assert_eq!(
        ModeProfile::of(AaMode::TemporalAntialiasing).passes,
        &[ReconstructionPass::TemporalBlend]
    );
    assert_eq!(
        ModeProfile::of(AaMode::FsrWithoutRcas).passes,
        &[ReconstructionPass::Easu]
    );
    assert_eq!(
        ModeProfile::of(AaMode::FsrWithRcas).passes,
        &[ReconstructionPass::Easu, ReconstructionPass::Rcas]
    );
}

#[test]
fn only_temporal_modes_use_history() {
    for mode in AaMode::all() {
        assert_eq!(ModeProfile::of(*mode).uses_history(), mode.is_temporal());
    }
}

// ============================================================================
// Resource Layout Tests
// ============================================================================

fn layout(mode: AaMode) -> ResourceSetLayout {
    ResourceSetLayout::new(ModeProfile::of(mode), DISPLAY, 0.5)
}

#[test]
fn every_mode_has_scene_targets() {
    for mode in AaMode::all() {
        let l = layout(*mode);
        for slot in [
            TextureSlot::SceneColor,
            TextureSlot::Depth,
            TextureSlot::Normal,
            TextureSlot::MotionVector,
        ] {
            assert!(l.contains(slot), "{mode} missing {slot:?}");
        }
    }
}

#[test]
fn tss_layout_mixes_render_and_display_sizes() {
    let l = layout(AaMode::TemporalSupersampling);
    assert_eq!(l.render_size, (640, 360));
    assert_eq!(l.get(TextureSlot::SceneColor).unwrap().size(), (640, 360));
    assert_eq!(l.get(TextureSlot::HistoryColor).unwrap().size(), DISPLAY);
    assert_eq!(l.get(TextureSlot::ResolvedColor).unwrap().size(), DISPLAY);
    assert!(!l.contains(TextureSlot::FsrInput));
    assert_eq!(l.output_slot(), TextureSlot::ResolvedColor);
}

#[test]
fn fsr_layouts() {
    let plain = layout(AaMode::FsrWithoutRcas);
    assert!(plain.contains(TextureSlot::FsrInput));
    assert!(plain.contains(TextureSlot::FsrIntermediate));
    assert!(!plain.contains(TextureSlot::FsrOutput));
    assert!(!plain.contains(TextureSlot::HistoryColor));
    assert_eq!(plain.output_slot(), TextureSlot::FsrIntermediate);

    let sharpened = layout(AaMode::FsrWithRcas);
    assert!(sharpened.contains(TextureSlot::FsrOutput));
    assert_eq!(sharpened.output_slot(), TextureSlot::FsrOutput);
    assert_eq!(sharpened.get(TextureSlot::FsrInput).unwrap().size(), (640, 360));
    assert_eq!(sharpened.get(TextureSlot::FsrOutput).unwrap().size(), DISPLAY);
}

#[test]
fn native_and_upscaled_blit_scene_color() {
    assert_eq!(layout(AaMode::NativeResolution).output_slot(), TextureSlot::SceneColor);
    assert_eq!(layout(AaMode::NativeResolution).render_size, DISPLAY);
    assert_eq!(layout(AaMode::RawUpscaled).render_size, (640, 360));
    assert_eq!(layout(AaMode::RawUpscaled).textures.len(), 4);
}

#[test]
fn texture_formats() {
    let l = layout(AaMode::TemporalAntialiasing);
    for desc in &l.textures {
        if desc.slot == TextureSlot::Depth {
            assert_eq!(desc.format, SCENE_DEPTH_FORMAT);
        } else {
            assert_eq!(desc.format, INTERMEDIATE_COLOR_FORMAT);
        }
    }
}
