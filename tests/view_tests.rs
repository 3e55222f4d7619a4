//! View & Application Tests
//!
//! Tests for:
//! - ViewSetup / ViewHistory: jittered vs unjittered matrices, previous view on reset
//! - AnimationClock: pause, per-animation phase offset
//! - Command / DemoState: key mapping, mode cycling, window title

use glam::{Mat4, Vec3};

use myth_reconstruct::app::{AnimationClock, Command, DemoState, mode_title};
use myth_reconstruct::renderer::Reconstructor;
use myth_reconstruct::renderer::resource_set::{TextureAllocator, TextureDesc};
use myth_reconstruct::renderer::settings::ReconstructionSettings;
use myth_reconstruct::renderer::view::{ViewHistory, ViewSetup};
use myth_reconstruct::resources::AaMode;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

struct NullAllocator;

impl TextureAllocator for NullAllocator {
    type Texture = ();

    fn create_texture(&mut self, _desc: &TextureDesc) {}
}

fn reconstructor(mode: AaMode) -> Reconstructor<()> {
    Reconstructor::new(&ReconstructionSettings {
        initial_mode: mode,
        ..Default::default()
    })
    .unwrap()
}

fn camera(x: f32) -> Mat4 {
    Mat4::look_at_rh(Vec3::new(x, 1.0, 5.0), Vec3::ZERO, Vec3::Y)
}

// ============================================================================
// View Tests
// ============================================================================

#[test]
fn default_projection_is_reverse_z() {
    let setup = ViewSetup::default();
    assert!(approx(setup.fov_y, std::f32::consts::FRAC_PI_4));
    assert!(approx(setup.near, 0.1));

    let proj = setup.projection((1280, 720));
    let near = proj.project_point3(Vec3::new(0.0, 0.0, -0.1));
    let far = proj.project_point3(Vec3::new(0.0, 0.0, -1.0e6));
    assert!(approx(near.z, 1.0));
    assert!(far.z < 1.0e-5);
}

#[test]
fn first_frame_previous_equals_current() {
    let mut r = reconstructor(AaMode::TemporalSupersampling);
    let mut history = ViewHistory::default();

    let plan = r.prepare_frame(&mut NullAllocator);
    let views = history.advance(camera(0.0), &plan);

    assert_eq!(views.previous, views.current);
    assert_eq!(views.current.viewport_size, [640.0, 360.0]);
    assert_eq!(views.display.viewport_size, [1280.0, 720.0]);
    assert_eq!(views.display.jitter_ndc, [0.0, 0.0]);
    assert_ne!(
        views.current.view_projection,
        views.current.view_projection_unjittered
    );
}

#[test]
fn steady_frame_uses_last_current_as_previous() {
    let mut r = reconstructor(AaMode::TemporalAntialiasing);
    let mut history = ViewHistory::default();

    let plan = r.prepare_frame(&mut NullAllocator);
    let first = history.advance(camera(0.0), &plan);
    r.end_frame();

    let plan = r.prepare_frame(&mut NullAllocator);
    assert!(!plan.frame_has_been_reset);
    let second = history.advance(camera(1.0), &plan);

    assert_eq!(second.previous, first.current);
    assert_ne!(second.current, first.current);
}

#[test]
fn reset_frame_discards_previous_view() {
    let mut r = reconstructor(AaMode::TemporalAntialiasing);
    let mut history = ViewHistory::default();

    let plan = r.prepare_frame(&mut NullAllocator);
    history.advance(camera(0.0), &plan);
    r.end_frame();

    r.next_mode();
    let plan = r.prepare_frame(&mut NullAllocator);
    assert!(plan.frame_has_been_reset);
    let views = history.advance(camera(3.0), &plan);
    assert_eq!(views.previous, views.current);
}

#[test]
fn unjittered_modes_have_identical_matrices() {
    let mut r = reconstructor(AaMode::FsrWithRcas);
    let plan = r.prepare_frame(&mut NullAllocator);
    let views = ViewHistory::new(ViewSetup::default()).advance(camera(0.0), &plan);
    assert_eq!(
        views.current.view_projection,
        views.current.view_projection_unjittered
    );
}

// ============================================================================
// AnimationClock Tests
// ============================================================================

#[test]
fn paused_clock_does_not_advance() {
    let mut clock = AnimationClock::new(true);
    clock.tick(0.5);
    assert!(!clock.toggle());
    clock.tick(10.0);
    assert!(approx(clock.time(), 0.5));
    assert!(clock.toggle());
    clock.tick(0.25);
    assert!(approx(clock.time(), 0.75));
}

#[test]
fn animations_are_phase_offset_and_wrap() {
    let mut clock = AnimationClock::default();
    clock.tick(2.5);
    let times = clock.sample_times(&[2.0, 2.0, 4.0, 0.0]);
    assert!(approx(times[0], 0.5));
    assert!(approx(times[1], 1.5));
    assert!(approx(times[2], 0.5));
    assert!(approx(times[3], 0.0));
}

// ============================================================================
// Command / DemoState Tests
// ============================================================================

#[test]
fn key_mapping() {
    assert_eq!(Command::from_char(' '), Some(Command::ToggleAnimations));
    assert_eq!(Command::from_char('t'), Some(Command::CycleMode));
    assert_eq!(Command::from_char('T'), Some(Command::CycleMode));
    assert_eq!(Command::from_char('w'), None);
}

#[test]
fn cycle_command_advances_mode_and_title() {
    let mut r = reconstructor(AaMode::TemporalSupersampling);
    let mut state = DemoState::new(true);

    assert!(state.handle(Command::CycleMode, &mut r));
    assert_eq!(r.mode(), AaMode::TemporalAntialiasing);
    assert_eq!(mode_title(r.mode()), "Current AA Mode: TAA");

    assert!(!state.handle(Command::ToggleAnimations, &mut r));
    assert!(!state.clock.is_enabled());
    assert_eq!(r.mode(), AaMode::TemporalAntialiasing);
}

#[test]
fn title_for_fsr_modes() {
    assert_eq!(
        mode_title(AaMode::FsrWithoutRcas),
        "Current AA Mode: FSR (Unsharpened)"
    );
    assert_eq!(mode_title(AaMode::FsrWithRcas), "Current AA Mode: FSR (Sharpened)");
}
