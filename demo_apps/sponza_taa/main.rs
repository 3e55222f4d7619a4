//! Headless reconstruction driver.
//!
//! Runs the full per-frame pipeline (resource allocation, pass planning,
//! uniform uploads, clears, copies and submissions) on an offscreen display
//! target. Scene and shader passes are traced instead of drawn, which makes
//! this a convenient harness for watching mode switches and reset frames:
//!
//! ```text
//! RUST_LOG=debug cargo run -p sponza_taa -- --mode taa --frames 120 --cycle-every 20
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use glam::{Mat4, Vec3};
use myth_reconstruct::prelude::*;
use myth_reconstruct::{Command, DemoState, app::mode_title};

const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(
    name = "sponza_taa",
    about = "Drive the TAA / TSS / FSR reconstruction pipeline on an offscreen target."
)]
struct Args {
    /// Graphics backend (auto, vulkan, dx12, metal, gl; dx11 is rejected)
    #[arg(long, value_name = "API")]
    backend: Option<GraphicsBackend>,

    /// Display width in pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Display height in pixels
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Render / display resolution ratio in (0, 1]
    #[arg(long, value_name = "RATIO")]
    sampling_rate: Option<f32>,

    /// Initial mode (native, upscaled, tss, taa, fsr, fsr_rcas)
    #[arg(long, value_name = "MODE")]
    mode: Option<AaMode>,

    /// Number of frames to render
    #[arg(long, default_value_t = 64)]
    frames: u64,

    /// Cycle to the next mode every N frames (0 disables)
    #[arg(long, default_value_t = 0)]
    cycle_every: u64,

    /// Load settings from a JSON file; flags override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable vertical sync
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_vsync: bool,

    /// Start with scene animations paused
    #[arg(long, action = clap::ArgAction::SetTrue)]
    paused: bool,
}

impl Args {
    fn settings(&self) -> anyhow::Result<ReconstructionSettings> {
        let mut settings = match &self.config {
            Some(path) => ReconstructionSettings::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ReconstructionSettings::default(),
        };

        if let Some(backend) = self.backend {
            settings.backend = backend;
        }
        if let Some(width) = self.width {
            settings.display_width = width;
        }
        if let Some(height) = self.height {
            settings.display_height = height;
        }
        if let Some(rate) = self.sampling_rate {
            settings.sampling_rate = rate;
        }
        if let Some(mode) = self.mode {
            settings.initial_mode = mode;
        }
        if self.no_vsync {
            settings.vsync = false;
        }
        if self.paused {
            settings.animations = false;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Stand-in for the scene and shader passes: logs what would be drawn.
struct TracePasses;

impl ReconstructionPasses for TracePasses {
    fn name(&self) -> &str {
        "trace"
    }

    fn render_scene(&mut self, frame: &PassFrame, _encoder: &mut wgpu::CommandEncoder) {
        let (w, h) = frame.plan.render_size;
        let jitter = frame.plan.jitter.pixels();
        log::trace!(
            "frame {}: scene {w}x{h}, jitter ({:+.4}, {:+.4})",
            frame.plan.frame_index,
            jitter.x,
            jitter.y
        );
    }

    fn resolve_temporal(
        &mut self,
        frame: &PassFrame,
        _encoder: &mut wgpu::CommandEncoder,
        pass: ReconstructionPass,
        reset: bool,
    ) {
        log::trace!("frame {}: {} (reset: {reset})", frame.plan.frame_index, pass.name());
    }

    fn dispatch_fsr(
        &mut self,
        frame: &PassFrame,
        _encoder: &mut wgpu::CommandEncoder,
        pass: ReconstructionPass,
        src: &GpuTexture,
        dst: &GpuTexture,
        workgroups: (u32, u32),
    ) {
        let (s, d) = (src.extent(), dst.extent());
        log::trace!(
            "frame {}: {} {}x{} -> {}x{}, {}x{} groups",
            frame.plan.frame_index,
            pass.name(),
            s.width,
            s.height,
            d.width,
            d.height,
            workgroups.0,
            workgroups.1
        );
    }

    fn blit(&mut self, frame: &PassFrame, _encoder: &mut wgpu::CommandEncoder, src: &GpuTexture) {
        let e = src.extent();
        log::trace!(
            "frame {}: blit {}x{} to display",
            frame.plan.frame_index,
            e.width,
            e.height
        );
    }
}

fn orbit_camera(time: f32) -> Mat4 {
    let angle = time * 0.25;
    let eye = Vec3::new(angle.cos() * 8.0, 2.0, angle.sin() * 8.0);
    Mat4::look_at_rh(eye, Vec3::new(0.0, 1.5, 0.0), Vec3::Y)
}

fn run(args: &Args, settings: &ReconstructionSettings, ctx: &WgpuContext) -> anyhow::Result<()> {
    let mut renderer = Reconstructor::<GpuTexture>::new(settings)?;
    let mut state = DemoState::new(settings.animations);
    let mut views = ViewHistory::default();
    let executor = FrameExecutor::new(&ctx.device);
    let mut passes = TracePasses;

    let (width, height) = renderer.display_size();
    let display_target = ctx.create_display_target(width, height);

    log::info!("{}", mode_title(renderer.mode()));

    for frame in 0..args.frames {
        // Simulated "T" key press
        if args.cycle_every > 0
            && frame > 0
            && frame.is_multiple_of(args.cycle_every)
            && let Some(command) = Command::from_char('t')
            && state.handle(command, &mut renderer)
        {
            views.clear();
            log::info!("{}", mode_title(renderer.mode()));
        }

        let mut allocator = WgpuAllocator::new(&ctx.device);
        let plan = renderer.prepare_frame(&mut allocator);
        if plan.frame_has_been_reset {
            log::debug!(
                "frame {}: reset (generation {}, render {}x{})",
                plan.frame_index,
                plan.generation.get(),
                plan.render_size.0,
                plan.render_size.1
            );
        }

        let frame_views = views.advance(orbit_camera(state.clock.time()), &plan);
        let resources = renderer
            .resources()
            .context("resource set missing after prepare_frame")?;
        executor.execute(ctx, &plan, &frame_views, resources, &mut passes, &display_target);

        state.clock.tick(FRAME_DT);
        renderer.end_frame();
    }

    log::info!(
        "Rendered {} frames through '{}' passes",
        renderer.frame_index(),
        passes.name()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = match WgpuContext::new_blocking(&settings) {
        Ok(ctx) => ctx,
        Err(e @ ReconstructError::UnsupportedBackend(_)) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            log::error!("Cannot initialize a graphics device for the {} backend: {e}", settings.backend);
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &settings, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
