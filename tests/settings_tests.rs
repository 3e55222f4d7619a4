//! Settings & Configuration Tests
//!
//! Tests for:
//! - ReconstructionSettings: defaults, validation, JSON loading
//! - GraphicsBackend: parsing, D3D11 rejection
//! - ReconstructError: messages

use myth_reconstruct::ReconstructError;
use myth_reconstruct::renderer::settings::{
    GraphicsBackend, PowerPreference, ReconstructionSettings,
};
use myth_reconstruct::resources::AaMode;

// ============================================================================
// Defaults & Validation
// ============================================================================

#[test]
fn defaults() {
    let s = ReconstructionSettings::default();
    assert_eq!(s.display_size(), (1280, 720));
    assert!((s.sampling_rate - 0.5).abs() < f32::EPSILON);
    assert_eq!(s.initial_mode, AaMode::TemporalSupersampling);
    assert!(s.vsync);
    assert!(s.animations);
    assert_eq!(s.backend, GraphicsBackend::Auto);
    assert_eq!(s.power_preference, PowerPreference::HighPerformance);
    assert!((s.rcas_attenuation - 0.25).abs() < f32::EPSILON);
    assert!(s.validate().is_ok());
}

#[test]
fn sampling_rate_must_be_in_unit_interval() {
    for rate in [0.0, -0.5, 1.01, f32::NAN, f32::INFINITY] {
        let s = ReconstructionSettings {
            sampling_rate: rate,
            ..Default::default()
        };
        assert!(
            matches!(s.validate(), Err(ReconstructError::InvalidSamplingRate(_))),
            "rate {rate} accepted"
        );
    }

    for rate in [0.1, 0.5, 1.0] {
        let s = ReconstructionSettings {
            sampling_rate: rate,
            ..Default::default()
        };
        assert!(s.validate().is_ok());
    }
}

#[test]
fn zero_resolution_is_rejected() {
    let s = ReconstructionSettings {
        display_width: 0,
        ..Default::default()
    };
    let err = s.validate().unwrap_err();
    assert!(matches!(
        err,
        ReconstructError::InvalidResolution {
            width: 0,
            height: 720
        }
    ));
    assert!(err.to_string().contains("0x720"));
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn json_missing_fields_use_defaults() {
    let s = ReconstructionSettings::from_json_str(
        r#"{ "initial_mode": "fsr_rcas", "sampling_rate": 0.75 }"#,
    )
    .unwrap();
    assert_eq!(s.initial_mode, AaMode::FsrWithRcas);
    assert!((s.sampling_rate - 0.75).abs() < f32::EPSILON);
    assert_eq!(s.display_size(), (1280, 720));
}

#[test]
fn json_accepts_every_mode_key() {
    for mode in AaMode::all() {
        let json = format!(r#"{{ "initial_mode": "{}" }}"#, mode.key());
        let s = ReconstructionSettings::from_json_str(&json).unwrap();
        assert_eq!(s.initial_mode, *mode);
    }
}

#[test]
fn json_writes_mode_keys() {
    let s = ReconstructionSettings {
        initial_mode: AaMode::FsrWithRcas,
        ..Default::default()
    };
    let text = s.to_json_string().unwrap();
    assert!(text.contains(r#""initial_mode": "fsr_rcas""#), "{text}");
}

#[test]
fn json_round_trip() {
    let original = ReconstructionSettings {
        display_width: 1920,
        display_height: 1080,
        backend: GraphicsBackend::Vulkan,
        vsync: false,
        ..Default::default()
    };
    let text = original.to_json_string().unwrap();
    assert_eq!(ReconstructionSettings::from_json_str(&text).unwrap(), original);
}

#[test]
fn json_with_invalid_values_fails_validation() {
    let err = ReconstructionSettings::from_json_str(r#"{ "sampling_rate": 2.0 }"#).unwrap_err();
    assert!(matches!(err, ReconstructError::InvalidSamplingRate(_)));

    let err = ReconstructionSettings::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ReconstructError::JsonError(_)));
}

#[test]
fn json_file_loading() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let path = std::env::temp_dir().join(format!(
        "myth_reconstruct_settings_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{ "initial_mode": "taa", "backend": "gl" }"#)?;
    let s = ReconstructionSettings::from_json_file(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(s.initial_mode, AaMode::TemporalAntialiasing);
    assert_eq!(s.backend, GraphicsBackend::Gl);
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let err = ReconstructionSettings::from_json_file("/nonexistent/settings.json").unwrap_err();
    assert!(matches!(err, ReconstructError::IoError(_)));
}

// ============================================================================
// GraphicsBackend
// ============================================================================

#[test]
fn backend_parsing_accepts_aliases() {
    assert_eq!("vulkan".parse::<GraphicsBackend>().unwrap(), GraphicsBackend::Vulkan);
    assert_eq!("VK".parse::<GraphicsBackend>().unwrap(), GraphicsBackend::Vulkan);
    assert_eq!("d3d12".parse::<GraphicsBackend>().unwrap(), GraphicsBackend::Dx12);
    assert_eq!("opengl".parse::<GraphicsBackend>().unwrap(), GraphicsBackend::Gl);
    assert_eq!("dx11".parse::<GraphicsBackend>().unwrap(), GraphicsBackend::Dx11);
    assert!("glide".parse::<GraphicsBackend>().is_err());
}

#[test]
fn d3d11_is_unsupported() {
    let err = GraphicsBackend::Dx11.to_wgpu().unwrap_err();
    assert!(matches!(err, ReconstructError::UnsupportedBackend(_)));
}

#[test]
fn backends_map_to_wgpu() {
    assert_eq!(GraphicsBackend::Auto.to_wgpu().unwrap(), None);
    assert_eq!(
        GraphicsBackend::Metal.to_wgpu().unwrap(),
        Some(wgpu::Backend::Metal)
    );
    assert_eq!(
        GraphicsBackend::Dx12.to_wgpu().unwrap(),
        Some(wgpu::Backend::Dx12)
    );
}

#[test]
fn backend_display_matches_name() {
    assert_eq!(GraphicsBackend::Dx12.to_string(), "dx12");
}
