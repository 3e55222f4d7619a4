//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The reconstruction logic itself (mode selection, jitter, pass planning)
//! is total and never fails. Every [`ReconstructError`] therefore originates
//! at the edges:
//! - GPU adapter / device acquisition
//! - Backend selection
//! - Settings validation and configuration file loading
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, ReconstructError>`.

use thiserror::Error;

/// The main error type for the reconstruction pipeline.
#[derive(Error, Debug)]
pub enum ReconstructError {
    // ========================================================================
    // GPU & Backend Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// The requested graphics backend cannot drive this demo.
    #[error("Unsupported graphics backend: {0}")]
    UnsupportedBackend(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Sampling rate outside of `(0, 1]`.
    #[error("Sampling rate must lie in (0, 1], got {0}")]
    InvalidSamplingRate(f32),

    /// Display resolution with a zero dimension.
    #[error("Display resolution must be non-zero, got {width}x{height}")]
    InvalidResolution {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// Unknown anti-aliasing mode name.
    #[error("Unknown AA mode: {0}")]
    UnknownMode(String),

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// Configuration file I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, ReconstructError>`.
pub type Result<T> = std::result::Result<T, ReconstructError>;
