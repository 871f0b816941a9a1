//! Error Types
//!
//! This module defines the error types used throughout the viewer.
//!
//! # Overview
//!
//! The main error type [`Error`] covers:
//! - GPU initialization failures
//! - Window and event loop failures
//! - Asset loading and decoding errors (see [`AssetError`])
//! - Configuration parsing errors
//!
//! A failed model load is never surfaced to the animation controller: the
//! loader logs the error and its completion handle simply never resolves.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vixen_core::{Error, Result};
//!
//! fn load_config() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Errors raised while reading or decoding model files.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The file could not be parsed as glTF.
    #[error("glTF decode error: {0}")]
    Gltf(String),

    /// The file needs an extension the decoder does not implement.
    #[error("Unsupported glTF extension `{extension}` required by {path}")]
    UnsupportedExtension {
        /// Extension name as written in `extensionsRequired`
        extension: String,
        /// Path of the model that requires it
        path: String,
    },

    /// An accessor the loader depends on is missing or malformed.
    #[error("Malformed accessor data: {context}")]
    MalformedData {
        /// Description of what was being read
        context: String,
    },
}

/// The main error type for the viewer.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(String),

    /// The window surface could not be created or acquired.
    #[error("Surface error: {0}")]
    SurfaceError(String),

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(String),

    /// Event loop error.
    #[error("Event loop error: {0}")]
    EventLoopError(String),

    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// Asset loading or decoding error.
    #[error(transparent)]
    Asset(#[from] AssetError),

    // ========================================================================
    // I/O & Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
