// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for tlmstk.
//!
//! Provides error types for the conversion pipeline:
//! - Record window bounds
//! - File I/O for the telemetry input and the STK products
//! - Layout and conversion configuration

use thiserror::Error;

/// Errors that can occur while decoding telemetry or writing STK products.
#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    /// Buffer too short for a record field window
    #[error(
        "Buffer too short: requested {requested} bytes at offset {offset}, but only {available} bytes available"
    )]
    BufferTooShort {
        /// Requested bytes
        requested: usize,
        /// Available bytes from `offset` to the end of the buffer
        available: usize,
        /// Byte offset where the read started
        offset: usize,
    },

    /// File I/O error
    #[error("I/O error in {context}: {message}")]
    Io {
        /// What was being read or written
        context: String,
        /// Error message
        message: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl TelemetryError {
    /// Create a buffer too short error.
    pub fn buffer_too_short(requested: usize, available: usize, offset: usize) -> Self {
        TelemetryError::BufferTooShort {
            requested,
            available,
            offset,
        }
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, message: impl Into<String>) -> Self {
        TelemetryError::Io {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        TelemetryError::Config {
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            TelemetryError::BufferTooShort {
                requested,
                available,
                offset,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("offset", offset.to_string()),
            ],
            TelemetryError::Io { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            TelemetryError::Config { message } => vec![("message", message.clone())],
        }
    }
}

impl From<std::io::Error> for TelemetryError {
    fn from(err: std::io::Error) -> Self {
        TelemetryError::io("IO", err.to_string())
    }
}

impl From<toml::de::Error> for TelemetryError {
    fn from(err: toml::de::Error) -> Self {
        TelemetryError::config(err.to_string())
    }
}

/// Result type for tlmstk operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;
