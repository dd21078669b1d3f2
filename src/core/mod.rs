// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout tlmstk.
//!
//! This module provides the foundational types for the library:
//! - [`TelemetryError`] - Error handling for decoding and product output
//! - [`ByteOrder`] - Byte order of the integer fields in a telemetry record

pub mod error;

pub use error::{Result, TelemetryError};

use serde::{Deserialize, Serialize};

/// Byte order of the integer fields inside a record.
///
/// Recordings are produced by the capture host, so `Native` is the default.
/// Use `Little` or `Big` when the file came from a different architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Byte order of the machine running the decoder
    #[default]
    Native,
    /// Little endian
    Little,
    /// Big endian
    Big,
}

/// Error returned when parsing a `ByteOrder` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseByteOrderError {
    _private: (),
}

impl std::fmt::Display for ParseByteOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid byte order, expected 'native', 'little', or 'big'"
        )
    }
}

impl std::error::Error for ParseByteOrderError {}

impl std::str::FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(ByteOrder::Native),
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            _ => Err(ParseByteOrderError { _private: () }),
        }
    }
}

impl ByteOrder {
    /// Resolve `Native` to the concrete order of the running host.
    pub fn resolve(&self) -> ByteOrder {
        match self {
            ByteOrder::Native if cfg!(target_endian = "big") => ByteOrder::Big,
            ByteOrder::Native => ByteOrder::Little,
            other => *other,
        }
    }

    /// Check if fields are read little endian on this host.
    pub fn is_little(&self) -> bool {
        matches!(self.resolve(), ByteOrder::Little)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ByteOrder::Native => "native",
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        }
    }
}
