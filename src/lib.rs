// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # tlmstk
//!
//! Satellite telemetry decoder that produces STK trajectory products.
//!
//! A recording is a sequence of fixed-size binary records. Each record
//! carries an epoch time, an ECI position and an attitude quaternion at
//! fixed byte offsets. This library decodes those fields and renders:
//! - an **attitude** product (`Attitude.a`, `AttitudeTimeQuaternions`)
//! - an **ephemeris** product (`Ephemeris.e`, `EphemerisTimePos`)
//!
//! ## Architecture
//!
//! - `record/` - Record layout, single-record decoder and batch extractor
//! - `stk/` - Conversion constants and the two text emitters
//! - `io/` - Memory-mapped input
//! - `config` - TOML-loadable layout, byte order and conversion settings
//! - `pipeline` - End-to-end run from input file to both products
//!
//! ## Example: Decoding in memory
//!
//! ```rust
//! use tlmstk::record::extract;
//! use tlmstk::stk::{emit_attitude, emit_ephemeris};
//!
//! let series = extract(&[])?;
//! let attitude = emit_attitude(&series.times, &series.attitudes);
//! let ephemeris = emit_ephemeris(&series.times, &series.positions);
//! assert!(attitude.contains("NumberOfAttitudePoints 0"));
//! assert!(ephemeris.ends_with("END Ephemeris"));
//! # Ok::<(), tlmstk::TelemetryError>(())
//! ```

// Core types
pub mod core;

pub use self::core::{ByteOrder, Result, TelemetryError};

// Record decoding
pub mod record;

pub use record::{BatchExtractor, EpochSample, RecordDecoder, RecordLayout, SampleSeries};

// STK products
pub mod stk;

pub use stk::{emit_attitude, emit_ephemeris, ConversionConfig};

// Input
pub mod io;

pub use io::MmapArena;

// Configuration
pub mod config;

pub use config::PipelineConfig;

// End-to-end conversion
pub mod pipeline;

pub use pipeline::{Pipeline, RunSummary};
