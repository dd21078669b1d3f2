// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-size telemetry record decoding.
//!
//! - [`layout`] - Record size and field offsets
//! - [`decoder`] - Decode one record window into an [`EpochSample`]
//! - [`extractor`] - Decode every record into a [`SampleSeries`]

pub mod decoder;
pub mod extractor;
pub mod layout;

pub use decoder::{decode, EpochSample, RecordDecoder};
pub use extractor::{extract, get_offset, num_blocks, BatchExtractor, SampleSeries};
pub use layout::{RecordLayout, BLOCK_SIZE};
