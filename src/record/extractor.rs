// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Batch extraction of every record in a recording.

use tracing::{debug, warn};

use super::decoder::{EpochSample, RecordDecoder};
use super::layout::{RecordLayout, BLOCK_SIZE};
use crate::Result;

/// Parallel, index-aligned series decoded from a recording.
///
/// Entry `i` of every series comes from record `i`, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSeries {
    /// Raw time of each record
    pub times: Vec<u32>,
    /// Raw ECI position of each record
    pub positions: Vec<[i32; 3]>,
    /// Raw attitude quaternion of each record
    pub attitudes: Vec<[i32; 4]>,
}

impl SampleSeries {
    /// Create empty series with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            attitudes: Vec::with_capacity(capacity),
        }
    }

    /// Append one decoded record.
    pub fn push(&mut self, sample: EpochSample) {
        self.times.push(sample.time);
        self.positions.push(sample.position);
        self.attitudes.push(sample.attitude);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if no records were decoded.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate the records as [`EpochSample`]s.
    pub fn samples(&self) -> impl Iterator<Item = EpochSample> + '_ {
        self.times
            .iter()
            .zip(&self.positions)
            .zip(&self.attitudes)
            .map(|((&time, &position), &attitude)| EpochSample {
                time,
                position,
                attitude,
            })
    }
}

impl FromIterator<EpochSample> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = EpochSample>>(iter: I) -> Self {
        let mut series = SampleSeries::default();
        for sample in iter {
            series.push(sample);
        }
        series
    }
}

/// Drives a [`RecordDecoder`] across every complete record of a buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchExtractor {
    decoder: RecordDecoder,
}

impl BatchExtractor {
    /// Create an extractor around a configured decoder.
    pub fn new(decoder: RecordDecoder) -> Self {
        Self { decoder }
    }

    /// The decoder used for each record.
    pub fn decoder(&self) -> &RecordDecoder {
        &self.decoder
    }

    /// Decode every complete record in `buffer`.
    ///
    /// A trailing partial record is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Config`](crate::TelemetryError::Config) if
    /// the decoder's layout does not fit in one block.
    pub fn extract(&self, buffer: &[u8]) -> Result<SampleSeries> {
        let layout = self.decoder.layout();
        layout.validate()?;
        let count = layout.num_blocks(buffer.len());
        let trailing = layout.trailing_bytes(buffer.len());

        debug!(
            records = count,
            bytes = buffer.len(),
            byte_order = self.decoder.byte_order().as_str(),
            "Extracting telemetry records"
        );
        if trailing > 0 {
            warn!(
                trailing_bytes = trailing,
                block_size = layout.block_size,
                "Ignoring partial record at end of buffer"
            );
        }

        let mut series = SampleSeries::with_capacity(count);
        for record in 0..count {
            let sample = self.decoder.decode(buffer, layout.get_offset(record))?;
            series.push(sample);
        }
        Ok(series)
    }
}

/// Decode every complete record with the default layout and host byte order.
pub fn extract(buffer: &[u8]) -> Result<SampleSeries> {
    BatchExtractor::default().extract(buffer)
}

/// Number of complete default-layout records in a buffer of `len` bytes.
pub fn num_blocks(len: usize) -> usize {
    RecordLayout::default().num_blocks(len)
}

/// Byte offset of default-layout record `block_number`.
pub fn get_offset(block_number: usize) -> usize {
    block_number * BLOCK_SIZE
}
