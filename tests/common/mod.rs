// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use tlmstk::record::layout::{ATTITUDE_OFFSET, BLOCK_SIZE, POSITION_OFFSET, TIME_OFFSET};
use tlmstk::EpochSample;

// ============================================================================
// Synthetic Recordings
// ============================================================================

/// Builds telemetry recordings record by record.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuilder {
    data: Vec<u8>,
    big_endian: bool,
}

impl RecordingBuilder {
    /// Builder writing fields in host byte order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder writing fields big endian.
    pub fn big_endian() -> Self {
        Self {
            data: Vec::new(),
            big_endian: true,
        }
    }

    /// Append one record. Bytes outside the decoded fields are filled
    /// with a pattern so that misaligned reads are visible.
    pub fn record(mut self, sample: EpochSample) -> Self {
        let start = self.data.len();
        self.data
            .extend((0..BLOCK_SIZE).map(|i| (i % 251) as u8 ^ 0xA5));

        let big = self.big_endian;
        let record = &mut self.data[start..];
        put(record, TIME_OFFSET, u32_bytes(sample.time, big));
        for (i, v) in sample.position.iter().enumerate() {
            put(record, POSITION_OFFSET + 4 * i, i32_bytes(*v, big));
        }
        for (i, v) in sample.attitude.iter().enumerate() {
            put(record, ATTITUDE_OFFSET + 4 * i, i32_bytes(*v, big));
        }
        self
    }

    /// Append `len` bytes of a partial trailing record.
    pub fn trailing(mut self, len: usize) -> Self {
        self.data.extend(std::iter::repeat(0xEE).take(len));
        self
    }

    /// Finish and return the recording bytes.
    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

fn u32_bytes(v: u32, big: bool) -> [u8; 4] {
    if big {
        v.to_be_bytes()
    } else {
        v.to_ne_bytes()
    }
}

fn i32_bytes(v: i32, big: bool) -> [u8; 4] {
    if big {
        v.to_be_bytes()
    } else {
        v.to_ne_bytes()
    }
}

fn put(record: &mut [u8], offset: usize, bytes: [u8; 4]) {
    record[offset..offset + 4].copy_from_slice(&bytes);
}

/// Shorthand for building an [`EpochSample`].
pub fn sample(time: u32, position: [i32; 3], attitude: [i32; 4]) -> EpochSample {
    EpochSample {
        time,
        position,
        attitude,
    }
}

// ============================================================================
// Product Parsing
// ============================================================================

/// Data lines between the section keyword and the `END` marker.
pub fn data_lines<'a>(text: &'a str, section_keyword: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != section_keyword)
        .skip(1)
        .take_while(|line| !line.starts_with("END "))
        .collect()
}

/// Parse a data line into its numeric fields.
pub fn parse_fields(line: &str) -> Vec<f64> {
    line.split(' ')
        .map(|field| field.parse::<f64>().unwrap())
        .collect()
}
