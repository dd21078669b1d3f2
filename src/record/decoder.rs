// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Record decoder for fixed-offset telemetry fields.
//!
//! The decoder reads the raw integers of one record. No unit conversion
//! happens here; scaling is applied by the STK emitters.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tlmstk::record::decoder::RecordDecoder;
//!
//! let data = std::fs::read("telemetry.bin")?;
//! let sample = RecordDecoder::default().decode(&data, 0)?;
//! println!("t = {} q = {:?}", sample.time, sample.attitude);
//! # Ok(())
//! # }
//! ```

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use super::layout::{RecordLayout, ATTITUDE_LEN, POSITION_LEN, TIME_LEN};
use crate::{ByteOrder, Result, TelemetryError};

/// Raw fields of one telemetry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EpochSample {
    /// Time in TAI ticks from J2000
    pub time: u32,
    /// ECI position (x, y, z)
    pub position: [i32; 3],
    /// Attitude quaternion (q1, q2, q3, q4)
    pub attitude: [i32; 4],
}

/// Decodes [`EpochSample`]s from record windows in a byte buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordDecoder {
    layout: RecordLayout,
    byte_order: ByteOrder,
}

impl RecordDecoder {
    /// Create a decoder for the given layout, reading host byte order.
    pub fn new(layout: RecordLayout) -> Self {
        Self {
            layout,
            byte_order: ByteOrder::Native,
        }
    }

    /// Set the byte order of the integer fields.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// The record layout this decoder reads.
    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    /// The byte order this decoder reads.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Decode the record that starts at byte `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::BufferTooShort`] if any field window
    /// extends past the end of `buffer`.
    pub fn decode(&self, buffer: &[u8], offset: usize) -> Result<EpochSample> {
        let time_bytes = window(buffer, offset, self.layout.time_offset, TIME_LEN)?;
        let position_bytes = window(buffer, offset, self.layout.position_offset, POSITION_LEN)?;
        let attitude_bytes = window(buffer, offset, self.layout.attitude_offset, ATTITUDE_LEN)?;

        let mut sample = EpochSample::default();
        if self.byte_order.is_little() {
            sample.time = LittleEndian::read_u32(time_bytes);
            LittleEndian::read_i32_into(position_bytes, &mut sample.position);
            LittleEndian::read_i32_into(attitude_bytes, &mut sample.attitude);
        } else {
            sample.time = BigEndian::read_u32(time_bytes);
            BigEndian::read_i32_into(position_bytes, &mut sample.position);
            BigEndian::read_i32_into(attitude_bytes, &mut sample.attitude);
        }
        Ok(sample)
    }
}

/// Decode the record at `offset` with the default layout and host byte order.
pub fn decode(buffer: &[u8], offset: usize) -> Result<EpochSample> {
    RecordDecoder::default().decode(buffer, offset)
}

/// Borrow the `len`-byte field at `field_offset` within the record at `offset`.
fn window(buffer: &[u8], offset: usize, field_offset: usize, len: usize) -> Result<&[u8]> {
    let start = offset.saturating_add(field_offset);
    let available = buffer.len().saturating_sub(start);
    match start.checked_add(len) {
        Some(end) if end <= buffer.len() => Ok(&buffer[start..end]),
        _ => Err(TelemetryError::buffer_too_short(len, available, start)),
    }
}
