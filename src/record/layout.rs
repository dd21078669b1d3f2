// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Telemetry record layout.
//!
//! Every record of a recording is a fixed-size block. The fields the
//! converter needs sit at fixed byte offsets from the block start:
//!
//! ```text
//! offset  65  u32      time, TAI ticks from J2000
//! offset 112  3 x i32  position, ECI
//! offset 206  4 x i32  attitude quaternion
//! ```

use serde::{Deserialize, Serialize};

use crate::{Result, TelemetryError};

/// Size of one telemetry record in bytes.
pub const BLOCK_SIZE: usize = 2068;
/// Offset of the time field within a record.
pub const TIME_OFFSET: usize = 65;
/// Offset of the ECI position vector within a record.
pub const POSITION_OFFSET: usize = 112;
/// Offset of the attitude quaternion within a record.
pub const ATTITUDE_OFFSET: usize = 206;

/// Width of the time field (one u32).
pub const TIME_LEN: usize = 4;
/// Width of the position field (three i32).
pub const POSITION_LEN: usize = 12;
/// Width of the attitude field (four i32).
pub const ATTITUDE_LEN: usize = 16;

/// Byte layout of a telemetry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordLayout {
    /// Size of one record in bytes
    pub block_size: usize,
    /// Offset of the u32 time field
    pub time_offset: usize,
    /// Offset of the 3 x i32 position field
    pub position_offset: usize,
    /// Offset of the 4 x i32 attitude field
    pub attitude_offset: usize,
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            time_offset: TIME_OFFSET,
            position_offset: POSITION_OFFSET,
            attitude_offset: ATTITUDE_OFFSET,
        }
    }
}

impl RecordLayout {
    /// Number of bytes from the record start to the end of the last field.
    ///
    /// With the default layout this is 222, the end of the attitude window.
    pub fn span(&self) -> usize {
        (self.time_offset + TIME_LEN)
            .max(self.position_offset + POSITION_LEN)
            .max(self.attitude_offset + ATTITUDE_LEN)
    }

    /// Check that every field window fits inside one block.
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(TelemetryError::config("block_size must be non-zero"));
        }
        if self.span() > self.block_size {
            return Err(TelemetryError::config(format!(
                "field windows end at byte {} but block_size is {}",
                self.span(),
                self.block_size
            )));
        }
        Ok(())
    }

    /// Number of complete records in a buffer of `len` bytes.
    ///
    /// A trailing partial record is not counted.
    #[inline]
    pub fn num_blocks(&self, len: usize) -> usize {
        len / self.block_size
    }

    /// Number of bytes left over after the last complete record.
    #[inline]
    pub fn trailing_bytes(&self, len: usize) -> usize {
        len % self.block_size
    }

    /// Byte offset of record `block_number`.
    #[inline]
    pub fn get_offset(&self, block_number: usize) -> usize {
        block_number * self.block_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = RecordLayout::default();
        assert_eq!(layout.block_size, 2068);
        assert_eq!(layout.time_offset, 65);
        assert_eq!(layout.position_offset, 112);
        assert_eq!(layout.attitude_offset, 206);
        assert_eq!(layout.span(), 222);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_num_blocks_truncates() {
        let layout = RecordLayout::default();
        for k in [0usize, 1, 2, 7, 100] {
            for r in [0usize, 1, 221, 222, 2067] {
                let len = k * BLOCK_SIZE + r;
                assert_eq!(layout.num_blocks(len), k, "len = {len}");
                assert_eq!(layout.trailing_bytes(len), r, "len = {len}");
            }
        }
    }

    #[test]
    fn test_get_offset() {
        let layout = RecordLayout::default();
        assert_eq!(layout.get_offset(0), 0);
        assert_eq!(layout.get_offset(1), 2068);
        assert_eq!(layout.get_offset(10), 20680);
        assert_eq!(layout.get_offset(123_456), 123_456 * 2068);
    }

    #[test]
    fn test_validate_rejects_field_past_block() {
        let layout = RecordLayout {
            block_size: 200,
            ..RecordLayout::default()
        };
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("222"));
    }

    #[test]
    fn test_validate_rejects_zero_block() {
        let layout = RecordLayout {
            block_size: 0,
            ..RecordLayout::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_span_follows_furthest_field() {
        let layout = RecordLayout {
            block_size: 64,
            time_offset: 40,
            position_offset: 0,
            attitude_offset: 12,
        };
        assert_eq!(layout.span(), 44);
        assert!(layout.validate().is_ok());
    }
}
