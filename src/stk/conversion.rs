// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Scale and offset constants from raw telemetry counts to STK units.
//!
//! Time is a rough linear approximation: raw ticks are scaled to seconds
//! and shifted by the TAI-UTC difference so that values line up with the
//! `1 Jan 2000 00:00:00` scenario epoch. Leap seconds and calendar effects
//! are not modelled.

use serde::{Deserialize, Serialize};

/// Seconds per raw time tick.
pub const TIME_SCALE: f64 = 0.2;
/// Seconds subtracted after scaling (TAI to UTC).
pub const TIME_OFFSET: f64 = 37.0;
/// Quaternion units per raw attitude count.
pub const ATTITUDE_SCALE: f64 = 5e-10;
/// Kilometers per raw position count.
pub const POSITION_SCALE: f64 = 2.00e-5;

/// Conversion from raw record integers to STK values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Seconds per raw time tick
    pub time_scale: f64,
    /// Seconds subtracted from the scaled time
    pub time_offset: f64,
    /// Multiplier for each quaternion component
    pub attitude_scale: f64,
    /// Multiplier for each position component
    pub position_scale: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE,
            time_offset: TIME_OFFSET,
            attitude_scale: ATTITUDE_SCALE,
            position_scale: POSITION_SCALE,
        }
    }
}

impl ConversionConfig {
    /// Seconds from the scenario epoch for a raw time value.
    #[inline]
    pub fn scaled_time(&self, time: u32) -> f64 {
        f64::from(time) * self.time_scale - self.time_offset
    }

    /// Scaled quaternion components, not normalized.
    #[inline]
    pub fn scaled_attitude(&self, attitude: &[i32; 4]) -> [f64; 4] {
        attitude.map(|q| f64::from(q) * self.attitude_scale)
    }

    /// Scaled position components in kilometers.
    #[inline]
    pub fn scaled_position(&self, position: &[i32; 3]) -> [f64; 3] {
        position.map(|p| f64::from(p) * self.position_scale)
    }
}
