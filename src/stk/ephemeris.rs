// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! STK ephemeris (`.e`) product in `EphemerisTimePos` form.
//!
//! Only positions are written; STK derives velocity by interpolation.

use super::constants::*;
use super::conversion::ConversionConfig;
use super::format::format_real;

/// Render the ephemeris product with the default conversion.
pub fn emit_ephemeris(times: &[u32], positions: &[[i32; 3]]) -> String {
    emit_ephemeris_with(&ConversionConfig::default(), times, positions)
}

/// Render the ephemeris product.
pub fn emit_ephemeris_with(
    conversion: &ConversionConfig,
    times: &[u32],
    positions: &[[i32; 3]],
) -> String {
    let mut out = String::with_capacity(256 + times.len() * 80);

    let count_line = format!("{EPHEMERIS_POINTS} {}", times.len());
    for line in [
        STK_VERSION,
        EPHEMERIS_BEGIN,
        count_line.as_str(),
        SCENARIO_EPOCH,
        INTERPOLATION_METHOD,
        DISTANCE_UNIT,
        CENTRAL_BODY,
        COORDINATE_SYSTEM,
        EPHEMERIS_TIME_POS,
    ] {
        out.push_str(line);
        out.push('\n');
    }

    for (&time, position) in times.iter().zip(positions) {
        let [x, y, z] = conversion.scaled_position(position);
        out.push_str(&format!(
            "{} {} {} {}\n",
            format_real(conversion.scaled_time(time)),
            format_real(x),
            format_real(y),
            format_real(z),
        ));
    }

    out.push_str(EPHEMERIS_END);
    out
}
