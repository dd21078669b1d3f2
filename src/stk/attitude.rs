// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! STK attitude (`.a`) product.
//!
//! ```text
//! stk.v.11.7
//! BEGIN Attitude
//! NumberOfAttitudePoints 2
//! ...
//! AttitudeTimeQuaternions
//! 683.0 1.0 0.0 0.0 0.0
//! 683.2 1.0 0.0 0.0 0.0
//! END Attitude
//! ```

use super::constants::*;
use super::conversion::ConversionConfig;
use super::format::format_real;

/// Render the attitude product with the default conversion.
pub fn emit_attitude(times: &[u32], attitudes: &[[i32; 4]]) -> String {
    emit_attitude_with(&ConversionConfig::default(), times, attitudes)
}

/// Render the attitude product.
///
/// Writes one data line per entry of `times`; the series are zipped, so
/// they are expected to have equal length.
pub fn emit_attitude_with(
    conversion: &ConversionConfig,
    times: &[u32],
    attitudes: &[[i32; 4]],
) -> String {
    let mut out = String::with_capacity(256 + times.len() * 96);

    let count_line = format!("{ATTITUDE_POINTS} {}", times.len());
    for line in [
        STK_VERSION,
        ATTITUDE_BEGIN,
        count_line.as_str(),
        SCENARIO_EPOCH,
        INTERPOLATION_METHOD,
        CENTRAL_BODY,
        COORDINATE_AXES,
        ATTITUDE_TIME_QUATERNIONS,
    ] {
        out.push_str(line);
        out.push('\n');
    }

    for (&time, attitude) in times.iter().zip(attitudes) {
        let [q1, q2, q3, q4] = conversion.scaled_attitude(attitude);
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            format_real(conversion.scaled_time(time)),
            format_real(q1),
            format_real(q2),
            format_real(q3),
            format_real(q4),
        ));
    }

    out.push_str(ATTITUDE_END);
    out
}
