// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! STK external file constants.
//!
//! Keyword spacing is significant to the importer and is kept exactly as
//! the products have always been written.

/// Version line opening every STK data file.
pub const STK_VERSION: &str = "stk.v.11.7";

/// Scenario epoch that scaled times are relative to.
pub const SCENARIO_EPOCH: &str = "ScenarioEpoch           1 Jan 2000 00:00:00.000000000";
/// Interpolation used by STK between points.
pub const INTERPOLATION_METHOD: &str = "InterpolationMethod     Lagrange";
/// Central body of the trajectory.
pub const CENTRAL_BODY: &str = "CentralBody             Earth";

/// Default attitude product file name.
pub const ATTITUDE_FILE: &str = "Attitude.a";
/// Opening line of the attitude block.
pub const ATTITUDE_BEGIN: &str = "BEGIN Attitude";
/// Closing line of the attitude block.
pub const ATTITUDE_END: &str = "END Attitude";
/// Point count keyword of the attitude block.
pub const ATTITUDE_POINTS: &str = "NumberOfAttitudePoints";
/// Reference axes of the quaternions.
pub const COORDINATE_AXES: &str = "CoordinateAxes        J2000";
/// Data section keyword for time + quaternion lines.
pub const ATTITUDE_TIME_QUATERNIONS: &str = "AttitudeTimeQuaternions";

/// Default ephemeris product file name.
pub const EPHEMERIS_FILE: &str = "Ephemeris.e";
/// Opening line of the ephemeris block.
pub const EPHEMERIS_BEGIN: &str = "BEGIN Ephemeris";
/// Closing line of the ephemeris block.
pub const EPHEMERIS_END: &str = "END Ephemeris";
/// Point count keyword of the ephemeris block.
pub const EPHEMERIS_POINTS: &str = "NumberOfEphemerisPoints";
/// Unit of the position values.
pub const DISTANCE_UNIT: &str = "DistanceUnit           Kilometers";
/// Reference frame of the positions.
pub const COORDINATE_SYSTEM: &str = "CoordinateSystem        J2000";
/// Data section keyword for time + position lines.
pub const EPHEMERIS_TIME_POS: &str = "EphemerisTimePos";
