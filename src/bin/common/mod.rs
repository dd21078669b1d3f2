// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for the CLI.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use tlmstk::TelemetryError;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// The `1 Jan 2000 00:00:00` scenario epoch of the STK products.
fn scenario_epoch() -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(2000, 1, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

/// Format seconds from the scenario epoch as a UTC calendar instant.
pub fn format_timestamp(seconds: f64) -> String {
    let datetime = TimeDelta::try_milliseconds((seconds * 1000.0).round() as i64)
        .and_then(|offset| scenario_epoch()?.checked_add_signed(offset));

    match datetime {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string(),
        None => format!("{seconds} s"),
    }
}

/// Structured fields of a failed run, for logging.
///
/// Errors raised outside the library carry only their message.
pub fn failure_fields(err: &anyhow::Error) -> Vec<(&'static str, String)> {
    match err.downcast_ref::<TelemetryError>() {
        Some(telemetry_err) => telemetry_err.log_fields(),
        None => vec![("message", err.to_string())],
    }
}
