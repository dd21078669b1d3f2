// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! STK text products.
//!
//! - [`attitude`] - `.a` attitude quaternion file
//! - [`ephemeris`] - `.e` position ephemeris file
//! - [`conversion`] - Raw count to STK unit constants
//! - [`format`] - Number rendering shared by both products

pub mod attitude;
pub mod constants;
pub mod conversion;
pub mod ephemeris;
pub mod format;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::record::SampleSeries;
use crate::{Result, TelemetryError};

pub use attitude::{emit_attitude, emit_attitude_with};
pub use conversion::ConversionConfig;
pub use ephemeris::{emit_ephemeris, emit_ephemeris_with};
pub use format::format_real;

/// Write both STK products for `series`.
///
/// The attitude file is written first. A failure writing either file is
/// returned as-is; a file already written is left in place.
pub fn write_products(
    series: &SampleSeries,
    conversion: &ConversionConfig,
    attitude_path: &Path,
    ephemeris_path: &Path,
) -> Result<()> {
    let attitude = emit_attitude_with(conversion, &series.times, &series.attitudes);
    write_text(attitude_path, &attitude)?;

    let ephemeris = emit_ephemeris_with(conversion, &series.times, &series.positions);
    write_text(ephemeris_path, &ephemeris)?;

    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| {
        TelemetryError::io(
            path.display().to_string(),
            format!("Failed to write STK product: {e}"),
        )
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Wrote STK product");
    Ok(())
}
