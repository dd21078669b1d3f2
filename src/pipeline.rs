// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! End-to-end conversion: recording in, STK products out.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tlmstk::{Pipeline, PipelineConfig};
//!
//! let summary = Pipeline::new(PipelineConfig::default())
//!     .run("telemetry.bin", "Attitude.a", "Ephemeris.e")?;
//! println!("{} records", summary.records);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use tracing::debug;

use crate::config::PipelineConfig;
use crate::io::MmapArena;
use crate::record::SampleSeries;
use crate::stk::write_products;
use crate::Result;

/// Outcome of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Records decoded and written to each product
    pub records: usize,
    /// Bytes of a trailing partial record that were ignored
    pub trailing_bytes: usize,
    /// Scaled time of the first sample, in seconds from the scenario epoch
    pub first_time: Option<f64>,
    /// Scaled time of the last sample, in seconds from the scenario epoch
    pub last_time: Option<f64>,
}

/// Converts a recording into the attitude and ephemeris products.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline from a configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration of this pipeline.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Decode every record of an in-memory recording.
    pub fn extract(&self, buffer: &[u8]) -> Result<SampleSeries> {
        self.config.extractor().extract(buffer)
    }

    /// Read `input`, then write the attitude and ephemeris products.
    pub fn run<I, A, E>(&self, input: I, attitude_path: A, ephemeris_path: E) -> Result<RunSummary>
    where
        I: AsRef<Path>,
        A: AsRef<Path>,
        E: AsRef<Path>,
    {
        let arena = MmapArena::open(input)?;
        debug!(path = arena.path(), bytes = arena.len(), "Loaded recording");

        let series = self.extract(arena.data())?;
        write_products(
            &series,
            &self.config.conversion,
            attitude_path.as_ref(),
            ephemeris_path.as_ref(),
        )?;

        Ok(self.summarize(&series, arena.len()))
    }

    fn summarize(&self, series: &SampleSeries, input_len: usize) -> RunSummary {
        let conversion = &self.config.conversion;
        RunSummary {
            records: series.len(),
            trailing_bytes: self.config.layout.trailing_bytes(input_len),
            first_time: series.times.first().map(|&t| conversion.scaled_time(t)),
            last_time: series.times.last().map(|&t| conversion.scaled_time(t)),
        }
    }
}
