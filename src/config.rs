// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Pipeline configuration.
//!
//! Every value defaults to the fixed constants of the recording format, so
//! an empty configuration reproduces the standard conversion. A TOML file
//! may override any subset:
//!
//! ```toml
//! byte_order = "little"
//!
//! [layout]
//! block_size = 2068
//!
//! [conversion]
//! position_scale = 2.0e-5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::record::{BatchExtractor, RecordDecoder, RecordLayout};
use crate::stk::ConversionConfig;
use crate::{ByteOrder, Result, TelemetryError};

/// Complete configuration of a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Byte order of the record fields
    pub byte_order: ByteOrder,
    /// Record size and field offsets
    pub layout: RecordLayout,
    /// Raw count to STK unit conversion
    pub conversion: ConversionConfig,
}

impl PipelineConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(text)?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            TelemetryError::io(
                path.display().to_string(),
                format!("Failed to read configuration: {e}"),
            )
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| TelemetryError::config(e.to_string()))
    }

    /// Build the record decoder this configuration describes.
    pub fn decoder(&self) -> RecordDecoder {
        RecordDecoder::new(self.layout).with_byte_order(self.byte_order)
    }

    /// Build the batch extractor this configuration describes.
    pub fn extractor(&self) -> BatchExtractor {
        BatchExtractor::new(self.decoder())
    }
}
