// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # tlmstk CLI
//!
//! Convert a telemetry recording into STK attitude and ephemeris files.
//!
//! ## Usage
//!
//! ```sh
//! # telemetry.bin -> Attitude.a + Ephemeris.e in the current directory
//! tlmstk
//!
//! # Explicit paths
//! tlmstk capture.bin --attitude out/Attitude.a --ephemeris out/Ephemeris.e
//!
//! # Recording captured on a big-endian host
//! tlmstk capture.bin --byte-order big
//! ```

mod common;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use common::{failure_fields, format_timestamp, Result};
use tlmstk::stk::constants::{ATTITUDE_FILE, EPHEMERIS_FILE};
use tlmstk::{ByteOrder, Pipeline, PipelineConfig};

/// tlmstk - Telemetry to STK trajectory converter
///
/// Decodes time, ECI position and attitude quaternion from every
/// fixed-size record and writes STK `.a` and `.e` products.
#[derive(Parser, Clone, Debug)]
#[command(name = "tlmstk")]
#[command(about = "Convert satellite telemetry records into STK attitude and ephemeris files", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Telemetry recording
    #[arg(value_name = "INPUT", default_value = "telemetry.bin")]
    input: PathBuf,

    /// Attitude product output
    #[arg(short, long, default_value = ATTITUDE_FILE)]
    attitude: PathBuf,

    /// Ephemeris product output
    #[arg(short, long, default_value = EPHEMERIS_FILE)]
    ephemeris: PathBuf,

    /// Byte order of the record fields (native, little, big)
    #[arg(short, long)]
    byte_order: Option<ByteOrder>,

    /// TOML file overriding record layout and conversion constants
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(byte_order) = cli.byte_order {
        config.byte_order = byte_order;
    }

    println!("Converting telemetry:");
    println!("  Input:      {}", cli.input.display());
    println!("  Byte order: {}", config.byte_order.as_str());

    let summary = Pipeline::new(config).run(&cli.input, &cli.attitude, &cli.ephemeris)?;

    println!("  Records:    {}", summary.records);
    if summary.trailing_bytes > 0 {
        println!("  Ignored:    {} trailing bytes", summary.trailing_bytes);
    }
    if let (Some(first), Some(last)) = (summary.first_time, summary.last_time) {
        println!("  First:      {}", format_timestamp(first));
        println!("  Last:       {}", format_timestamp(last));
    }
    println!("  Attitude:   {}", cli.attitude.display());
    println!("  Ephemeris:  {}", cli.ephemeris.display());

    Ok(())
}

fn main() {
    let result = run();

    if let Err(e) = result {
        let fields = failure_fields(&e);
        tracing::error!(?fields, "Conversion failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
