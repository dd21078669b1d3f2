// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Input handling for telemetry recordings.

pub mod arena;

pub use arena::MmapArena;
