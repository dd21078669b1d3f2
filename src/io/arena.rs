// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Memory-mapped telemetry recording.
//!
//! The `MmapArena` owns the whole recording for the duration of a run and
//! hands out `&[u8]` borrows tied to its lifetime:
//!
//! ```text
//! MmapArena (owns mmap)
//!   ↓
//! BatchExtractor::extract(&[u8])
//!   ↓
//! SampleSeries (owned copies of the decoded integers)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tlmstk::io::arena::MmapArena;
//! use tlmstk::record::extract;
//!
//! let arena = MmapArena::open("telemetry.bin")?;
//! let series = extract(arena.data())?;
//! println!("{} records", series.len());
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::ops::Deref;
use std::path::Path;

use crate::TelemetryError;

/// Backing storage of an arena.
enum Backing {
    /// Read-only memory map of the file
    Mapped(memmap2::Mmap),
    /// Zero-length file; mapping it is not portable
    Empty,
}

/// A read-only recording loaded wholly into memory.
///
/// # Safety
///
/// The mapping is created with `memmap2::Mmap::map`, which is unsafe
/// because another process could truncate the file while it is mapped.
/// Recordings are treated as immutable captures for the run.
pub struct MmapArena {
    backing: Backing,
    /// File path for diagnostics
    path: String,
}

impl MmapArena {
    /// Open a recording and map it into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or memory-mapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TelemetryError> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::open(path_ref).map_err(|e| {
            TelemetryError::io(
                "MmapArena",
                format!("Failed to open file '{path_str}': {e}"),
            )
        })?;

        let len = file
            .metadata()
            .map_err(|e| {
                TelemetryError::io(
                    "MmapArena",
                    format!("Failed to stat file '{path_str}': {e}"),
                )
            })?
            .len();

        let backing = if len == 0 {
            Backing::Empty
        } else {
            // SAFETY: the map is read-only and owned by the arena; all
            // borrows of it are tied to the arena's lifetime.
            let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| {
                TelemetryError::io(
                    "MmapArena",
                    format!("Failed to mmap file '{path_str}': {e}"),
                )
            })?;
            Backing::Mapped(mmap)
        };

        Ok(Self {
            backing,
            path: path_str,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get a reference to the recording bytes.
    pub fn data(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mmap) => &mmap[..],
            Backing::Empty => &[],
        }
    }

    /// Get the length of the recording.
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Check if the recording is empty.
    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }
}

impl Deref for MmapArena {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.data()
    }
}

impl std::fmt::Debug for MmapArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MmapArena")
            .field("path", &self.path)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_arena_open() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"telemetry bytes").unwrap();
        file.flush().unwrap();

        let arena = MmapArena::open(file.path()).unwrap();
        assert_eq!(arena.len(), 15);
        assert!(!arena.is_empty());
        assert_eq!(arena.data(), b"telemetry bytes");
        assert_eq!(&arena[0..9], b"telemetry");
    }

    #[test]
    fn test_arena_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let arena = MmapArena::open(file.path()).unwrap();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn test_arena_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MmapArena::open(dir.path().join("telemetry.bin")).unwrap_err();
        assert!(matches!(err, TelemetryError::Io { .. }));
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn test_arena_debug() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let arena = MmapArena::open(file.path()).unwrap();
        let debug_str = format!("{:?}", arena);
        assert!(debug_str.contains("MmapArena"));
        assert!(debug_str.contains("len: 0"));
    }
}
