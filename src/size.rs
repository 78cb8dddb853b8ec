//! Directory sizing and human-readable size formatting

use serde::{Deserialize, Serialize};
use std::path::Path;

const KB: u64 = 1024;
const GB: u64 = KB * KB * KB;

/// Units for multi-unit formatting, powers of 1024 apart
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Recursively calculate the total size of regular files under a directory
///
/// Symbolic links are excluded entirely, whatever they point to; hub caches
/// symlink shared blobs between snapshots and following them would double
/// count. Entries that vanish or become unreadable mid-walk contribute 0
/// bytes. An empty or unreadable directory yields 0.
pub fn directory_size(path: &Path) -> u64 {
    let mut total = 0;

    if let Ok(entries) = std::fs::read_dir(path) {
        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type() {
                if file_type.is_symlink() {
                    continue;
                }
                if file_type.is_dir() {
                    total += directory_size(&entry.path());
                } else if file_type.is_file()
                    && let Ok(metadata) = entry.metadata()
                {
                    total += metadata.len();
                }
            }
        }
    }

    total
}

/// Size rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeFormat {
    /// Largest unit (B through TB) keeping the magnitude in [1, 1024)
    MultiUnit,
    /// Always GB
    FixedGb,
}

/// Format a byte count for display
///
/// Multi-unit mode picks the unit from the integer floor of log1024 of the
/// count, clamped to TB so larger sizes still render rather than overflowing
/// the unit table. Both modes render two decimal places; zero renders as
/// `0 B` and `0 GB` respectively.
pub fn format_size(bytes: u64, format: SizeFormat) -> String {
    match format {
        SizeFormat::MultiUnit => {
            if bytes == 0 {
                return "0 B".to_string();
            }
            let unit = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1) as usize;
            let value = bytes as f64 / (1u64 << (10 * unit)) as f64;
            format!("{:.2} {}", value, UNITS[unit])
        }
        SizeFormat::FixedGb => {
            if bytes == 0 {
                return "0 GB".to_string();
            }
            format!("{:.2} GB", bytes as f64 / GB as f64)
        }
    }
}
