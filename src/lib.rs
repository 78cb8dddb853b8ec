//! hub-du - HuggingFace model cache inventory
//!
//! Walks the local HuggingFace hub cache, groups cached models by publishing
//! organization and computes per-model, per-organization and grand-total
//! disk usage.

pub mod config;
pub mod error;
pub mod scan;
pub mod size;
pub mod snapshot;

pub use config::resolve_cache_root;
pub use error::{InventoryError, InventoryResult};
pub use scan::{parse_entry_name, scan};
pub use size::{SizeFormat, directory_size, format_size};
pub use snapshot::{ModelRecord, OrgUsage, Snapshot, UsageReport, UsageRow, build_snapshot};
