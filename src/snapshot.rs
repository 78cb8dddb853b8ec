//! Inventory snapshots
//!
//! Joins the scanner output with the size calculator into an immutable
//! per-organization usage snapshot. Every scan re-walks the filesystem and
//! produces a fresh snapshot; nothing is cached between calls.

use crate::error::InventoryResult;
use crate::scan::{entry_dir_name, scan};
use crate::size::{SizeFormat, directory_size, format_size};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Disk usage of one cached model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Publishing organization (e.g. "BAAI")
    pub organization: String,
    /// Model name within the organization (e.g. "bge-small-en-v1.5")
    pub model: String,
    /// Recursive size of the model's cache directory in bytes
    pub size_bytes: u64,
}

/// All cached models of one organization with their combined size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUsage {
    pub organization: String,
    /// Member models, sorted by name; duplicate cache entries stay separate
    pub models: Vec<ModelRecord>,
    /// Sum of the member model sizes in bytes
    pub total_bytes: u64,
}

/// One complete result of scanning and sizing the cache
///
/// Immutable once produced. Organizations and the models within each are
/// sorted lexicographically; size is never an iteration key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub organizations: Vec<OrgUsage>,
    /// Sum of all organization totals in bytes
    pub total_bytes: u64,
    /// When the cache was scanned
    pub scanned_at: DateTime<Utc>,
}

/// One row of the presentation-layer report
#[derive(Debug, Clone, Serialize)]
pub struct UsageRow {
    pub organization: String,
    pub model: String,
    /// Human-readable size string
    pub size: String,
    /// Raw byte count for sorting and summation by the consumer
    pub size_bytes: u64,
}

/// Flat report consumed by external presentation layers
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    pub scanned_at: DateTime<Utc>,
    pub rows: Vec<UsageRow>,
    pub total_bytes: u64,
    pub total: String,
}

/// Scan a cache root and build a usage snapshot
///
/// For every (organization, model) pair the scanner reports, the expected
/// directory name is re-assembled and sized under `cache_root`. Cost is
/// proportional to the bytes under the root plus the number of entries.
pub fn build_snapshot(cache_root: &Path) -> InventoryResult<Snapshot> {
    let mut scanned: Vec<(String, Vec<String>)> = scan(cache_root)?.into_iter().collect();
    scanned.sort_by(|a, b| a.0.cmp(&b.0));

    let mut organizations = Vec::with_capacity(scanned.len());
    let mut total_bytes = 0u64;

    for (organization, mut models) in scanned {
        models.sort();

        let mut records = Vec::with_capacity(models.len());
        let mut org_bytes = 0u64;

        for model in models {
            let model_dir = cache_root.join(entry_dir_name(&organization, &model));
            let size_bytes = directory_size(&model_dir);
            org_bytes += size_bytes;
            records.push(ModelRecord {
                organization: organization.clone(),
                model,
                size_bytes,
            });
        }

        total_bytes += org_bytes;
        organizations.push(OrgUsage {
            organization,
            models: records,
            total_bytes: org_bytes,
        });
    }

    tracing::debug!(
        organizations = organizations.len(),
        total_bytes,
        "Built cache snapshot"
    );

    Ok(Snapshot {
        organizations,
        total_bytes,
        scanned_at: Utc::now(),
    })
}

impl Snapshot {
    /// Stateless subset containing only the given organization
    ///
    /// Totals are recomputed from the kept organizations; `scanned_at` is
    /// carried over since no rescan happens.
    pub fn filter_by_organization(&self, organization: &str) -> Snapshot {
        let organizations: Vec<OrgUsage> = self
            .organizations
            .iter()
            .filter(|org| org.organization == organization)
            .cloned()
            .collect();
        let total_bytes = organizations.iter().map(|org| org.total_bytes).sum();

        Snapshot {
            organizations,
            total_bytes,
            scanned_at: self.scanned_at,
        }
    }

    /// Flatten into presentation rows, one per model record
    pub fn rows(&self, format: SizeFormat) -> Vec<UsageRow> {
        self.organizations
            .iter()
            .flat_map(|org| org.models.iter())
            .map(|record| UsageRow {
                organization: record.organization.clone(),
                model: record.model.clone(),
                size: format_size(record.size_bytes, format),
                size_bytes: record.size_bytes,
            })
            .collect()
    }

    /// Grand total rendered in the given format
    pub fn total_display(&self, format: SizeFormat) -> String {
        format_size(self.total_bytes, format)
    }

    /// Bundle rows and totals for machine-readable consumers
    pub fn report(&self, format: SizeFormat) -> UsageReport {
        UsageReport {
            scanned_at: self.scanned_at,
            rows: self.rows(format),
            total_bytes: self.total_bytes,
            total: self.total_display(format),
        }
    }
}
