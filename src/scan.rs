//! Cache inventory scanner
//!
//! Walks the top level of a HuggingFace hub cache directory and recovers
//! (organization, model) pairs from the directory naming convention.
//! Cache structure:
//! ```text
//! ~/.cache/huggingface/hub/
//! ├── models--BAAI--bge-small-en-v1.5/
//! │   ├── snapshots/
//! │   ├── blobs/
//! │   └── refs/
//! └── models--sentence-transformers--all-MiniLM-L6-v2/
//!     └── ...
//! ```
//! The convention is owned by the hub client, not by this crate; anything
//! under the cache root that does not match it is skipped without comment.

use crate::error::{InventoryError, InventoryResult};
use std::collections::HashMap;
use std::path::Path;

/// Directory name prefix marking a cached model
pub const MODELS_PREFIX: &str = "models--";

/// Segment delimiter inside a cache entry name
pub const SEPARATOR: &str = "--";

/// Parse a cache entry name into (organization, model)
///
/// `models--BAAI--bge-small-en-v1.5` -> `("BAAI", "bge-small-en-v1.5")`.
/// Returns `None` for names without the marker prefix or with fewer than
/// three delimiter-separated segments. Trailing segments beyond the third
/// are tolerated and ignored.
pub fn parse_entry_name(name: &str) -> Option<(String, String)> {
    if !name.starts_with(MODELS_PREFIX) {
        return None;
    }

    let segments: Vec<&str> = name.split(SEPARATOR).collect();
    if segments.len() < 3 {
        return None;
    }

    Some((segments[1].to_string(), segments[2].to_string()))
}

/// Re-assemble the expected on-disk directory name for a model
///
/// Inverse of [`parse_entry_name`] for well-formed three-segment entries.
pub fn entry_dir_name(organization: &str, model: &str) -> String {
    format!("{MODELS_PREFIX}{organization}{SEPARATOR}{model}")
}

/// List cached models grouped by organization
///
/// Lists the immediate children of `cache_root` and collects every name
/// matching the entry convention. Duplicate (organization, model) pairs are
/// preserved as separate entries and per-organization order follows the
/// directory listing; callers sort before display. An unreadable root is the
/// only error case.
pub fn scan(cache_root: &Path) -> InventoryResult<HashMap<String, Vec<String>>> {
    let entries =
        std::fs::read_dir(cache_root).map_err(|source| InventoryError::CacheRootUnreadable {
            path: cache_root.to_path_buf(),
            source,
        })?;

    let mut models_by_org: HashMap<String, Vec<String>> = HashMap::new();
    let mut skipped = 0usize;

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        match parse_entry_name(&name) {
            Some((organization, model)) => {
                models_by_org.entry(organization).or_default().push(model);
            }
            None => skipped += 1,
        }
    }

    tracing::debug!(
        organizations = models_by_org.len(),
        skipped,
        "Scanned cache root"
    );

    Ok(models_by_org)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_name() {
        assert_eq!(
            parse_entry_name("models--BAAI--bge-small-en-v1.5"),
            Some(("BAAI".to_string(), "bge-small-en-v1.5".to_string()))
        );
        assert_eq!(
            parse_entry_name("models--sentence-transformers--all-MiniLM-L6-v2"),
            Some((
                "sentence-transformers".to_string(),
                "all-MiniLM-L6-v2".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_entry_name_extra_segments_ignored() {
        assert_eq!(
            parse_entry_name("models--meta-llama--Llama-3.1-8B--draft"),
            Some(("meta-llama".to_string(), "Llama-3.1-8B".to_string()))
        );
    }

    #[test]
    fn test_parse_entry_name_rejects_wrong_prefix() {
        assert_eq!(parse_entry_name("datasets--squad--plain_text"), None);
        assert_eq!(parse_entry_name("README"), None);
        assert_eq!(parse_entry_name(""), None);
    }

    #[test]
    fn test_parse_entry_name_rejects_short_names() {
        assert_eq!(parse_entry_name("models--"), None);
        assert_eq!(parse_entry_name("models--orphan"), None);
    }

    #[test]
    fn test_entry_dir_name_roundtrip() {
        let name = entry_dir_name("BAAI", "bge-small-en-v1.5");
        assert_eq!(name, "models--BAAI--bge-small-en-v1.5");
        assert_eq!(
            parse_entry_name(&name),
            Some(("BAAI".to_string(), "bge-small-en-v1.5".to_string()))
        );
    }

    #[test]
    fn test_scan_groups_by_organization() {
        let temp_dir = tempfile::tempdir().unwrap();
        for entry in [
            "models--BAAI--bge-small-en-v1.5",
            "models--BAAI--bge-m3",
            "models--openai--whisper-tiny",
            "README",
            "datasets--squad--plain_text",
        ] {
            std::fs::create_dir(temp_dir.path().join(entry)).unwrap();
        }

        let scanned = scan(temp_dir.path()).unwrap();
        assert_eq!(scanned.len(), 2);

        let mut baai = scanned["BAAI"].clone();
        baai.sort();
        assert_eq!(baai, vec!["bge-m3", "bge-small-en-v1.5"]);
        assert_eq!(scanned["openai"], vec!["whisper-tiny"]);
    }

    #[test]
    fn test_scan_preserves_duplicate_pairs() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("models--openai--whisper-tiny")).unwrap();
        std::fs::create_dir(temp_dir.path().join("models--openai--whisper-tiny--stale")).unwrap();

        let scanned = scan(temp_dir.path()).unwrap();
        assert_eq!(scanned["openai"], vec!["whisper-tiny", "whisper-tiny"]);
    }

    #[test]
    fn test_scan_missing_root_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("no-such-hub");

        let err = scan(&missing).unwrap_err();
        assert!(err.to_string().contains("no-such-hub"));
    }

    #[test]
    fn test_scan_empty_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(scan(temp_dir.path()).unwrap().is_empty());
    }
}
