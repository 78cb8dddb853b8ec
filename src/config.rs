//! Cache root resolution
//!
//! The scanner itself takes a resolved path; resolving one from the
//! environment is a caller concern and lives here.

use std::path::PathBuf;

/// Fixed subdirectory of the HuggingFace home holding the hub cache
pub const HUB_SUBDIR: &str = "hub";

/// Resolve the hub cache directory to scan
///
/// An explicit override wins. Otherwise checks in order:
/// 1. `$HF_HOME/hub`
/// 2. `$XDG_CACHE_HOME/huggingface/hub`
/// 3. `~/.cache/huggingface/hub`
pub fn resolve_cache_root(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    if let Ok(hf_home) = std::env::var("HF_HOME") {
        return PathBuf::from(hf_home).join(HUB_SUBDIR);
    }

    if let Ok(xdg_cache) = std::env::var("XDG_CACHE_HOME") {
        return PathBuf::from(xdg_cache).join("huggingface").join(HUB_SUBDIR);
    }

    dirs::home_dir()
        .map(|home| home.join(".cache/huggingface").join(HUB_SUBDIR))
        .unwrap_or_else(|| PathBuf::from("/tmp/huggingface").join(HUB_SUBDIR))
}
