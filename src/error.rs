//! Error types for cache inventory operations

use std::path::PathBuf;
use thiserror::Error;

/// Inventory errors
///
/// Only the cache root itself can fail a scan. Everything below it is
/// handled best-effort: unreadable or vanished files contribute 0 bytes and
/// malformed entry names are skipped.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("cache directory {path:?} does not exist or is not readable: {source}")]
    CacheRootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InventoryResult<T> = Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_the_path() {
        let err = InventoryError::CacheRootUnreadable {
            path: PathBuf::from("/no/such/cache"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("/no/such/cache"));
        assert!(message.contains("not readable"));
    }
}
