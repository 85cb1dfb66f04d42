//! In-memory caching using moka
//!
//! Rendered pages only change when the binary changes, so they are cached by
//! slug with a long TTL.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Application cache holding rendered pages
#[derive(Clone)]
pub struct AppCache {
    /// Rendered HTML (slug -> page)
    pub pages: Cache<String, Arc<String>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Pages: a handful of entries, 1 hour TTL
            pages: Cache::builder()
                .max_capacity(16)
                .time_to_live(Duration::from_secs(60 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            pages_size: self.pages.entry_count(),
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub pages_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_stats() {
        let cache = AppCache::new();
        assert!(cache.pages.get("home").await.is_none());

        cache
            .pages
            .insert("home".to_string(), Arc::new("<html></html>".to_string()))
            .await;
        let cached = cache.pages.get("home").await.unwrap();
        assert_eq!(cached.as_str(), "<html></html>");

        cache.pages.run_pending_tasks().await;
        assert_eq!(cache.stats().pages_size, 1);
    }
}
