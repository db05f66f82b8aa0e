//! Per-post records: cached share counts and the suppression override.

use async_trait::async_trait;
use floatbar_core::{CachedCounts, PostId, PostOverride};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::error::StoreError;
use crate::persistence::{default_posts_dir, load_json_opt, save_json};

// ============================================================================
// Repository Trait
// ============================================================================

/// Host key-value storage for per-post records.
///
/// Each record is read and replaced as a whole; there is no field-level
/// merge.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns the cached counts for a post, if any.
    async fn cached_counts(&self, post_id: PostId) -> Result<Option<CachedCounts>, StoreError>;

    /// Replaces the cached counts for `counts.post_id`.
    async fn set_cached_counts(&self, counts: &CachedCounts) -> Result<(), StoreError>;

    /// Returns the override for a post (not suppressed if never set).
    async fn post_override(&self, post_id: PostId) -> Result<PostOverride, StoreError>;

    /// Replaces the override for `value.post_id`.
    async fn set_override(&self, value: &PostOverride) -> Result<(), StoreError>;
}

// ============================================================================
// File Post Store
// ============================================================================

/// Per-post records as JSON files, one file per record.
#[derive(Debug, Clone)]
pub struct FilePostStore {
    dir: PathBuf,
}

impl FilePostStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store at the platform default location.
    pub fn default_location() -> Self {
        Self::new(default_posts_dir())
    }

    /// Returns the directory holding the records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn counts_path(&self, post_id: PostId) -> PathBuf {
        self.dir.join(format!("{post_id}.counts.json"))
    }

    fn override_path(&self, post_id: PostId) -> PathBuf {
        self.dir.join(format!("{post_id}.override.json"))
    }
}

#[async_trait]
impl PostRepository for FilePostStore {
    #[instrument(skip(self))]
    async fn cached_counts(&self, post_id: PostId) -> Result<Option<CachedCounts>, StoreError> {
        let path = self.counts_path(post_id);
        match load_json_opt::<CachedCounts>(&path).await {
            Ok(counts) => Ok(counts),
            // A damaged record is treated as absent so the next refresh rewrites it.
            Err(StoreError::Serialization(e)) => {
                warn!(path = %path.display(), error = %e, "Discarding unreadable cached counts");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self, counts), fields(post_id = %counts.post_id))]
    async fn set_cached_counts(&self, counts: &CachedCounts) -> Result<(), StoreError> {
        save_json(&self.counts_path(counts.post_id), counts).await
    }

    #[instrument(skip(self))]
    async fn post_override(&self, post_id: PostId) -> Result<PostOverride, StoreError> {
        let stored = load_json_opt(&self.override_path(post_id)).await?;
        Ok(stored.unwrap_or_else(|| PostOverride::default_for(post_id)))
    }

    #[instrument(skip(self, value), fields(post_id = %value.post_id))]
    async fn set_override(&self, value: &PostOverride) -> Result<(), StoreError> {
        save_json(&self.override_path(value.post_id), value).await
    }
}

// ============================================================================
// Memory Post Store
// ============================================================================

/// In-process per-post records, for hosts without disk and for tests.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    counts: RwLock<HashMap<PostId, CachedCounts>>,
    overrides: RwLock<HashMap<PostId, PostOverride>>,
    count_writes: AtomicUsize,
}

impl MemoryPostStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times cached counts were written.
    pub fn count_writes(&self) -> usize {
        self.count_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostRepository for MemoryPostStore {
    async fn cached_counts(&self, post_id: PostId) -> Result<Option<CachedCounts>, StoreError> {
        Ok(self.counts.read().await.get(&post_id).cloned())
    }

    async fn set_cached_counts(&self, counts: &CachedCounts) -> Result<(), StoreError> {
        self.counts
            .write()
            .await
            .insert(counts.post_id, counts.clone());
        self.count_writes.fetch_add(1, Ordering::SeqCst);
        debug!(post_id = %counts.post_id, "Stored cached counts");
        Ok(())
    }

    async fn post_override(&self, post_id: PostId) -> Result<PostOverride, StoreError> {
        Ok(self
            .overrides
            .read()
            .await
            .get(&post_id)
            .copied()
            .unwrap_or_else(|| PostOverride::default_for(post_id)))
    }

    async fn set_override(&self, value: &PostOverride) -> Result<(), StoreError> {
        self.overrides.write().await.insert(value.post_id, *value);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use floatbar_core::ServiceId;
    use tempfile::TempDir;

    fn sample_counts(post_id: u64) -> CachedCounts {
        let mut counts = CachedCounts::new(
            PostId(post_id),
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        );
        counts.set(ServiceId::Twitter, 5);
        counts.set(ServiceId::Facebook, 0);
        counts
    }

    #[tokio::test]
    async fn test_file_store_counts_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FilePostStore::new(dir.path());

        assert!(store.cached_counts(PostId(9)).await.unwrap().is_none());

        let counts = sample_counts(9);
        store.set_cached_counts(&counts).await.unwrap();
        assert_eq!(store.cached_counts(PostId(9)).await.unwrap(), Some(counts));
        assert!(dir.path().join("9.counts.json").exists());
    }

    #[tokio::test]
    async fn test_file_store_damaged_counts_are_absent() {
        let dir = TempDir::new().unwrap();
        let store = FilePostStore::new(dir.path());
        tokio::fs::write(dir.path().join("3.counts.json"), "{\"post_id\":")
            .await
            .unwrap();

        assert!(store.cached_counts(PostId(3)).await.unwrap().is_none());

        tokio::fs::write(dir.path().join("3.counts.json"), [0xff, 0xfe, b'{'])
            .await
            .unwrap();
        assert!(store.cached_counts(PostId(3)).await.unwrap().is_none());

        // The next refresh replaces the damaged file.
        store.set_cached_counts(&sample_counts(3)).await.unwrap();
        assert_eq!(
            store.cached_counts(PostId(3)).await.unwrap(),
            Some(sample_counts(3))
        );
    }

    #[tokio::test]
    async fn test_file_store_override_defaults_to_shown() {
        let dir = TempDir::new().unwrap();
        let store = FilePostStore::new(dir.path());

        let value = store.post_override(PostId(4)).await.unwrap();
        assert!(!value.suppressed);

        store
            .set_override(&PostOverride {
                post_id: PostId(4),
                suppressed: true,
            })
            .await
            .unwrap();
        assert!(store.post_override(PostId(4)).await.unwrap().suppressed);
        assert!(!store.post_override(PostId(5)).await.unwrap().suppressed);
    }

    #[tokio::test]
    async fn test_memory_store_counts_writes() {
        let store = MemoryPostStore::new();
        store.set_cached_counts(&sample_counts(1)).await.unwrap();
        store.set_cached_counts(&sample_counts(1)).await.unwrap();

        assert_eq!(store.count_writes(), 2);
        assert_eq!(
            store.cached_counts(PostId(1)).await.unwrap().unwrap().count(ServiceId::Twitter),
            5
        );
    }
}
