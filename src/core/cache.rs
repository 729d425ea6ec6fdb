//! Time-bounded value cache with tag-based revalidation.
//!
//! A [`CachedValue`] holds at most one entry `{ value, fetched_at, version }`. The entry is
//! served while it is younger than the configured TTL and its version still matches the
//! current version of its tag in [`CacheTags`]. Bumping a tag through
//! [`CacheTags::revalidate`] makes every value cached under it stale on the next read.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

/// Version counters keyed by tag name.
#[derive(Debug, Default)]
pub(crate) struct CacheTags {
    versions: StdMutex<HashMap<&'static str, u64>>,
}

impl CacheTags {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn version(&self, tag: &'static str) -> u64 {
        let versions = self.versions.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        versions.get(tag).copied().unwrap_or(0)
    }

    /// Marks everything cached under `tag` as stale and returns the new version.
    pub(crate) fn revalidate(&self, tag: &'static str) -> u64 {
        let mut versions = self.versions.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let version = versions.entry(tag).or_insert(0);
        *version += 1;
        tracing::debug!(tag, version = *version, "Cache tag revalidated");
        *version
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
    version: u64,
}

pub(crate) struct CachedValue<T> {
    tag: &'static str,
    ttl: Duration,
    tags: Arc<CacheTags>,
    entry: RwLock<Option<CacheEntry<T>>>,
    refresh: Mutex<()>,
}

impl<T: Clone> CachedValue<T> {
    pub(crate) fn new(tag: &'static str, ttl: Duration, tags: Arc<CacheTags>) -> Self {
        Self { tag, ttl, tags, entry: RwLock::new(None), refresh: Mutex::new(()) }
    }

    pub(crate) fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the cached value when fresh, otherwise runs `fetch` and stores its result.
    ///
    /// Concurrent callers that observe a stale entry wait for a single refresh. Errors are
    /// returned as-is and leave the previous entry untouched.
    pub(crate) async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.fresh_value().await {
            metrics::counter!("cache_hits_total", "tag" => self.tag).increment(1);
            return Ok(value);
        }

        let _refresh = self.refresh.lock().await;

        // Someone else may have refreshed while we waited for the lock.
        if let Some(value) = self.fresh_value().await {
            metrics::counter!("cache_hits_total", "tag" => self.tag).increment(1);
            return Ok(value);
        }

        metrics::counter!("cache_misses_total", "tag" => self.tag).increment(1);

        let version = self.tags.version(self.tag);
        let value = fetch().await?;

        let mut entry = self.entry.write().await;
        *entry = Some(CacheEntry { value: value.clone(), fetched_at: Instant::now(), version });

        Ok(value)
    }

    async fn fresh_value(&self) -> Option<T> {
        let entry = self.entry.read().await;
        let entry = entry.as_ref()?;

        if entry.fetched_at.elapsed() >= self.ttl {
            return None;
        }
        if entry.version != self.tags.version(self.tag) {
            return None;
        }

        Some(entry.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TAG: &str = "test-tag";

    fn counting_cache(ttl: Duration) -> (Arc<CacheTags>, CachedValue<String>, Arc<AtomicUsize>) {
        let tags = Arc::new(CacheTags::new());
        let cache = CachedValue::new(TAG, ttl, tags.clone());
        (tags, cache, Arc::new(AtomicUsize::new(0)))
    }

    async fn load(calls: &AtomicUsize, value: &str) -> Result<String, &'static str> {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(value.to_string())
    }

    #[tokio::test(start_paused = true)]
    async fn second_read_within_window_does_not_refetch() {
        let (_tags, cache, calls) = counting_cache(Duration::from_secs(3600));

        let first = cache.get_or_fetch(|| load(&calls, "SMA Negeri 1")).await.unwrap();
        tokio::time::advance(Duration::from_secs(1800)).await;
        let second = cache.get_or_fetch(|| load(&calls, "changed")).await.unwrap();

        assert_eq!(first, "SMA Negeri 1");
        assert_eq!(second, "SMA Negeri 1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn read_after_window_refetches() {
        let (_tags, cache, calls) = counting_cache(Duration::from_secs(3600));

        cache.get_or_fetch(|| load(&calls, "old")).await.unwrap();
        tokio::time::advance(Duration::from_secs(3600)).await;
        let value = cache.get_or_fetch(|| load(&calls, "new")).await.unwrap();

        assert_eq!(value, "new");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn revalidated_tag_forces_refetch() {
        let (tags, cache, calls) = counting_cache(Duration::from_secs(3600));

        cache.get_or_fetch(|| load(&calls, "old")).await.unwrap();
        tags.revalidate(TAG);
        let value = cache.get_or_fetch(|| load(&calls, "new")).await.unwrap();
        let again = cache.get_or_fetch(|| load(&calls, "newer")).await.unwrap();

        assert_eq!(value, "new");
        assert_eq!(again, "new");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn other_tags_do_not_invalidate() {
        let (tags, cache, calls) = counting_cache(Duration::from_secs(3600));

        cache.get_or_fetch(|| load(&calls, "value")).await.unwrap();
        tags.revalidate("unrelated");
        cache.get_or_fetch(|| load(&calls, "other")).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_propagates_and_is_not_cached() {
        let (_tags, cache, calls) = counting_cache(Duration::from_secs(3600));

        let err = cache
            .get_or_fetch(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<String, _>("db down")
            })
            .await
            .unwrap_err();
        assert_eq!(err, "db down");

        let value = cache.get_or_fetch(|| load(&calls, "recovered")).await.unwrap();
        assert_eq!(value, "recovered");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_stale_readers_share_one_fetch() {
        let (_tags, cache, calls) = counting_cache(Duration::from_secs(3600));
        let cache = Arc::new(cache);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch(|| async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok::<_, &'static str>("shared".to_string())
                    })
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "shared");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
