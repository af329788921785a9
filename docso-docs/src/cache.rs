use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::DocError;
use crate::fetch::DocFetcher;
use crate::model::Document;

/// Process-wide cache of fetched package documentation.
///
/// Entries never expire: a document is treated as stable for the lifetime
/// of the process. Failed fetches are not cached. Concurrent misses on the
/// same key may fetch more than once; the first stored value is kept and
/// returned to every caller.
pub struct DocumentCache {
    fetcher: Arc<dyn DocFetcher>,
    documents: RwLock<HashMap<String, Arc<Document>>>,
}

impl DocumentCache {
    pub fn new(fetcher: Arc<dyn DocFetcher>) -> Self {
        Self {
            fetcher,
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached document for `package`, fetching it on a miss.
    pub async fn fetch_or_get(&self, package: &str) -> Result<Arc<Document>, DocError> {
        if let Some(document) = self.get(package).await {
            debug!(package, "documentation cache hit");
            return Ok(document);
        }

        // The lock is released while the fetch is in flight.
        let document = Arc::new(self.fetcher.fetch(package).await?);

        let mut documents = self.documents.write().await;
        let document = match documents.entry(package.to_owned()) {
            Entry::Occupied(entry) => {
                debug!(package, "concurrent fetch already cached; discarding ours");
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                let document = Arc::clone(entry.insert(document));
                info!(
                    package,
                    functions = document.functions.len(),
                    types = document.types.len(),
                    cached = documents.len(),
                    "cached package documentation"
                );
                document
            }
        };

        Ok(document)
    }

    pub async fn get(&self, package: &str) -> Option<Arc<Document>> {
        self.documents.read().await.get(package).cloned()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Barrier;

    use super::*;

    struct CountingFetcher {
        calls: AtomicUsize,
        fail_first: usize,
    }

    impl CountingFetcher {
        fn new(fail_first: usize) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_first,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocFetcher for CountingFetcher {
        async fn fetch(&self, package: &str) -> Result<Document, DocError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if package == "missing" {
                return Err(DocError::NotFound(package.to_owned()));
            }
            if call < self.fail_first {
                return Err(DocError::fetch(package, "connection reset"));
            }
            Ok(Document {
                package: package.to_owned(),
                url: format!("https://pkg.go.dev/{package}"),
                ..Document::default()
            })
        }
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let fetcher = CountingFetcher::new(0);
        let cache = DocumentCache::new(fetcher.clone());

        let first = cache.fetch_or_get("strings").await.unwrap();
        let second = cache.fetch_or_get("strings").await.unwrap();

        assert_eq!(fetcher.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.url, "https://pkg.go.dev/strings");
    }

    #[tokio::test]
    async fn distinct_packages_fetch_independently() {
        let fetcher = CountingFetcher::new(0);
        let cache = DocumentCache::new(fetcher.clone());

        cache.fetch_or_get("strings").await.unwrap();
        cache.fetch_or_get("bytes").await.unwrap();

        assert_eq!(fetcher.calls(), 2);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn fetch_errors_are_not_cached() {
        let fetcher = CountingFetcher::new(1);
        let cache = DocumentCache::new(fetcher.clone());

        let err = cache.fetch_or_get("strings").await.unwrap_err();
        assert!(matches!(err, DocError::Fetch { .. }));
        assert!(cache.is_empty().await);

        cache.fetch_or_get("strings").await.unwrap();
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn not_found_propagates_and_retries_next_time() {
        let fetcher = CountingFetcher::new(0);
        let cache = DocumentCache::new(fetcher.clone());

        for _ in 0..2 {
            let err = cache.fetch_or_get("missing").await.unwrap_err();
            assert_eq!(err, DocError::NotFound("missing".to_owned()));
        }

        assert_eq!(fetcher.calls(), 2);
        assert!(cache.get("missing").await.is_none());
    }

    /// Keeps callers inside `fetch` until both racing lookups have missed.
    struct GatedFetcher {
        gate: Barrier,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DocFetcher for GatedFetcher {
        async fn fetch(&self, package: &str) -> Result<Document, DocError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.wait().await;
            Ok(Document {
                package: package.to_owned(),
                ..Document::default()
            })
        }
    }

    #[tokio::test]
    async fn racing_misses_share_the_first_stored_document() {
        let fetcher = Arc::new(GatedFetcher {
            gate: Barrier::new(2),
            calls: AtomicUsize::new(0),
        });
        let cache = DocumentCache::new(fetcher.clone());

        let (first, second) = tokio::join!(
            cache.fetch_or_get("strings"),
            cache.fetch_or_get("strings")
        );
        let (first, second) = (first.unwrap(), second.unwrap());

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &cache.get("strings").await.unwrap()));
        assert_eq!(cache.len().await, 1);
    }
}
