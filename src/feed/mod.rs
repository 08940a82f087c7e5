//! The pagination engine: current-thread bookkeeping plus windowed,
//! cursor-addressed access to the postings.

pub mod cache;
pub mod resolver;

pub use cache::PostingCache;
pub use resolver::{ThreadResolver, ThreadState};

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::app::{HirewireError, Result};
use crate::config::FeedConfig;
use crate::domain::{Cursor, HiringThread, Posting};
use crate::fetcher::window::WindowFetcher;
use crate::fetcher::HiringApi;

pub struct JobFeed {
    resolver: ThreadResolver,
    state: ThreadState,
    cache: Arc<PostingCache>,
    fetcher: WindowFetcher,
    staleness: Duration,
}

impl JobFeed {
    pub fn new(
        api: Arc<dyn HiringApi + Send + Sync>,
        config: &FeedConfig,
        bot_author: &str,
    ) -> Self {
        let cache = Arc::new(PostingCache::new());
        Self {
            resolver: ThreadResolver::new(api.clone(), bot_author),
            state: ThreadState::new(),
            cache: cache.clone(),
            fetcher: WindowFetcher::with_workers(api, cache, config.fetch_workers),
            staleness: Duration::seconds(config.staleness_secs as i64),
        }
    }

    /// First resolution at startup. Failure here is fatal to the process:
    /// there is no thread to serve from.
    pub async fn init(&self) -> Result<()> {
        let thread = self.resolver.resolve().await?;
        self.state.publish(Arc::new(thread));
        Ok(())
    }

    /// Snapshot of the current thread, if one has been resolved.
    pub fn current_thread(&self) -> Option<Arc<HiringThread>> {
        self.state.snapshot()
    }

    /// Number of postings parsed and retained so far.
    pub fn cached_postings(&self) -> usize {
        self.cache.len()
    }

    /// Re-resolve and publish when the staleness window has elapsed, or when
    /// no thread exists yet. Returns whether a new snapshot was published.
    pub async fn refresh_if_stale(&self) -> Result<bool> {
        match self.state.snapshot() {
            Some(thread) if !thread.is_stale(Utc::now(), self.staleness) => Ok(false),
            _ => {
                let thread = self.resolver.resolve().await?;
                self.state.publish(Arc::new(thread));
                Ok(true)
            }
        }
    }

    /// One page of postings, beginning after `cursor`.
    ///
    /// Never more than `page_size` postings; an exhausted cursor yields an
    /// empty page; a cursor id that is not in the current thread falls open
    /// to the beginning of the feed; results come back in the thread's
    /// comment order. A page may be shorter than `page_size` when individual
    /// items were unavailable; those are logged and retried on a later pass.
    pub async fn posts(&self, cursor: Cursor, page_size: usize) -> Result<Vec<Posting>> {
        if page_size == 0 {
            return Err(HirewireError::InvalidArgument(
                "page size must be positive".into(),
            ));
        }

        let thread = self.current_or_resolve().await?;

        let start = match cursor {
            Cursor::Start => 0,
            // Resume after the cursor item. An id that aged out of the list
            // (or never was in it) starts from the beginning.
            Cursor::After(id) => thread
                .child_ids
                .iter()
                .position(|&c| c == id)
                .map(|k| k + 1)
                .unwrap_or(0),
        };

        if start >= thread.child_ids.len() {
            return Ok(Vec::new());
        }

        let end = (start + page_size).min(thread.child_ids.len());
        Ok(self
            .fetcher
            .fetch_window(&thread.child_ids[start..end])
            .await)
    }

    /// Current snapshot, resolving on demand when missing or stale.
    ///
    /// With no snapshot at all, a resolution failure fails the caller. With a
    /// stale snapshot, a resolution failure falls back to serving the stale
    /// one; the refresh loop retries on its next tick anyway.
    async fn current_or_resolve(&self) -> Result<Arc<HiringThread>> {
        match self.state.snapshot() {
            Some(thread) if !thread.is_stale(Utc::now(), self.staleness) => Ok(thread),
            Some(stale) => match self.resolver.resolve().await {
                Ok(thread) => {
                    let thread = Arc::new(thread);
                    self.state.publish(thread.clone());
                    Ok(thread)
                }
                Err(e) => {
                    tracing::warn!("Re-resolution failed, serving previous thread: {}", e);
                    Ok(stale)
                }
            },
            None => {
                let thread = Arc::new(self.resolver.resolve().await?);
                self.state.publish(thread.clone());
                Ok(thread)
            }
        }
    }
}
