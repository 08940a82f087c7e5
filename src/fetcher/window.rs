use std::sync::Arc;

use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;
use tokio::sync::Semaphore;

use crate::app::Result;
use crate::domain::Posting;
use crate::feed::PostingCache;
use crate::fetcher::HiringApi;

pub const DEFAULT_WORKERS: usize = 10;

/// Fetches one window of postings concurrently, one task per item, joined
/// back in window order.
pub struct WindowFetcher {
    api: Arc<dyn HiringApi + Send + Sync>,
    cache: Arc<PostingCache>,
    semaphore: Arc<Semaphore>,
}

impl WindowFetcher {
    pub fn new(api: Arc<dyn HiringApi + Send + Sync>, cache: Arc<PostingCache>) -> Self {
        Self::with_workers(api, cache, DEFAULT_WORKERS)
    }

    pub fn with_workers(
        api: Arc<dyn HiringApi + Send + Sync>,
        cache: Arc<PostingCache>,
        workers: usize,
    ) -> Self {
        Self {
            api,
            cache,
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// Fetch (or reuse from cache) every id in the window.
    ///
    /// Handles are awaited in spawn order, so completion order over the
    /// network never reorders the page. A failed item degrades only its own
    /// slot and is not cached, so a later page can retry it.
    pub async fn fetch_window(&self, ids: &[u64]) -> Vec<Posting> {
        let mut handles = Vec::with_capacity(ids.len());

        for &id in ids {
            let api = self.api.clone();
            let cache = self.cache.clone();
            let semaphore = self.semaphore.clone();

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");
                (id, fetch_single(api.as_ref(), &cache, id).await)
            }));
        }

        let mut postings = Vec::with_capacity(ids.len());
        for result in futures::future::join_all(handles).await {
            match result {
                Ok((_, Ok(posting))) => postings.push(posting),
                Ok((id, Err(e))) => {
                    tracing::warn!(id, "Dropping unavailable posting from page: {}", e);
                }
                Err(e) => {
                    tracing::error!("Task join error: {}", e);
                }
            }
        }

        postings
    }
}

async fn fetch_single(
    api: &(dyn HiringApi + Send + Sync),
    cache: &PostingCache,
    id: u64,
) -> Result<Posting> {
    if let Some(posting) = cache.get(id) {
        tracing::debug!(id, "Posting cache hit");
        return Ok(posting);
    }

    let item = api.item(id).await?;
    let text = decode_html_entities(item.text.as_deref().unwrap_or_default()).to_string();
    let posted_at = DateTime::<Utc>::from_timestamp(item.time, 0).unwrap_or_default();

    Ok(cache.insert(Posting::from_text(item.id, &text, posted_at)))
}
