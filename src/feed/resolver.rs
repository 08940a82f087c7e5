use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::app::Result;
use crate::domain::HiringThread;
use crate::fetcher::HiringApi;

/// Resolves the current hiring thread from the search service.
pub struct ThreadResolver {
    api: Arc<dyn HiringApi + Send + Sync>,
    bot_author: String,
}

impl ThreadResolver {
    pub fn new(api: Arc<dyn HiringApi + Send + Sync>, bot_author: impl Into<String>) -> Self {
        Self {
            api,
            bot_author: bot_author.into(),
        }
    }

    /// Find the newest hiring thread posted by the bot account.
    ///
    /// Hits come back in descending chronological order, so the first author
    /// match is the current month's thread. No match yields an empty thread:
    /// the month's post may not exist yet, and that is served as an empty
    /// feed rather than an error.
    pub async fn resolve(&self) -> Result<HiringThread> {
        let response = self.api.search_latest().await?;
        let now = Utc::now();

        let Some(hit) = response
            .hits
            .into_iter()
            .find(|h| h.author == self.bot_author)
        else {
            tracing::warn!(author = %self.bot_author, "No hiring thread found for author");
            return Ok(HiringThread::empty(now));
        };

        tracing::info!(
            story_id = hit.story_id,
            children = hit.children.len(),
            "Resolved hiring thread"
        );

        Ok(HiringThread {
            story_id: hit.story_id,
            title: hit.title,
            child_ids: hit.children,
            resolved_at: now,
        })
    }
}

/// Shared holder of the current thread snapshot.
///
/// The only coordination point between the refresh loop and readers: writers
/// swap in a whole `Arc<HiringThread>`, readers clone the `Arc` out. Nobody
/// mutates a published thread, so a reader can never observe a torn state.
#[derive(Default)]
pub struct ThreadState {
    current: RwLock<Option<Arc<HiringThread>>>,
}

impl ThreadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<Arc<HiringThread>> {
        self.current
            .read()
            .expect("thread state lock poisoned")
            .clone()
    }

    pub fn publish(&self, thread: Arc<HiringThread>) {
        *self.current.write().expect("thread state lock poisoned") = Some(thread);
    }
}
