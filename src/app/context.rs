use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::feed::JobFeed;
use crate::fetcher::http::HttpHiringApi;
use crate::fetcher::HiringApi;

pub struct AppContext {
    pub config: Config,
    pub feed: Arc<JobFeed>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let api: Arc<dyn HiringApi + Send + Sync> =
            Arc::new(HttpHiringApi::new(&config.upstream)?);
        Ok(Self::with_api(config, api))
    }

    /// Wire the context around an injected upstream, for tests with fakes.
    pub fn with_api(config: Config, api: Arc<dyn HiringApi + Send + Sync>) -> Self {
        let feed = Arc::new(JobFeed::new(
            api,
            &config.feed,
            &config.upstream.bot_author,
        ));
        Self { config, feed }
    }
}
