use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::config::UpstreamConfig;
use crate::fetcher::{HiringApi, Item, SearchResponse};

/// Query sent to the search service. The quotes ask for the exact phrase;
/// `tags=story` limits hits to root posts.
const SEARCH_QUERY: &str = "\"who is hiring\"";

pub struct HttpHiringApi {
    client: Client,
    search_url: Url,
    item_base: Url,
}

impl HttpHiringApi {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        let mut search_url = Url::parse(&config.search_base_url)?.join("api/v1/search_by_date")?;
        search_url
            .query_pairs_mut()
            .append_pair("query", SEARCH_QUERY)
            .append_pair("tags", "story");

        let item_base = Url::parse(&config.item_base_url)?;

        Ok(Self {
            client,
            search_url,
            item_base,
        })
    }

    fn item_url(&self, id: u64) -> Result<Url> {
        Ok(self.item_base.join(&format!("v0/item/{id}.json"))?)
    }
}

#[async_trait]
impl HiringApi for HttpHiringApi {
    async fn search_latest(&self) -> Result<SearchResponse> {
        let response = self
            .client
            .get(self.search_url.clone())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn item(&self, id: u64) -> Result<Item> {
        let response = self
            .client
            .get(self.item_url(id)?)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
