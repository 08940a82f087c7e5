pub mod http;
pub mod window;

use async_trait::async_trait;
use serde::Deserialize;

use crate::app::Result;

/// One story hit from the search service.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub author: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub children: Vec<u64>,
    pub story_id: u64,
}

/// Search service response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// One item from the item service.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default)]
    pub by: Option<String>,
    /// HTML-escaped body text. Absent for deleted comments.
    #[serde(default)]
    pub text: Option<String>,
    /// Posting time, unix seconds.
    #[serde(default)]
    pub time: i64,
}

/// The two upstream endpoints the feed consumes. Implemented over HTTP in
/// production and by in-memory fakes in tests.
#[async_trait]
pub trait HiringApi {
    /// Newest story hits for the hiring query, descending by post date.
    async fn search_latest(&self) -> Result<SearchResponse>;

    /// Fetch a single item by id.
    async fn item(&self, id: u64) -> Result<Item>;
}
