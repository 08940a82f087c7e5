//! # Hirewire
//!
//! A small HTTP service that serves the newest "who is hiring" discussion
//! thread as a cursor-paginated feed of parsed job postings.
//!
//! ## Architecture
//!
//! ```text
//! Server → JobFeed → ThreadResolver ──→ search service
//!                  → WindowFetcher ───→ PostingCache / item service
//! RefreshLoop ─────→ JobFeed (periodic re-resolution)
//! ```
//!
//! The resolver finds the current month's root thread; the feed maps a
//! cursor onto the thread's ordered child-id list and hands the resulting
//! window to the fetcher, which retrieves and parses items concurrently with
//! a process-lifetime cache. A background loop keeps the thread snapshot
//! fresh while readers keep serving the previous one.

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the upstream client into the feed;
/// [`HirewireError`](app::HirewireError) is the crate-wide error type.
pub mod app;

/// TOML configuration with per-section defaults.
pub mod config;

/// Core domain models.
///
/// - [`HiringThread`](domain::HiringThread): the resolved root thread snapshot
/// - [`Posting`](domain::Posting): one parsed job entry
/// - [`Cursor`](domain::Cursor): pagination token
pub mod domain;

/// The feed engine: thread resolution, the shared snapshot, the posting
/// cache, and cursor-addressed pagination.
pub mod feed;

/// Upstream access.
///
/// - [`HiringApi`](fetcher::HiringApi): async trait over the search and item services
/// - [`HttpHiringApi`](fetcher::http::HttpHiringApi): reqwest-based implementation
/// - [`WindowFetcher`](fetcher::window::WindowFetcher): concurrent per-item fetching
pub mod fetcher;

/// Heuristic posting-text parser.
pub mod parser;

/// Background refresh of the current thread snapshot.
pub mod refresh;

/// HTTP surface built with axum.
pub mod server;
