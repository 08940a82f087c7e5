use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::parser;

/// One parsed job posting, built from a single child comment of the hiring
/// thread. Immutable once built; owned by the posting cache.
#[derive(Debug, Clone, Serialize)]
pub struct Posting {
    pub id: u64,
    /// Raw heading segment, kept as a display fallback for clients that do
    /// not want the heuristic company/job-title split.
    pub title: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub description: String,
    pub remote: bool,
    pub posted_at: DateTime<Utc>,
}

impl Posting {
    pub fn from_text(id: u64, text: &str, posted_at: DateTime<Utc>) -> Self {
        let parsed = parser::parse(text);
        Self {
            id,
            title: parsed.job_title.clone(),
            company: parsed.company,
            job_title: parsed.job_title,
            description: parsed.description,
            remote: parsed.remote,
            posted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_heading() {
        let posting = Posting::from_text(
            7,
            "Acme Corp | Senior Rust Engineer | Berlin | We build tools.",
            Utc::now(),
        );
        assert_eq!(posting.id, 7);
        assert_eq!(posting.company.as_deref(), Some("Acme Corp "));
        assert_eq!(
            posting.job_title.as_deref(),
            Some("Acme Corp | Senior Rust Engineer | Berlin ")
        );
        assert_eq!(posting.title, posting.job_title);
        assert_eq!(posting.description, " We build tools.");
        assert!(!posting.remote);
    }

    #[test]
    fn test_from_text_without_separator() {
        let posting = Posting::from_text(8, "We are hiring, remote friendly.", Utc::now());
        assert!(posting.company.is_none());
        assert!(posting.job_title.is_none());
        assert!(posting.title.is_none());
        assert_eq!(posting.description, "We are hiring, remote friendly.");
        assert!(posting.remote);
    }
}
