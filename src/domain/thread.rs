use chrono::{DateTime, Duration, Utc};

/// The resolved root thread for the current hiring cycle.
///
/// Immutable once built: the refresh loop publishes a whole new snapshot, it
/// never mutates `child_ids` in place.
#[derive(Debug, Clone)]
pub struct HiringThread {
    pub story_id: u64,
    pub title: Option<String>,
    /// Direct reply ids in upstream comment order. The order is meaningful:
    /// cursors resolve against it.
    pub child_ids: Vec<u64>,
    pub resolved_at: DateTime<Utc>,
}

impl HiringThread {
    /// Thread with no postings, for when no hit matches the bot author.
    ///
    /// This month's thread may simply not exist yet, so an empty feed is
    /// served deliberately instead of an error.
    pub fn empty(resolved_at: DateTime<Utc>) -> Self {
        Self {
            story_id: 0,
            title: None,
            child_ids: Vec::new(),
            resolved_at,
        }
    }

    /// Whether the staleness window has elapsed since resolution.
    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now.signed_duration_since(self.resolved_at) >= window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread_resolved_at(resolved_at: DateTime<Utc>) -> HiringThread {
        HiringThread {
            story_id: 1,
            title: None,
            child_ids: vec![10, 11],
            resolved_at,
        }
    }

    #[test]
    fn test_fresh_within_window() {
        let resolved = Utc::now();
        let thread = thread_resolved_at(resolved);
        let now = resolved + Duration::seconds(59);
        assert!(!thread.is_stale(now, Duration::seconds(60)));
    }

    #[test]
    fn test_stale_at_window_boundary() {
        let resolved = Utc::now();
        let thread = thread_resolved_at(resolved);
        let now = resolved + Duration::seconds(60);
        assert!(thread.is_stale(now, Duration::seconds(60)));
    }

    #[test]
    fn test_stale_past_window() {
        let resolved = Utc::now();
        let thread = thread_resolved_at(resolved);
        let now = resolved + Duration::seconds(3600);
        assert!(thread.is_stale(now, Duration::seconds(60)));
    }

    #[test]
    fn test_empty_thread_has_no_children() {
        let thread = HiringThread::empty(Utc::now());
        assert!(thread.child_ids.is_empty());
        assert_eq!(thread.story_id, 0);
    }
}
