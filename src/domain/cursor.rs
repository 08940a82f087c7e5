use std::str::FromStr;

use crate::app::HirewireError;

/// Pagination token: either the beginning of the feed or the id of the last
/// posting the caller has already seen.
///
/// A cursor is not a position. It is resolved against the current thread's
/// child list at request time, so it stays valid across refreshes as long as
/// the id is still present in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Start,
    After(u64),
}

impl FromStr for Cursor {
    type Err = HirewireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "start" {
            return Ok(Cursor::Start);
        }
        s.parse::<u64>()
            .map(Cursor::After)
            .map_err(|_| HirewireError::InvalidArgument(format!("invalid cursor: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_sentinel() {
        assert_eq!("start".parse::<Cursor>().unwrap(), Cursor::Start);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!("40563283".parse::<Cursor>().unwrap(), Cursor::After(40563283));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("Start".parse::<Cursor>().is_err());
        assert!("".parse::<Cursor>().is_err());
        assert!("-5".parse::<Cursor>().is_err());
        assert!("12abc".parse::<Cursor>().is_err());
    }
}
