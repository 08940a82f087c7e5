//! Heuristic parsing of a posting's free text.
//!
//! Hiring posts conventionally open with a `|`-separated heading
//! ("Company | Role | Location | ...") followed by free text, but nothing
//! enforces the convention. The split rules here are deliberately simple and
//! are not expected to be right for every post.

/// Fields recovered from a posting's raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPosting {
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub description: String,
    pub remote: bool,
}

/// Split a posting's text on its heading separator.
///
/// The heading is everything before the *last* `|`, so headings that embed
/// extra `|`-delimited fields still parse; the company is everything before
/// the *first* `|`. Without a separator the whole text is the description.
pub fn parse(text: &str) -> ParsedPosting {
    let remote = text.to_lowercase().contains("remote");

    match text.rfind('|') {
        None => ParsedPosting {
            company: None,
            job_title: None,
            description: text.to_string(),
            remote,
        },
        Some(last) => {
            let first = text.find('|').unwrap_or(last);
            ParsedPosting {
                company: Some(text[..first].to_string()),
                job_title: Some(text[..last].to_string()),
                description: text[last + 1..].to_string(),
                remote,
            }
        }
    }
}
