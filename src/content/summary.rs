//! Blog post summaries (`blog/index.json`)

use serde::{Deserialize, Serialize};

/// Metadata for one blog post, distinct from its Markdown body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Lookup key and resource name of the post
    pub slug: String,
    pub title: String,
    /// ISO date string
    pub date: String,
    pub excerpt: String,
}

impl PostSummary {
    pub fn new(slug: &str, title: &str, date: &str, excerpt: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            excerpt: excerpt.to_string(),
        }
    }
}

/// Built-in summaries used when the blog index cannot be loaded
pub fn default_summaries() -> Vec<PostSummary> {
    vec![
        PostSummary::new(
            "welcome",
            "Welcome to My Blog",
            "2024-01-01",
            "This is my first blog post. Welcome to my simple static site!",
        ),
        PostSummary::new(
            "markdown-guide",
            "Markdown Guide",
            "2024-01-02",
            "A quick guide on how to write content in Markdown for this site.",
        ),
    ]
}

/// Find the summary for a slug
pub fn find_summary<'a>(summaries: &'a [PostSummary], slug: &str) -> Option<&'a PostSummary> {
    summaries.iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summaries() {
        let slugs: Vec<_> = default_summaries().into_iter().map(|s| s.slug).collect();
        assert_eq!(slugs, vec!["welcome", "markdown-guide"]);
    }

    #[test]
    fn test_parse_index() {
        let json = r#"[
            {"slug": "b", "title": "B", "date": "2024-02-01", "excerpt": "second"},
            {"slug": "a", "title": "A", "date": "2024-01-01", "excerpt": "first"}
        ]"#;
        let summaries: Vec<PostSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].slug, "b");
        assert_eq!(find_summary(&summaries, "a").unwrap().excerpt, "first");
        assert!(find_summary(&summaries, "c").is_none());
    }
}
