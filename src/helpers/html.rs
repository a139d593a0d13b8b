//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_START: Regex = Regex::new(r"\b\w").unwrap();
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Derive a display title from a post slug
///
/// # Examples
/// ```ignore
/// title_from_slug("my-first-post") // -> "My First Post"
/// ```
pub fn title_from_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Generate an in-site navigation anchor for a page identifier
pub fn page_link(page: &str, text: &str, class: Option<&str>) -> String {
    let href = if page == "home" {
        "/".to_string()
    } else {
        format!("/{}", page)
    };
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    format!(
        r#"<a href="{}" data-page="{}"{}>{}</a>"#,
        html_escape(&href),
        html_escape(page),
        class_attr,
        text
    )
}
