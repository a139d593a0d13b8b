//! HTML fragments written into the content container
//!
//! Fragments with data are embedded Tera templates; the fixed ones are
//! plain constants so that error paths never depend on template rendering.

use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

use crate::content::PostSummary;
use crate::helpers::{display_date, html_escape};

/// Placeholder shown while content is being fetched
pub const LOADING: &str = r#"<div class="loading"><div class="spinner"></div></div>"#;

/// Fragment for identifiers that match no page
pub const NOT_FOUND: &str = r#"<div class="container"><h1>Page Not Found</h1><p>The page you are looking for does not exist.</p></div>"#;

/// Fragment for unexpected failures while resolving a page
pub const ERROR: &str =
    r#"<div class="container"><div class="error">Error loading page. Please try again.</div></div>"#;

/// Names of the fragments a site may override
pub const FRAGMENTS: [&str; 5] = [
    "markdown_page.html",
    "load_failed.html",
    "blog_list.html",
    "blog_post.html",
    "post_not_found.html",
];

/// Fragment renderer with the embedded templates
pub struct TemplateRenderer {
    tera: Tera,
    date_format: String,
}

impl TemplateRenderer {
    /// Create a new renderer with all fragments loaded
    pub fn new(date_format: &str) -> Result<Self> {
        let mut tera = Tera::default();

        // Values are escaped explicitly with `esc`; rendered Markdown goes in raw
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("markdown_page.html", include_str!("fragments/markdown_page.html")),
            ("load_failed.html", include_str!("fragments/load_failed.html")),
            ("blog_list.html", include_str!("fragments/blog_list.html")),
            ("blog_post.html", include_str!("fragments/blog_post.html")),
            ("post_not_found.html", include_str!("fragments/post_not_found.html")),
        ])?;

        tera.register_filter("esc", esc_filter);
        tera.register_filter("date_format", date_format_filter);

        Ok(Self {
            tera,
            date_format: date_format.to_string(),
        })
    }

    /// Replace one of the embedded fragments
    pub fn override_template(&mut self, name: &str, source: &str) -> Result<()> {
        if !FRAGMENTS.contains(&name) {
            bail!("Unknown template: {}. Available: {}", name, FRAGMENTS.join(", "));
        }
        self.tera.add_raw_template(name, source)?;
        Ok(())
    }

    /// Override fragments with same-named files found in `dir`
    pub fn load_overrides(&mut self, dir: &Path) -> Result<usize> {
        let mut loaded = 0;
        for name in FRAGMENTS {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            let source = fs::read_to_string(&path)?;
            self.override_template(name, &source)?;
            tracing::debug!("Loaded template override {:?}", path);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// A static page's rendered Markdown in its container markup
    pub fn markdown_page(&self, html: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("content", html.trim_end());
        self.render("markdown_page.html", &context)
    }

    /// Static page whose Markdown could not be fetched
    pub fn load_failed(&self, path: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("path", path);
        self.render("load_failed.html", &context)
    }

    /// One entry per summary, in the given order
    pub fn blog_list(&self, posts: &[PostSummary]) -> Result<String> {
        let mut context = Context::new();
        context.insert("posts", posts);
        context.insert("date_format", &self.date_format);
        self.render("blog_list.html", &context)
    }

    /// A blog post's rendered Markdown with its header
    pub fn blog_post(&self, post: &PostView) -> Result<String> {
        let mut context = Context::from_serialize(post)?;
        context.insert("date_format", &self.date_format);
        self.render("blog_post.html", &context)
    }

    /// Blog post whose Markdown could not be fetched
    pub fn post_not_found(&self, slug: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("slug", slug);
        self.render("post_not_found.html", &context)
    }
}

/// Template data for a single blog post
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub date: Option<String>,
    pub content: String,
}

/// Tera filter: escape HTML special characters
fn esc_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("esc", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Tera filter: format an ISO date string
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    Ok(tera::Value::String(display_date(&s, &format)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_summaries;

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new("MMMM D, YYYY").unwrap()
    }

    #[test]
    fn test_markdown_page() {
        let html = renderer().markdown_page("<h1>Hi</h1>\n").unwrap();
        assert_eq!(
            html.trim_end(),
            r#"<div class="container"><div class="markdown-content"><h1>Hi</h1></div></div>"#
        );
    }

    #[test]
    fn test_blog_list_order_and_count() {
        let html = renderer().blog_list(&default_summaries()).unwrap();
        assert_eq!(html.matches(r#"<article class="blog-post">"#).count(), 2);
        let welcome = html.find("Welcome to My Blog").unwrap();
        let guide = html.find("Markdown Guide").unwrap();
        assert!(welcome < guide);
        assert!(html.contains(r#"data-page="blog/welcome""#));
        assert!(html.contains("Published on January 1, 2024"));
        assert!(html.contains("Published on January 2, 2024"));
    }

    #[test]
    fn test_blog_list_escapes_summaries() {
        let posts = vec![PostSummary::new("x", "<script>", "2024-01-01", "a & b")];
        let html = renderer().blog_list(&posts).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_blog_list() {
        let html = renderer().blog_list(&[]).unwrap();
        assert!(html.contains(r#"<h1 class="section-title">Blog</h1>"#));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_blog_post_with_and_without_date() {
        let view = PostView {
            title: "Welcome".to_string(),
            date: Some("2024-01-01".to_string()),
            content: "<p>body</p>".to_string(),
        };
        let html = renderer().blog_post(&view).unwrap();
        assert!(html.contains(r#"<h1 class="blog-post-title">Welcome</h1>"#));
        assert!(html.contains("Published on January 1, 2024"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"data-page="blog""#));

        let view = PostView { date: None, ..view };
        let html = renderer().blog_post(&view).unwrap();
        assert!(!html.contains("Published on"));
    }

    #[test]
    fn test_override_template() {
        let mut renderer = renderer();
        renderer
            .override_template("post_not_found.html", "<p>No {{ slug | esc }} here</p>")
            .unwrap();
        assert_eq!(renderer.post_not_found("x").unwrap(), "<p>No x here</p>");

        assert!(renderer.override_template("layout.html", "").is_err());
        assert!(renderer.override_template("blog_list.html", "{% if %}").is_err());
    }

    #[test]
    fn test_load_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("load_failed.html"), "missing {{ path }}").unwrap();
        std::fs::write(dir.path().join("unrelated.html"), "ignored").unwrap();

        let mut renderer = renderer();
        assert_eq!(renderer.load_overrides(dir.path()).unwrap(), 1);
        assert_eq!(renderer.load_failed("pages/a.md").unwrap(), "missing pages/a.md");
    }

    #[test]
    fn test_not_found_fragments() {
        let html = renderer().post_not_found("welcome").unwrap();
        assert!(html.contains("Blog post not found: welcome"));
        assert!(html.contains("Back to Blog"));

        let html = renderer().load_failed("pages/about.md").unwrap();
        assert!(html.contains("Failed to load content from pages/about.md"));
    }
}
