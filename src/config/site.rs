//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Directory
    pub pages_dir: String,
    pub blog_dir: String,
    pub blog_index: String,
    /// Directory of fragment template overrides
    pub template_dir: Option<String>,

    // Date format (Moment.js style)
    pub date_format: String,

    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub dom: DomConfig,

    // Navigation links, in menu order
    pub nav: Vec<NavItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),

            pages_dir: "pages".to_string(),
            blog_dir: "blog".to_string(),
            blog_index: "index.json".to_string(),
            template_dir: None,

            date_format: "MMMM D, YYYY".to_string(),

            highlight: HighlightConfig::default(),
            dom: DomConfig::default(),

            nav: vec![
                NavItem::new("home", "Home"),
                NavItem::new("about", "About"),
                NavItem::new("blog", "Blog"),
                NavItem::new("faq", "FAQ"),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resource path of a static Markdown page
    pub fn page_path(&self, name: &str) -> String {
        join_resource(&self.pages_dir, &format!("{}.md", name))
    }

    /// Resource path of a blog post's Markdown body
    pub fn post_path(&self, slug: &str) -> String {
        join_resource(&self.blog_dir, &format!("{}.md", slug))
    }

    /// Resource path of the blog summary index
    pub fn blog_index_path(&self) -> String {
        join_resource(&self.blog_dir, &self.blog_index)
    }
}

fn join_resource(dir: &str, file: &str) -> String {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

/// A navigation link entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub page: String,
    pub label: String,
}

impl NavItem {
    pub fn new(page: &str, label: &str) -> Self {
        Self {
            page: page.to_string(),
            label: label.to_string(),
        }
    }
}

/// Element ids and classes of the document shell
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    pub content_id: String,
    pub nav_menu_class: String,
    pub nav_link_class: String,
    pub mobile_toggle_id: String,
    /// Whether the shell has a mobile menu toggle at all
    pub mobile_toggle: bool,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            content_id: "content".to_string(),
            nav_menu_class: "nav-menu".to_string(),
            nav_link_class: "nav-link".to_string(),
            mobile_toggle_id: "mobile-menu".to_string(),
            mobile_toggle: true,
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub line_number: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            line_number: false,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.blog_index_path(), "blog/index.json");
        assert_eq!(config.nav.len(), 4);
        assert!(config.dom.mobile_toggle);
    }

    #[test]
    fn test_resource_paths() {
        let config = SiteConfig::default();
        assert_eq!(config.page_path("about"), "pages/about.md");
        assert_eq!(config.post_path("welcome"), "blog/welcome.md");

        let mut flat = SiteConfig::default();
        flat.pages_dir = String::new();
        flat.blog_dir = "/posts/".to_string();
        assert_eq!(flat.page_path("faq"), "faq.md");
        assert_eq!(flat.post_path("hello"), "posts/hello.md");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Notes
date_format: YYYY-MM-DD
dom:
  mobile_toggle: false
nav:
  - page: home
    label: Start
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.date_format, "YYYY-MM-DD");
        assert!(!config.dom.mobile_toggle);
        assert_eq!(config.dom.content_id, "content");
        assert_eq!(config.nav, vec![NavItem::new("home", "Start")]);
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(config.template_dir, None);
    }
}
