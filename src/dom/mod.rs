//! Document model of the site shell
//!
//! The shell has one content container, a navigation menu holding the
//! navigation links, and an optional mobile toggle that opens and closes
//! the menu. Only the container's content changes between pages.

use crate::config::{DomConfig, SiteConfig};
use crate::helpers::{html_escape, page_link};

/// A navigation link in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Page identifier the link navigates to
    pub page: String,
    pub label: String,
    pub active: bool,
}

/// The site shell
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    ids: DomConfig,
    content: String,
    nav_links: Vec<NavLink>,
    menu_open: bool,
    mobile_toggle: bool,
    toggle_wired: bool,
}

impl Document {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            ids: config.dom.clone(),
            content: String::new(),
            nav_links: config
                .nav
                .iter()
                .map(|item| NavLink {
                    page: item.page.clone(),
                    label: item.label.clone(),
                    active: false,
                })
                .collect(),
            menu_open: false,
            mobile_toggle: config.dom.mobile_toggle,
            toggle_wired: false,
        }
    }

    /// Inner HTML of the content container
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, html: impl Into<String>) {
        self.content = html.into();
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    /// Page of the link currently marked active
    pub fn active_link(&self) -> Option<&str> {
        self.nav_links
            .iter()
            .find(|link| link.active)
            .map(|link| link.page.as_str())
    }

    /// Mark the link for `page` active and clear every other link
    pub fn set_active_link(&mut self, page: Option<&str>) {
        for link in &mut self.nav_links {
            link.active = Some(link.page.as_str()) == page;
        }
    }

    pub fn has_mobile_toggle(&self) -> bool {
        self.mobile_toggle
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Attach the mobile toggle's click handler. Returns false without a toggle.
    pub fn wire_mobile_toggle(&mut self) -> bool {
        self.toggle_wired = self.mobile_toggle;
        self.toggle_wired
    }

    /// Click on the mobile toggle; returns the new menu state
    pub fn toggle_menu(&mut self) -> bool {
        if self.toggle_wired {
            self.menu_open = !self.menu_open;
        }
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Click on a navigation link: closes the menu and yields the link's page
    pub fn click_nav_link(&mut self, page: &str) -> Option<String> {
        let target = self
            .nav_links
            .iter()
            .find(|link| link.page == page)
            .map(|link| link.page.clone())?;
        self.close_menu();
        Some(target)
    }

    /// Render the whole shell as an HTML document
    pub fn render(&self) -> String {
        let menu_class = if self.menu_open {
            format!("{} active", html_escape(&self.ids.nav_menu_class))
        } else {
            html_escape(&self.ids.nav_menu_class)
        };

        let links = self
            .nav_links
            .iter()
            .map(|link| {
                let class = if link.active {
                    format!("{} active", html_escape(&self.ids.nav_link_class))
                } else {
                    html_escape(&self.ids.nav_link_class)
                };
                format!(
                    "<li>{}</li>",
                    page_link(&link.page, &html_escape(&link.label), Some(&class))
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let toggle = if self.mobile_toggle {
            format!(
                r#"<div class="menu-toggle" id="{}"><span class="bar"></span><span class="bar"></span><span class="bar"></span></div>"#,
                html_escape(&self.ids.mobile_toggle_id)
            )
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
</head>
<body>
<nav class="navbar">
<div class="nav-container">
{toggle}
<ul class="{menu_class}">
{links}
</ul>
</div>
</nav>
<main id="{content_id}">{content}</main>
</body>
</html>
"#,
            title = html_escape(&self.title),
            toggle = toggle,
            menu_class = menu_class,
            links = links,
            content_id = html_escape(&self.ids.content_id),
            content = self.content,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link() {
        let mut doc = Document::new(&SiteConfig::default());
        doc.set_active_link(Some("about"));
        assert_eq!(doc.active_link(), Some("about"));

        doc.set_active_link(Some("blog"));
        assert_eq!(doc.active_link(), Some("blog"));
        assert_eq!(doc.nav_links().iter().filter(|l| l.active).count(), 1);

        doc.set_active_link(Some("missing"));
        assert_eq!(doc.active_link(), None);
    }

    #[test]
    fn test_mobile_menu() {
        let mut doc = Document::new(&SiteConfig::default());
        assert!(!doc.toggle_menu(), "unwired toggle does nothing");

        assert!(doc.wire_mobile_toggle());
        assert!(doc.toggle_menu());
        assert!(!doc.toggle_menu());

        doc.toggle_menu();
        assert_eq!(doc.click_nav_link("faq"), Some("faq".to_string()));
        assert!(!doc.is_menu_open());
    }

    #[test]
    fn test_without_mobile_toggle() {
        let mut config = SiteConfig::default();
        config.dom.mobile_toggle = false;
        let mut doc = Document::new(&config);
        assert!(!doc.wire_mobile_toggle());
        assert!(!doc.toggle_menu());
        assert!(!doc.render().contains("mobile-menu"));
    }

    #[test]
    fn test_click_unknown_link() {
        let mut doc = Document::new(&SiteConfig::default());
        doc.wire_mobile_toggle();
        doc.toggle_menu();
        assert_eq!(doc.click_nav_link("nope"), None);
        assert!(doc.is_menu_open());
    }

    #[test]
    fn test_render_escapes_configured_names() {
        let mut config = SiteConfig::default();
        config.dom.content_id = r#"main"><script>"#.to_string();
        config.dom.nav_menu_class = "menu\"x".to_string();
        config.dom.nav_link_class = "link'y".to_string();
        config.dom.mobile_toggle_id = "<toggle>".to_string();

        let html = Document::new(&config).render();
        assert!(html.contains(r#"<main id="main&quot;&gt;&lt;script&gt;">"#));
        assert!(html.contains(r#"<ul class="menu&quot;x">"#));
        assert!(html.contains(r#"class="link&#39;y""#));
        assert!(html.contains(r#"id="&lt;toggle&gt;""#));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<toggle>"));
    }

    #[test]
    fn test_render_shell() {
        let mut doc = Document::new(&SiteConfig::default());
        doc.set_content("<p>hi</p>");
        doc.set_active_link(Some("home"));
        let html = doc.render();
        assert!(html.contains(r#"<main id="content"><p>hi</p></main>"#));
        assert!(html.contains(r#"<ul class="nav-menu">"#));
        assert!(html.contains(r#"id="mobile-menu""#));
        assert!(html.contains(r#"<a href="/" data-page="home" class="nav-link active">Home</a>"#));
        assert!(html.contains(r#"<a href="/faq" data-page="faq" class="nav-link">FAQ</a>"#));
    }
}
