//! Page identifiers and their routes

use std::fmt;

/// Pages backed by a fixed Markdown resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPage {
    Home,
    About,
    Faq,
}

impl StaticPage {
    pub fn name(&self) -> &'static str {
        match self {
            StaticPage::Home => "home",
            StaticPage::About => "about",
            StaticPage::Faq => "faq",
        }
    }
}

/// A parsed page identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    StaticPage(StaticPage),
    BlogList,
    BlogPost(String),
    NotFound(String),
}

impl Route {
    /// Parse a raw page identifier such as `about` or `blog/welcome`
    pub fn parse(page_id: &str) -> Self {
        match page_id {
            "home" => Route::StaticPage(StaticPage::Home),
            "about" => Route::StaticPage(StaticPage::About),
            "faq" => Route::StaticPage(StaticPage::Faq),
            "blog" => Route::BlogList,
            _ => match page_id.strip_prefix("blog/") {
                Some(slug) if !slug.is_empty() => Route::BlogPost(slug.to_string()),
                _ => Route::NotFound(page_id.to_string()),
            },
        }
    }

    /// The page identifier this route was parsed from
    pub fn page_id(&self) -> String {
        match self {
            Route::StaticPage(page) => page.name().to_string(),
            Route::BlogList => "blog".to_string(),
            Route::BlogPost(slug) => format!("blog/{}", slug),
            Route::NotFound(raw) => raw.clone(),
        }
    }

    /// URL recorded in history for this route
    pub fn url(&self) -> String {
        page_url(&self.page_id())
    }

    /// Navigation link to highlight; blog posts highlight the blog link
    pub fn nav_key(&self) -> Option<&str> {
        match self {
            Route::StaticPage(page) => Some(page.name()),
            Route::BlogList | Route::BlogPost(_) => Some("blog"),
            Route::NotFound(_) => None,
        }
    }

    /// Whether resolving this route touches the network
    pub fn needs_fetch(&self) -> bool {
        matches!(self, Route::StaticPage(_) | Route::BlogPost(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.page_id())
    }
}

/// `/` for home, `/<pageId>` for everything else
pub fn page_url(page_id: &str) -> String {
    if page_id == "home" {
        "/".to_string()
    } else {
        format!("/{}", page_id)
    }
}
