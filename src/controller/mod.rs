//! Page controller
//!
//! Resolves page identifiers to HTML, writes it into the document's content
//! container and mirrors navigation into the session history.
//!
//! Resolution ([`PageController::load_page`]) only touches the document.
//! [`PageController::navigate_to`] is the user-facing entry point: it loads
//! the page and then pushes exactly one history entry. Back/forward traversal
//! goes through [`PageController::handle_pop_state`], which loads without
//! pushing.

mod state;

pub use state::AppState;

use anyhow::Result;

use crate::config::SiteConfig;
use crate::content::{default_summaries, find_summary, MarkdownRenderer, PostSummary};
use crate::dom::Document;
use crate::fetch::Fetcher;
use crate::helpers::title_from_slug;
use crate::history::{History, HistoryState, PopStateEvent};
use crate::route::{page_url, Route, StaticPage};
use crate::templates::{self, PostView, TemplateRenderer};

/// The single controller of a browsing session
pub struct PageController<F: Fetcher> {
    config: SiteConfig,
    fetcher: F,
    markdown: MarkdownRenderer,
    templates: TemplateRenderer,
    state: AppState,
    document: Document,
    history: History,
}

impl<F: Fetcher> PageController<F> {
    /// Create a controller over a fresh document and history
    pub fn new(config: SiteConfig, fetcher: F) -> Result<Self> {
        let templates = TemplateRenderer::new(&config.date_format)?;
        Ok(Self::with_templates(config, fetcher, templates))
    }

    /// Create a controller rendering fragments with `templates`
    pub fn with_templates(config: SiteConfig, fetcher: F, templates: TemplateRenderer) -> Self {
        let markdown = MarkdownRenderer::with_options(&config.highlight);
        let document = Document::new(&config);

        Self {
            config,
            fetcher,
            markdown,
            templates,
            state: AppState::new(),
            document,
            history: History::new("/"),
        }
    }

    /// Wire the mobile menu, show the home page and load the blog summaries
    pub async fn initialize(&mut self) {
        if self.document.wire_mobile_toggle() {
            tracing::debug!("Mobile menu toggle wired");
        }

        // The initial page is not a user navigation; it annotates the
        // starting entry instead of pushing a new one.
        self.load_page("home").await;
        self.history
            .replace_state(HistoryState::new("home"), &page_url("home"));

        self.load_blog_summaries().await;
    }

    /// Load a page and record it in history
    pub async fn navigate_to(&mut self, page_id: &str) {
        self.load_page(page_id).await;
        self.history
            .push_state(HistoryState::new(page_id), &page_url(page_id));
    }

    /// Load a page into the content container without touching history
    pub async fn load_page(&mut self, page_id: &str) {
        let route = Route::parse(page_id);
        if route.needs_fetch() {
            tracing::debug!("Loading {} from the network", route);
        } else {
            tracing::debug!("Loading {:?} as {:?}", page_id, route);
        }

        self.state.set_current_page(page_id);
        self.document.set_active_link(route.nav_key());
        self.document.set_content(templates::LOADING);

        let html = match self.resolve(&route).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Error loading page {}: {:#}", page_id, e);
                templates::ERROR.to_string()
            }
        };

        self.document.set_content(html);
    }

    /// Re-run navigation for a traversed history entry
    pub async fn handle_pop_state(&mut self, event: &PopStateEvent) {
        match &event.state {
            Some(state) => self.load_page(&state.page).await,
            None => tracing::debug!("popstate without page state ignored"),
        }
    }

    /// Browser back button; returns false at the start of history
    pub async fn back(&mut self) -> bool {
        match self.history.back() {
            Some(event) => {
                self.handle_pop_state(&event).await;
                true
            }
            None => false,
        }
    }

    /// Browser forward button; returns false at the end of history
    pub async fn forward(&mut self) -> bool {
        match self.history.forward() {
            Some(event) => {
                self.handle_pop_state(&event).await;
                true
            }
            None => false,
        }
    }

    /// Click on the mobile menu toggle; returns whether the menu is open
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.document.toggle_menu()
    }

    /// Click on a navigation link: closes the menu and navigates
    pub async fn click_nav_link(&mut self, page: &str) -> bool {
        match self.document.click_nav_link(page) {
            Some(target) => {
                self.navigate_to(&target).await;
                true
            }
            None => false,
        }
    }

    /// Fetch the blog summary index once per session, falling back to built-ins
    pub async fn load_blog_summaries(&mut self) {
        if self.state.summaries_loaded() {
            return;
        }

        let path = self.config.blog_index_path();
        let summaries = match self.fetcher.fetch_json::<Vec<PostSummary>>(&path).await {
            Ok(summaries) => {
                tracing::info!("Loaded {} blog posts from {}", summaries.len(), path);
                summaries
            }
            Err(e) => {
                tracing::warn!("No blog index found ({}), using default posts", e);
                default_summaries()
            }
        };

        self.state.set_summaries(summaries);
    }

    /// Blog list from the in-memory summaries; never fetches
    pub fn render_blog_list(&self) -> Result<String> {
        self.templates.blog_list(self.state.summaries())
    }

    /// Fetch and render one blog post
    pub async fn render_blog_post(&self, slug: &str) -> Result<String> {
        let path = self.config.post_path(slug);
        let markdown = match self.fetcher.fetch_text(&path).await {
            Ok(markdown) => markdown,
            Err(e) => {
                tracing::error!("Error loading blog post: {}", e);
                return self.templates.post_not_found(slug);
            }
        };

        let content = self.markdown.render(&markdown)?;
        let view = match find_summary(self.state.summaries(), slug) {
            Some(summary) => PostView {
                title: summary.title.clone(),
                date: Some(summary.date.clone()),
                content,
            },
            None => PostView {
                title: title_from_slug(slug),
                date: None,
                content,
            },
        };

        self.templates.blog_post(&view)
    }

    async fn resolve(&self, route: &Route) -> Result<String> {
        match route {
            Route::StaticPage(page) => self.render_static_page(*page).await,
            Route::BlogList => self.render_blog_list(),
            Route::BlogPost(slug) => self.render_blog_post(slug).await,
            Route::NotFound(_) => Ok(templates::NOT_FOUND.to_string()),
        }
    }

    async fn render_static_page(&self, page: StaticPage) -> Result<String> {
        let path = self.config.page_path(page.name());
        match self.fetcher.fetch_text(&path).await {
            Ok(markdown) => {
                let html = self.markdown.render(&markdown)?;
                self.templates.markdown_page(&html)
            }
            Err(e) => {
                tracing::error!("Error loading markdown: {}", e);
                self.templates.load_failed(&path)
            }
        }
    }

    pub fn current_page(&self) -> &str {
        self.state.current_page()
    }

    pub fn summaries(&self) -> &[PostSummary] {
        self.state.summaries()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
