//! mdsite: a headless Markdown site navigator
//!
//! A site is a directory of Markdown pages (`pages/*.md`), blog posts
//! (`blog/*.md`) and a blog index (`blog/index.json`). The
//! [`controller::PageController`] resolves page identifiers such as `about` or
//! `blog/welcome` to HTML, swaps it into a [`dom::Document`] and records
//! navigation in a [`history::History`], the way a single-page site does in
//! the browser.

pub mod commands;
pub mod config;
pub mod content;
pub mod controller;
pub mod dom;
pub mod fetch;
pub mod helpers;
pub mod history;
pub mod route;
pub mod templates;

use anyhow::Result;
use std::path::Path;

use controller::PageController;
use fetch::FsFetcher;
use templates::TemplateRenderer;

/// A site on disk
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory; resource paths resolve below it
    pub base_dir: std::path::PathBuf,
}

impl Site {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// A controller fetching from this site's directory
    pub fn controller(&self) -> Result<PageController<FsFetcher>> {
        let mut templates = TemplateRenderer::new(&self.config.date_format)?;
        if let Some(dir) = &self.config.template_dir {
            let loaded = templates.load_overrides(&self.base_dir.join(dir))?;
            tracing::info!("Using {} template override(s) from {}", loaded, dir);
        }

        Ok(PageController::with_templates(
            self.config.clone(),
            FsFetcher::new(&self.base_dir),
            templates,
        ))
    }
}
