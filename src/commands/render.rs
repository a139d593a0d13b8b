//! Render a single page

use anyhow::Result;

use crate::controller::PageController;
use crate::fetch::Fetcher;
use crate::Site;

/// Start a session, navigate to `page` and return the resulting HTML
pub async fn run(site: &Site, page: &str, shell: bool) -> Result<String> {
    let mut controller = site.controller()?;
    render_page(&mut controller, page).await;
    Ok(output(&controller, shell))
}

/// Initialize a session and navigate to `page` unless it is the start page
pub async fn render_page<F: Fetcher>(controller: &mut PageController<F>, page: &str) {
    controller.initialize().await;
    if page != "home" {
        controller.navigate_to(page).await;
    }
    tracing::debug!("Rendered {}", page);
}

/// Content container, or the whole document with `shell`
pub fn output<F: Fetcher>(controller: &PageController<F>, shell: bool) -> String {
    if shell {
        controller.document().render()
    } else {
        controller.document().content().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_render_scaffolded_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let site = Site::new(dir.path()).unwrap();

        let html = run(&site, "about", false).await.unwrap();
        assert!(html.contains("<h1>About</h1>"));

        let html = run(&site, "blog/markdown-guide", false).await.unwrap();
        assert!(html.contains(r#"<h1 class="blog-post-title">Markdown Guide</h1>"#));
        assert!(html.contains("Published on January 2, 2024"));
        assert!(html.contains("<table>"));

        let html = run(&site, "blog", true).await.unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"class="nav-link active">Blog</a>"#));
    }

    #[tokio::test]
    async fn test_render_empty_directory() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let html = run(&site, "home", false).await.unwrap();
        assert!(html.contains("Failed to load content from pages/home.md"));

        let html = run(&site, "blog", false).await.unwrap();
        assert!(html.contains("Welcome to My Blog"));
    }
}
