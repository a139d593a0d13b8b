//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG: &str = r#"# Site configuration
title: My Site

# Directories, relative to the site root
pages_dir: pages
blog_dir: blog
blog_index: index.json
# Files here named like a built-in fragment (e.g. blog_list.html) replace it
# template_dir: templates

# Moment.js style date format for blog dates
date_format: MMMM D, YYYY

highlight:
  enable: true
  line_number: false
  theme: base16-ocean.dark

dom:
  content_id: content
  nav_menu_class: nav-menu
  nav_link_class: nav-link
  mobile_toggle_id: mobile-menu
  mobile_toggle: true

nav:
  - page: home
    label: Home
  - page: about
    label: About
  - page: blog
    label: Blog
  - page: faq
    label: FAQ
"#;

const HOME: &str = r#"# Welcome

This site is written in Markdown. Pick a page from the menu, or read the
[blog](/blog).
"#;

const ABOUT: &str = r#"# About

Tell your visitors who you are and what this site is about.
"#;

const FAQ: &str = r#"# FAQ

## How do I add a page?

Write a Markdown file under `pages/` and link it from the navigation.

## How do I add a blog post?

Write `blog/<slug>.md` and add an entry for `<slug>` to `blog/index.json`.
"#;

const WELCOME: &str = r#"This is my first blog post. Welcome to my simple static site!

Everything here is plain Markdown, rendered on demand.
"#;

const MARKDOWN_GUIDE: &str = r#"A quick guide on how to write content in Markdown for this site.

## Emphasis

Use `*italic*` for *italic* and `**bold**` for **bold**.

## Code

```rust
fn main() {
    println!("Hello, world!");
}
```

## Tables

| Syntax | Result |
|--------|--------|
| `# H1` | Heading |
| `- item` | List |
"#;

/// Initialize a new site in the given directory; existing files are kept
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("pages"))?;
    fs::create_dir_all(target_dir.join("blog"))?;

    let index = serde_json::to_string_pretty(&crate::content::default_summaries())?;

    let files = [
        ("_config.yml", CONFIG),
        ("pages/home.md", HOME),
        ("pages/about.md", ABOUT),
        ("pages/faq.md", FAQ),
        ("blog/index.json", index.as_str()),
        ("blog/welcome.md", WELCOME),
        ("blog/markdown-guide.md", MARKDOWN_GUIDE),
    ];

    for (name, content) in files {
        let path = target_dir.join(name);
        if path.exists() {
            tracing::warn!("Keeping existing {:?}", path);
            continue;
        }
        fs::write(&path, content)?;
        tracing::debug!("Created {:?}", path);
    }

    Ok(())
}
