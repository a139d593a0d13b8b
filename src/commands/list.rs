//! List blog posts

use anyhow::Result;

use crate::helpers::display_date;
use crate::Site;

/// Print the session's blog summaries, including built-in fallbacks
pub async fn run(site: &Site) -> Result<()> {
    let mut controller = site.controller()?;
    controller.load_blog_summaries().await;

    let summaries = controller.summaries();
    println!("Posts ({}):", summaries.len());
    for post in summaries {
        println!(
            "  {} - {} [blog/{}]",
            display_date(&post.date, "YYYY-MM-DD"),
            post.title,
            post.slug
        );
    }

    Ok(())
}
