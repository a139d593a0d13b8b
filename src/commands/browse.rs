//! Interactive browsing session over stdin

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::render::output;
use crate::controller::PageController;
use crate::fetch::Fetcher;
use crate::Site;

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a page identifier
    Open(String),
    Back,
    Forward,
    /// Click the mobile menu toggle
    Menu,
    /// Click a navigation link
    Click(String),
    /// Print the session history
    History,
    Quit,
}

impl Command {
    /// Parse an input line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line {
            "back" => Command::Back,
            "forward" => Command::Forward,
            "menu" => Command::Menu,
            "history" => Command::History,
            "quit" | "exit" => Command::Quit,
            _ => match line.strip_prefix("click ") {
                Some(page) => Command::Click(page.trim().to_string()),
                None => Command::Open(line.trim_start_matches('/').to_string()),
            },
        };
        Some(command)
    }
}

/// Run a session reading commands from stdin
pub async fn run(site: &Site, shell: bool) -> Result<()> {
    let mut controller = site.controller()?;
    let mut stdout = tokio::io::stdout();

    controller.initialize().await;
    write_page(&mut stdout, &controller, shell).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        if command == Command::Quit {
            break;
        }
        if execute(&mut controller, &command, &mut stdout).await? {
            write_page(&mut stdout, &controller, shell).await?;
        }
    }

    Ok(())
}

/// Apply a command; returns whether the page should be printed again
pub async fn execute<F, W>(
    controller: &mut PageController<F>,
    command: &Command,
    out: &mut W,
) -> Result<bool>
where
    F: Fetcher,
    W: AsyncWrite + Unpin,
{
    let changed = match command {
        Command::Open(page) => {
            controller.navigate_to(page).await;
            true
        }
        Command::Back => report(out, controller.back().await, "no previous page").await?,
        Command::Forward => report(out, controller.forward().await, "no next page").await?,
        Command::Menu => {
            let open = controller.toggle_mobile_menu();
            let line = format!("menu {}\n", if open { "open" } else { "closed" });
            out.write_all(line.as_bytes()).await?;
            false
        }
        Command::Click(page) => {
            let clicked = controller.click_nav_link(page).await;
            report(out, clicked, "no such navigation link").await?
        }
        Command::History => {
            let history = controller.history();
            for (i, entry) in history.entries().iter().enumerate() {
                let marker = if i == history.index() { '*' } else { ' ' };
                let line = format!("{} {}\n", marker, serde_json::to_string(entry)?);
                out.write_all(line.as_bytes()).await?;
            }
            false
        }
        Command::Quit => false,
    };

    out.flush().await?;
    Ok(changed)
}

async fn report<W: AsyncWrite + Unpin>(out: &mut W, ok: bool, message: &str) -> Result<bool> {
    if !ok {
        out.write_all(format!("{}\n", message).as_bytes()).await?;
    }
    Ok(ok)
}

async fn write_page<F, W>(out: &mut W, controller: &PageController<F>, shell: bool) -> Result<()>
where
    F: Fetcher,
    W: AsyncWrite + Unpin,
{
    let html = output(controller, shell);
    let header = format!("--- {} ---\n", controller.history().current().url);
    out.write_all(header.as_bytes()).await?;
    out.write_all(html.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}
