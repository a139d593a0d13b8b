//! CLI entry point for mdsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version)]
#[command(about = "Browse a Markdown site the way its single-page front end does", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render one page and print it
    #[command(alias = "r")]
    Render {
        /// Page identifier, e.g. `about` or `blog/welcome`
        #[arg(default_value = "home")]
        page: String,

        /// Print the whole document instead of the content container
        #[arg(long)]
        shell: bool,
    },

    /// Navigate interactively, one command per line on stdin
    #[command(alias = "b")]
    Browse {
        /// Print the whole document after each navigation
        #[arg(long)]
        shell: bool,
    },

    /// List blog posts
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries page output, so logs go to stderr
    let filter = if cli.debug {
        "mdsite=debug,info"
    } else {
        "mdsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            mdsite::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Render { page, shell } => {
            let site = mdsite::Site::new(&base_dir)?;
            let html = mdsite::commands::render::run(&site, &page, shell).await?;
            println!("{}", html);
        }

        Commands::Browse { shell } => {
            let site = mdsite::Site::new(&base_dir)?;
            tracing::info!("Browsing {:?}", base_dir);
            mdsite::commands::browse::run(&site, shell).await?;
        }

        Commands::List => {
            let site = mdsite::Site::new(&base_dir)?;
            mdsite::commands::list::run(&site).await?;
        }

        Commands::Version => {
            println!("mdsite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
