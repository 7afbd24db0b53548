//! CLI entry point for blogcat

use anyhow::{Context, Result};
use blogcat::content::Category;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogcat")]
#[command(version)]
#[command(about = "A static blog generator that builds one listing page per category", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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

    /// Create a new post (a draft unless --publish is given)
    New {
        /// Title of the new post
        title: String,

        /// Category key (javascript, typescript, react, next, sveltekit, css, html, node, git)
        #[arg(short = 'C', long)]
        category: Category,

        /// Create the post as published instead of as a draft
        #[arg(long)]
        publish: bool,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, draft, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogcat=debug,info"
    } else {
        "blogcat=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            blogcat::commands::init::init_site(&target_dir)?;
            println!("Initialized empty site in {:?}", target_dir);
        }

        Commands::New {
            title,
            category,
            publish,
        } => {
            let site = blogcat::Site::new(&base_dir)?;
            tracing::info!("Creating new {} post with title: {}", category, title);
            let path = site.new_post(&title, category, publish)?;
            println!("Created: {:?}", path);
        }

        Commands::Generate => {
            let site = blogcat::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let site = blogcat::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = blogcat::Site::new(&base_dir)?;
            blogcat::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("blogcat version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
