//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::{commands, Folio};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Blog posts and project catalog for a portfolio site", long_about = None)]
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
    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, slug, tag, project, featured, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Print a rendered post
    Post {
        /// Post slug (file name without extension)
        slug: String,
    },

    /// Print a project as JSON
    Project {
        /// Project slug
        slug: String,
    },

    /// Filter the project catalog
    Projects {
        /// Category to keep ("all" for every category)
        #[arg(long, default_value = "all")]
        category: String,

        /// Case-insensitive text matched against title, description, and tags
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug for the file name (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Export posts and projects as JSON
    Export {
        /// Output directory
        #[arg(short, long, default_value = "public/data")]
        out: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = Folio::new(&base_dir)?;
            commands::list::run(&site, &r#type)?;
        }

        Commands::Post { slug } => {
            let site = Folio::new(&base_dir)?;
            commands::show::post(&site, &slug)?;
        }

        Commands::Project { slug } => {
            let site = Folio::new(&base_dir)?;
            commands::show::project(&site, &slug)?;
        }

        Commands::Projects { category, query } => {
            let site = Folio::new(&base_dir)?;
            commands::show::projects(&site, &category, &query)?;
        }

        Commands::New { title, slug } => {
            let site = Folio::new(&base_dir)?;
            let path = commands::new::create_post(&site, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Export { out } => {
            let site = Folio::new(&base_dir)?;
            let out = if out.is_absolute() {
                out
            } else {
                site.base_dir.join(out)
            };
            tracing::info!("Exporting site data to {:?}", out);
            let summary = commands::export::run(&site, &out)?;
            println!(
                "Exported {} posts, {} projects, {} categories",
                summary.posts, summary.projects, summary.categories
            );
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
