//! Vitrine CLI - catalog inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # List catalog categories
//! vitrine categories
//!
//! # List products, optionally filtered
//! vitrine products --search mouse --category electronics
//!
//! # Show a single product
//! vitrine show 7
//! ```
//!
//! # Commands
//!
//! - `categories` - List catalog categories
//! - `products` - List products with search and category filters
//! - `show` - Show a single product by id

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog categories
    Categories,
    /// List products with optional search and category filters
    Products {
        /// Title search query (matched case-insensitively)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category filter ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Show a single product by id
    Show {
        /// Product id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_cli=info,vitrine_storefront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> vitrine_storefront::error::Result<()> {
    match cli.command {
        Commands::Categories => commands::catalog::categories().await?,
        Commands::Products { search, category } => {
            commands::catalog::products(&search, &category).await?;
        }
        Commands::Show { id } => commands::catalog::show(&id).await?,
    }
    Ok(())
}
