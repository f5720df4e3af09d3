//! Beltline CLI - browse the catalog, manage the wishlist and shop from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List belts under $50, cheapest first
//! beltline products --category belts --price 0-25 --price 25-50 --sort price-low
//!
//! # Show one product with related items
//! beltline show 2
//!
//! # Save a product to the wishlist (persisted in STOREFRONT_DATA_DIR)
//! beltline wishlist add 6
//!
//! # Preview shipping and tax for a subtotal
//! beltline totals 42.50
//!
//! # Interactive session with a cart and checkout
//! beltline shop
//! ```
//!
//! # Commands
//!
//! - `products` - List products with filters and sorting
//! - `search` - Search by name, description or category
//! - `show` - Product details
//! - `featured` - Featured products
//! - `wishlist` - List, add, remove or toggle saved products
//! - `totals` - Order totals for a subtotal
//! - `shop` - Interactive cart and checkout session
//!
//! Configuration is read from the environment (see
//! `beltline_storefront::config`). Logs go to stderr; `RUST_LOG` overrides
//! the default filter.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::process::ExitCode;

use beltline_storefront::config::{LogFormat, StorefrontConfig};
use beltline_storefront::error::Result;
use beltline_storefront::state::Storefront;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

use commands::browse::ListArgs;
use commands::wishlist::WishlistAction;

const DEFAULT_LOG_FILTER: &str = "beltline_storefront=info,beltline_cli=info";

#[derive(Parser)]
#[command(name = "beltline")]
#[command(author, version, about = "Beltline storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered and sorted
    Products(ListArgs),
    /// Search products by name, description or category
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Show product details
    Show { id: String },
    /// List featured products
    Featured,
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show shipping, tax and total for a subtotal
    Totals { subtotal: Decimal },
    /// Start an interactive shopping session
    Shop,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_format);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initialize tracing with `EnvFilter`, writing to stderr.
fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (
            Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(pretty)
        .with(json)
        .init();
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let open = || Storefront::open(config);

    match cli.command {
        Commands::Products(args) => commands::browse::products(&mut out, &open()?, &args)?,
        Commands::Search { query } => {
            commands::browse::search(&mut out, &open()?, &query.join(" "))?;
        }
        Commands::Show { id } => commands::browse::show(&mut out, &open()?, &id)?,
        Commands::Featured => commands::browse::featured(&mut out, &open()?)?,
        Commands::Wishlist { action } => {
            commands::wishlist::run(&mut out, &mut open()?, &action)?;
        }
        Commands::Totals { subtotal } => {
            commands::totals::run(&mut out, subtotal, &config.pricing)?;
        }
        Commands::Shop => commands::shop::run(io::stdin().lock(), &mut out, &mut open()?)?,
    }

    out.flush()?;
    Ok(())
}
