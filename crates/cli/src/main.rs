//! Twiscent CLI - drive the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! twiscent catalog
//!
//! # Cart operations
//! twiscent cart add c1 --qty 2
//! twiscent cart inc c1
//! twiscent cart show
//! twiscent cart clear
//!
//! # Save the UPI payment profile
//! twiscent upi set shop@bank --name "Twiscent Candles"
//!
//! # Payment links
//! twiscent pay
//! twiscent buy c3 --qty 2
//! ```
//!
//! # Commands
//!
//! - `catalog` - List purchasable items
//! - `cart` - Inspect and modify the cart
//! - `upi` - Manage the UPI payment profile
//! - `pay` - Build a payment link for the cart total
//! - `buy` - Build a payment link for a single item

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "twiscent")]
#[command(author, version, about = "Twiscent storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List purchasable items
    Catalog,
    /// Inspect and modify the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the UPI payment profile
    Upi {
        #[command(subcommand)]
        action: UpiAction,
    },
    /// Build a payment link for the cart total
    Pay {
        /// Transaction note shown in the payment app
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Build a payment link for one item without touching the cart
    Buy {
        /// Item id (see `twiscent catalog`)
        id: String,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        qty: i64,

        /// Transaction note shown in the payment app
        #[arg(short, long)]
        note: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add an item to the cart
    Add {
        /// Item id (see `twiscent catalog`)
        id: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        qty: i64,
    },
    /// Remove an item from the cart entirely
    Remove {
        /// Item id
        id: String,
    },
    /// Increase an item's quantity by one
    Inc {
        /// Item id
        id: String,
    },
    /// Decrease an item's quantity by one (never below 1)
    Dec {
        /// Item id
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum UpiAction {
    /// Validate and save the payment profile
    Set {
        /// UPI virtual payment address (example@bank)
        id: String,

        /// Payee display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show the saved payment profile
    Show,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = commands::open_session()?;

    match cli.command {
        Commands::Catalog => commands::catalog::list(&session),
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&session),
            CartAction::Add { id, qty } => commands::cart::add(&mut session, &id, qty),
            CartAction::Remove { id } => commands::cart::remove(&mut session, &id),
            CartAction::Inc { id } => commands::cart::adjust(&mut session, &id, 1),
            CartAction::Dec { id } => commands::cart::adjust(&mut session, &id, -1),
            CartAction::Clear => commands::cart::clear(&mut session),
        },
        Commands::Upi { action } => match action {
            UpiAction::Set { id, name } => {
                commands::upi::set(&mut session, &id, name.as_deref().unwrap_or(""))?;
            }
            UpiAction::Show => commands::upi::show(&session),
        },
        Commands::Pay { note } => commands::pay::cart(&session, note.as_deref()),
        Commands::Buy { id, qty, note } => {
            commands::pay::buy_now(&session, &id, qty, note.as_deref());
        }
    }
    Ok(())
}
