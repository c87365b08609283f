//! Storefront CLI - the watch store in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_core::OperationResult;

mod commands;
mod output;

use commands::{auth, cart, checkout, logs, orders, products};

/// Watch store - browse, fill a cart and check out from the terminal
#[derive(Parser)]
#[command(name = "ws", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        email: Option<String>,
        /// Password (or STOREFRONT_PASSWORD; prompted if neither is set)
        #[arg(long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign in to an existing account
    Login {
        #[arg(long)]
        email: Option<String>,
        /// Password (or STOREFRONT_PASSWORD; prompted if neither is set)
        #[arg(long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign out
    Logout {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show who is signed in
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List watches in the catalog
    Products {
        /// Filter by title
        #[arg(long, short)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one watch
    Product {
        /// Product ID
        id: String,
        /// Write the watch illustration to this SVG file
        #[arg(long)]
        image: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and edit your cart
    Cart {
        #[command(subcommand)]
        command: cart::CartCommands,
    },

    /// Pay for your cart
    Checkout {
        /// Name on card
        #[arg(long)]
        name: Option<String>,
        /// Card number
        #[arg(long)]
        card: Option<String>,
        /// Expiry as MM/YY
        #[arg(long)]
        expiry: Option<String>,
        #[arg(long)]
        cvv: Option<String>,
        /// ZIP or postal code
        #[arg(long)]
        zip: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show your order history
    Orders {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

impl Commands {
    /// Command name for the event log; never includes arguments
    fn name(&self) -> &'static str {
        match self {
            Commands::Signup { .. } => "signup",
            Commands::Login { .. } => "login",
            Commands::Logout { .. } => "logout",
            Commands::Whoami { .. } => "whoami",
            Commands::Products { .. } => "products",
            Commands::Product { .. } => "product",
            Commands::Cart { command } => command.name(),
            Commands::Checkout { .. } => "checkout",
            Commands::Orders { .. } => "orders",
            Commands::Logs { .. } => "logs",
        }
    }

    /// Whether the caller asked for machine-readable output
    fn json(&self) -> bool {
        match self {
            Commands::Signup { json, .. }
            | Commands::Login { json, .. }
            | Commands::Logout { json }
            | Commands::Whoami { json }
            | Commands::Products { json, .. }
            | Commands::Product { json, .. }
            | Commands::Checkout { json, .. }
            | Commands::Orders { json } => *json,
            Commands::Cart { command } => command.json(),
            Commands::Logs { .. } => false,
        }
    }
}

/// "user" for mistakes the shopper can fix, "internal" for everything else
fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<storefront_core::Error>() {
        Some(e) if e.is_user_facing() => "user",
        _ => "internal",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let name = cli.command.name();
    let json = cli.command.json();

    // `ws logs` opens the log database itself
    let logger = match cli.command {
        Commands::Logs { .. } => None,
        _ => commands::get_logger(),
    };
    commands::log_command(&logger, name);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{:#}", e);
            commands::log_failure(&logger, name, &message, error_kind(&e));
            if json {
                let result: OperationResult<()> = OperationResult::fail(message);
                if let Ok(body) = serde_json::to_string_pretty(&result) {
                    println!("{}", body);
                }
            } else {
                output::error(&message);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Signup { email, password, json } => auth::signup(email, password, json),
        Commands::Login { email, password, json } => auth::login(email, password, json),
        Commands::Logout { json } => auth::logout(json),
        Commands::Whoami { json } => auth::whoami(json),
        Commands::Products { search, json } => products::list(search.as_deref(), json),
        Commands::Product { id, image, json } => products::show(&id, image.as_deref(), json),
        Commands::Cart { command } => cart::run(command),
        Commands::Checkout { name, card, expiry, cvv, zip, json } => checkout::run(
            checkout::CheckoutArgs {
                name,
                card,
                expiry,
                cvv,
                zip,
            },
            json,
        ),
        Commands::Orders { json } => orders::run(json),
        Commands::Logs { command } => logs::run(command),
    }
}
