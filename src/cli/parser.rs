use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dairyledger
/// CLI ledger for dairy distribution backed by SQLite
#[derive(Parser)]
#[command(
    name = "dairyledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small dairy distribution ledger: log purchases, carry forward dues, settle payments and summarize each day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the product catalog with reference prices
    Catalog,

    /// Record a purchase transaction
    Add {
        /// Date of the transaction (YYYY-MM-DD or "today")
        date: String,

        /// Merchant name
        merchant: String,

        /// Item name (catalog names are matched case-insensitively)
        item: String,

        /// Quantity purchased
        weight: f64,

        #[arg(
            long = "paid",
            default_value_t = 0.0,
            allow_negative_numbers = true,
            help = "Amount paid for this entry"
        )]
        paid: f64,

        #[arg(long = "unit", help = "Unit of measure (default from config)")]
        unit: Option<String>,

        #[arg(
            long = "price",
            allow_negative_numbers = true,
            help = "Price per unit (default: catalog price of the item)"
        )]
        price: Option<f64>,
    },

    /// List recorded entries, newest first
    List {
        #[arg(long, short, help = "Filter by merchant name")]
        merchant: Option<String>,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (FROM:TO)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's entries")]
        now: bool,
    },

    /// Show merchants with outstanding dues
    Dues,

    /// Apply a lump payment to a merchant's dues, oldest first
    Settle {
        /// Merchant name
        merchant: String,

        /// Amount paid
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Daily profit/loss summary
    Summary {
        /// Report date (YYYY-MM-DD or "today")
        date: String,

        #[arg(
            long = "income",
            allow_negative_numbers = true,
            help = "Total cash income of the day from all sources"
        )]
        income: f64,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
