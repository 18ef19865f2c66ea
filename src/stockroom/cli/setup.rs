use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockroom::model::{SearchMode, SortKey};

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version)]
#[command(about = "Keep a small product catalog in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use (overrides STOCKROOM_FILE and the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    #[command(alias = "a", allow_negative_numbers = true, display_order = 1)]
    Add {
        /// Product name
        name: String,

        /// Product category
        category: String,

        /// Units in stock (whole number greater than zero)
        quantity: String,

        /// Unit price (greater than zero)
        price: String,
    },

    /// List products, optionally filtered by category or sorted
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show products whose category contains this text
        #[arg(short, long, conflicts_with = "sort")]
        category: Option<String>,

        /// Sort by name, quantity or price
        #[arg(short, long)]
        sort: Option<SortKey>,
    },

    /// Search products by ID or by part of the name
    #[command(display_order = 3)]
    Search {
        /// What to match: id (exact), name (substring) or any
        #[arg(short, long, default_value = "any")]
        by: SearchMode,

        /// Text to look for
        query: String,
    },

    /// Show a single product
    #[command(alias = "v", display_order = 4)]
    Show {
        /// Product ID
        id: u64,
    },

    /// Change fields of a product; omitted fields keep their value
    #[command(alias = "e", allow_negative_numbers = true, display_order = 5)]
    Update {
        /// Product ID
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New quantity
        #[arg(long)]
        quantity: Option<String>,

        /// New price
        #[arg(long)]
        price: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Product ID
        id: u64,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the categories in use
    #[command(display_order = 7)]
    Categories,

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive menu (default when no command is given)
    #[command(display_order = 9)]
    Menu,
}
