use crate::analytics::Timeframe;
use clap::{Parser, Subcommand};

/// Command-line interface definition for leadgrid
/// CLI application to import, browse and edit sales leads using SQLite
#[derive(Parser)]
#[command(
    name = "leadgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "A lead management CLI: import leads from CSV, edit them in a grid and review call analytics",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a single lead
    Add {
        #[arg(long, help = "Full name (2-100 characters)")]
        name: String,

        #[arg(long, help = "E-mail address")]
        email: String,

        #[arg(long, help = "Phone number (10-15 characters)")]
        phone: String,

        #[arg(long, help = "Company (optional)")]
        company: Option<String>,
    },

    /// List leads, one page at a time
    List {
        #[arg(long, short, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,

        #[arg(long = "page-size", help = "Rows per page (1-100, default from config)")]
        page_size: Option<usize>,

        #[arg(
            long,
            help = "Sort column: name, company, phone, email, status, updated_at, created_at"
        )]
        sort: Option<String>,

        #[arg(long, requires = "sort", help = "Sort descending (with --sort)")]
        desc: bool,
    },

    /// Change one cell of a lead
    Edit {
        /// Lead id
        id: String,

        /// Field name: name, company, phone, email or status
        field: String,

        /// New value (an empty company clears it)
        value: String,
    },

    /// Set the status of one or more leads
    Status {
        #[arg(help = "pending, in-progress, completed or failed")]
        status: String,

        #[arg(required = true, num_args = 1.., help = "Lead ids")]
        ids: Vec<String>,
    },

    /// Delete one or more leads
    Del {
        #[arg(required = true, num_args = 1.., help = "Lead ids")]
        ids: Vec<String>,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Import leads from a CSV file
    Import {
        #[arg(value_name = "FILE")]
        file: String,

        #[arg(long = "dry-run", help = "Only show the parsed rows")]
        dry_run: bool,

        #[arg(long, short = 'y', help = "Import without asking for confirmation")]
        yes: bool,
    },

    /// Edit leads interactively, reading commands from standard input
    Grid {
        #[arg(long, short, default_value_t = 1, help = "Start page (1-based)")]
        page: usize,

        #[arg(long = "page-size", help = "Rows per page (1-100, default from config)")]
        page_size: Option<usize>,
    },

    /// Call analytics from an exported call history (JSON)
    Stats {
        #[arg(long, value_name = "FILE", help = "JSON array of call records")]
        calls: String,

        #[arg(long, value_enum, default_value = "monthly")]
        timeframe: Timeframe,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },
}
