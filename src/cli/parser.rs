use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for reqdesk
/// CLI application to track internal service requests with SQLite
#[derive(Parser)]
#[command(
    name = "reqdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track internal service applications: submit, list, filter, export, and look up colleagues",
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

/// Filter flags shared by list, stats and export.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Completion filter: done or pending (anything else means no filter)
    #[arg(long)]
    pub status: Option<String>,

    /// Lower submission-date bound (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// Upper submission-date bound (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: Option<String>,
}

/// Record field flags shared by add and edit.
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Requester full name
    #[arg(long)]
    pub name: Option<String>,

    /// Room or lab label
    #[arg(long)]
    pub cabinet: Option<String>,

    /// Internal phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Free-text request description
    #[arg(long = "text")]
    pub text: Option<String>,

    /// Description of the work performed
    #[arg(long)]
    pub process: Option<String>,

    /// Assignee name
    #[arg(long)]
    pub executor: Option<String>,

    /// Submission date (YYYY-MM-DD, defaults to today on add)
    #[arg(long = "date")]
    pub date: Option<String>,

    /// Work start timestamp (YYYY-MM-DD [HH:MM:SS])
    #[arg(long)]
    pub started: Option<String>,

    /// Work finish timestamp (YYYY-MM-DD [HH:MM:SS])
    #[arg(long)]
    pub finished: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Submit a new application
    Add {
        #[command(flatten)]
        record: RecordArgs,

        /// Mark the application as already completed
        #[arg(long)]
        done: bool,
    },

    /// List applications (paginated, filtered)
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<i64>,

        /// Page size (clamped to 1..=100)
        #[arg(long)]
        limit: Option<i64>,

        /// Print the full JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show general and filtered statistics
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show a single application by id
    Show { id: String },

    /// Replace the fields of an existing application
    Edit {
        id: String,

        #[command(flatten)]
        record: RecordArgs,

        /// Mark as completed
        #[arg(long, conflicts_with = "pending")]
        done: bool,

        /// Mark as pending
        #[arg(long)]
        pending: bool,
    },

    /// Delete an application by id
    Del { id: String },

    /// Export all applications matching a filter
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Absolute output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Search the employee directory
    Search {
        /// Field to search: full_name, position, department, room,
        /// internal_phone or email
        #[arg(long)]
        field: String,

        /// Substring to look for
        #[arg(long)]
        query: String,
    },

    /// List distinct departments from the directory
    Departments,

    /// Show database information
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Insert an employee directory row (demo/test data)
    #[command(hide = true)]
    SeedEmployee {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        room: Option<String>,
        #[arg(long)]
        internal_phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}
