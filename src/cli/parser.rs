use clap::{Parser, Subcommand};

/// Command-line interface definition for worktrack.
/// Each subcommand is a thin adapter over the core session operations.
#[derive(Parser)]
#[command(
    name = "worktrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working sessions against tasks, net of breaks, with anomaly and gap reports",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Register a user
    UserAdd {
        /// Unique email identifying the user
        email: String,

        #[arg(long, default_value = "", help = "Display name")]
        name: String,
    },

    /// Create a task assigned to a designer
    TaskAdd {
        /// Task name
        name: String,

        #[arg(long, help = "Email of the designer the task is assigned to")]
        designer: String,
    },

    /// Start working on a task
    Start {
        /// Task id
        task: i64,

        #[arg(long = "as", help = "Acting user's email")]
        as_user: String,
    },

    /// Stop working on a task and record the net duration
    Stop {
        /// Task id
        task: i64,

        #[arg(long = "as", help = "Acting user's email")]
        as_user: String,
    },

    /// Open a break during the active session
    BreakStart {
        #[arg(long = "as", help = "Acting user's email")]
        as_user: String,
    },

    /// Close the open break
    BreakStop {
        #[arg(long = "as", help = "Acting user's email")]
        as_user: String,
    },

    /// List a user's working sessions (paginated, sorted)
    List {
        #[arg(long = "as", help = "User's email")]
        as_user: String,

        #[arg(long, default_value_t = 0)]
        page: usize,

        #[arg(long, default_value = "id", help = "id|started|finished|duration|created")]
        sort: String,

        #[arg(long, default_value = "asc", help = "asc|desc")]
        direction: String,

        #[arg(long, help = "Emit the page as JSON")]
        json: bool,
    },

    /// List a user's recorded net durations (paginated)
    Durations {
        #[arg(long = "as", help = "User's email")]
        as_user: String,

        #[arg(long, default_value_t = 0)]
        page: usize,

        #[arg(long, help = "Emit the page as JSON")]
        json: bool,
    },

    /// List a user's anomalous sessions (>8h or <5m)
    Anomalies {
        #[arg(long = "as", help = "User's email")]
        as_user: String,

        #[arg(long, default_value_t = 0)]
        page: usize,

        #[arg(long, default_value = "id", help = "id|started|finished|duration|created")]
        sort: String,

        #[arg(long, default_value = "asc", help = "asc|desc")]
        direction: String,

        #[arg(long, help = "Emit the page as JSON")]
        json: bool,
    },

    /// Days with no recorded session in a date range
    Gaps {
        #[arg(long = "as", help = "User's email")]
        as_user: String,

        #[arg(long, help = "Range start (YYYY-MM-DD, inclusive)")]
        from: String,

        #[arg(long, help = "Range end (YYYY-MM-DD, inclusive)")]
        to: String,

        #[arg(long, default_value_t = 0)]
        page: usize,

        #[arg(long, default_value_t = 50)]
        size: usize,

        #[arg(long, help = "Emit the page as JSON")]
        json: bool,
    },
}
