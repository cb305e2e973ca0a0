//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod args;
pub mod context;
pub mod login;
pub mod logout;
pub mod open;
pub mod signup;
pub mod status;
pub mod todo;

pub use args::{GlobalOptions, OutputFormat};
pub use context::ScreenContext;

/// AuraFlow CLI - companion client for the AuraFlow platform
#[derive(Parser, Debug)]
#[command(name = "auraflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "AURAFLOW_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "AURAFLOW_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override API host
    #[arg(long, global = true, env = "AURAFLOW_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "AURAFLOW_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and persist the session token
    Login {
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, hide = true)]
        password: Option<String>,
    },

    /// Create a new account
    Signup {
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, hide = true)]
        password: Option<String>,
    },

    /// Sign out and clear the session token
    Logout,

    /// Show session and configuration status
    Status,

    /// Navigate to a route and render its screen
    Open {
        /// Route path, e.g. /dashboard
        path: String,
    },

    /// Manage your to-do list
    Todo(TodoArgs),

    /// Display version information
    Version,
}

/// To-do command group
#[derive(Args, Debug)]
pub struct TodoArgs {
    /// Use the platform's to-do endpoints instead of the local mock store
    #[arg(long, global = true)]
    pub remote: bool,

    #[command(subcommand)]
    pub command: TodoCommands,
}

/// To-do operations
#[derive(Subcommand, Debug)]
pub enum TodoCommands {
    /// List all to-dos
    List,

    /// Add a to-do
    Add {
        /// To-do text
        text: String,
    },

    /// Toggle a to-do's completed flag
    Done {
        /// To-do id
        id: u64,
    },

    /// Remove a to-do
    Rm {
        /// To-do id
        id: u64,
    },
}
