//! AuraFlow CLI - companion client for the AuraFlow platform

use clap::Parser;
use colored::Colorize;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod routes;
mod session;
mod store;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {}", "Error:".red(), err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::login::run(&opts, email, password).await,
        Commands::Signup { email, password } => cli::signup::run(&opts, email, password).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Open { path } => cli::open::run(&opts, &path).await,
        Commands::Todo(todo) => cli::todo::run(&opts, todo.remote, todo.command).await,
        Commands::Version => {
            println!("auraflow version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
