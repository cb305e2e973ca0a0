//! Status command implementation

use colored::Colorize;

use crate::cli::{GlobalOptions, ScreenContext};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "AuraFlow Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    let ctx = ScreenContext::new(opts)?;
    if ctx.session.is_authenticated() {
        println!("{} Logged in (session token present)", "✓".green());
    } else {
        println!("{} Not logged in", "○".dimmed());
        println!("  → Run 'auraflow login' to sign in");
    }

    if let Some(host) = &opts.api_host {
        println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
    }

    println!();
    Ok(())
}
