//! Signup screen

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use indicatif::ProgressBar;

use crate::cli::{GlobalOptions, ScreenContext};
use crate::client::AuraFlowApi;
use crate::error::Result;

/// Run the signup screen.
///
/// Registration does not sign the user in; the screen points to login on
/// success.
pub async fn run(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = ScreenContext::new(opts)?;

    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Creating account...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let client = ctx.client()?;
    let result = client.signup(email.trim(), &password).await;
    spinner.finish_and_clear();

    result?;

    println!("{} User successfully registered!", "✓".green());
    println!("Run {} to sign in.", "auraflow login".cyan());
    Ok(())
}
