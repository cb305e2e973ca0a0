//! Login screen

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use indicatif::ProgressBar;

use crate::cli::{GlobalOptions, ScreenContext, open};
use crate::client::AuraFlowApi;
use crate::routes::Route;
use crate::error::Result;

/// Run the login screen.
///
/// Guest-only: an already-authenticated session is redirected to the
/// dashboard. On success the session persists exactly the token the gateway
/// returned. The spinner is cleared on every exit path, success or failure.
pub async fn run(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = ScreenContext::new(opts)?;

    let resolved = ctx.navigate(Route::Login);
    if resolved != Route::Login {
        return open::render(resolved, &ctx).await;
    }

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
            .interact()?,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Logging in...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let client = ctx.client()?;
    let result = client.authenticate(email.trim(), &password).await;
    spinner.finish_and_clear();

    let token = result?;
    ctx.session.login(&token)?;

    println!("{} Login successful!", "✓".green());
    Ok(())
}
