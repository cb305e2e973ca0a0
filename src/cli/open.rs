//! Route navigation and screen rendering
//!
//! `open` is the CLI counterpart of the web client's router: the requested
//! path runs through the route guard, redirects are announced, and the
//! resolved screen renders.

use colored::Colorize;

use crate::cli::{GlobalOptions, ScreenContext, todo};
use crate::error::{ApiError, Result};
use crate::routes::Route;
use crate::store::MemoryTodoStore;

/// Navigate to `path` and render the guarded result.
pub async fn run(opts: &GlobalOptions, path: &str) -> Result<()> {
    let target = Route::parse(path)
        .ok_or_else(|| ApiError::NotFound(format!("route {}", path)))?;

    let ctx = ScreenContext::new(opts)?;
    let resolved = ctx.navigate(target);
    render(resolved, &ctx).await
}

/// Render a screen. Callers pass routes the guard has already resolved.
pub async fn render(route: Route, ctx: &ScreenContext) -> Result<()> {
    match route {
        Route::Dashboard => {
            println!("{}", "Welcome to Your Dashboard!".bold());
            println!("You have successfully logged in. This is your personal space.\n");
            println!("{}", "Your Notes".bold());
            println!("  • Welcome to your dashboard!");
        }
        Route::Profile => {
            println!("{}\n", "Your To-Do List".bold());
            let store = MemoryTodoStore::seeded();
            todo::render_list(ctx, &store).await?;
        }
        Route::Login => {
            println!("{}", "Welcome Back".bold());
            println!("Run {} to sign in.", "auraflow login".cyan());
        }
        Route::Signup => {
            println!("{}", "Create Your Account".bold());
            println!("Run {} to register.", "auraflow signup".cyan());
        }
        // Root always resolves to a landing route before rendering
        Route::Root => {}
    }

    Ok(())
}
