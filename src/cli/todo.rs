//! To-do screen handlers

use std::sync::Arc;

use colored::Colorize;

use crate::cli::{GlobalOptions, OutputFormat, ScreenContext, TodoCommands};
use crate::error::{ApiError, Error, Result};
use crate::models::display::TodoDisplay;
use crate::output::json::{JsonOutput, format_json};
use crate::output::table::format_table;
use crate::routes::Route;
use crate::store::{HttpTodoStore, MemoryTodoStore, TodoStore};

/// Run a to-do command against the selected store.
///
/// The to-do screens live on the protected profile route: the guard runs
/// before any store is touched. An authentication rejection from the remote
/// store destroys the session, matching the web client's behavior when a
/// protected fetch comes back 401.
pub async fn run(opts: &GlobalOptions, remote: bool, command: TodoCommands) -> Result<()> {
    let ctx = ScreenContext::new(opts)?;
    ctx.authorize(Route::Profile)?;

    if remote {
        let token = ctx.require_token()?;
        let client = Arc::new(ctx.client()?);
        let store = HttpTodoStore::new(client, token);

        match dispatch(&ctx, &store, command).await {
            Err(Error::Api(ApiError::Unauthorized)) => {
                ctx.session.logout()?;
                Err(ApiError::Unauthorized.into())
            }
            other => other,
        }
    } else {
        let store = MemoryTodoStore::seeded();
        dispatch(&ctx, &store, command).await
    }
}

async fn dispatch<S: TodoStore>(ctx: &ScreenContext, store: &S, command: TodoCommands) -> Result<()> {
    match command {
        TodoCommands::List => {}
        TodoCommands::Add { text } => {
            let item = store.add(&text).await?;
            println!("{} To-do {} added.", "✓".green(), item.id);
        }
        TodoCommands::Done { id } => {
            store.toggle(id).await?;
            println!("To-do status updated!");
        }
        TodoCommands::Rm { id } => {
            store.remove(id).await?;
            println!("{} To-do deleted.", "✓".green());
        }
    }

    render_list(ctx, store).await
}

/// Print the store's items in the selected output format.
pub async fn render_list<S: TodoStore>(ctx: &ScreenContext, store: &S) -> Result<()> {
    let todos = store.list().await?;

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", format_json(&JsonOutput::new(&todos))?);
        }
        OutputFormat::Pretty | OutputFormat::Table => {
            let rows: Vec<TodoDisplay> = todos.iter().map(Into::into).collect();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
