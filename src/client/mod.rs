//! AuraFlow API client

use async_trait::async_trait;

use crate::error::Result;

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use http::AuraFlowClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockAuraFlowClient;
pub use models::TodoItem;

/// AuraFlow platform API.
///
/// Authentication outcomes are explicit: success carries the server-issued
/// token, rejection and connectivity failures are classified `ApiError`
/// variants. To-do operations require the session token.
#[async_trait]
pub trait AuraFlowApi: Send + Sync {
    /// Exchange credentials for an opaque session token.
    async fn authenticate(&self, email: &str, password: &str) -> Result<String>;

    /// Register a new account. Does not log the user in.
    async fn signup(&self, email: &str, password: &str) -> Result<()>;

    /// List the user's to-dos.
    async fn list_todos(&self, token: &str) -> Result<Vec<TodoItem>>;

    /// Create a to-do and return it with its assigned id.
    async fn add_todo(&self, token: &str, text: &str) -> Result<TodoItem>;

    /// Set a to-do's completed flag.
    async fn update_todo(&self, token: &str, id: u64, completed: bool) -> Result<TodoItem>;

    /// Delete a to-do.
    async fn remove_todo(&self, token: &str, id: u64) -> Result<()>;
}
