//! HTTP-backed to-do store

use std::sync::Arc;

use async_trait::async_trait;

use super::TodoStore;
use crate::client::{AuraFlowApi, TodoItem};
use crate::error::{ApiError, Result};

/// To-do store backed by the platform's `/api/v1/todos` endpoints.
///
/// Holds the session token and speaks through the API client, so swapping it
/// in for `MemoryTodoStore` changes no caller.
pub struct HttpTodoStore<C: AuraFlowApi> {
    client: Arc<C>,
    token: String,
}

impl<C: AuraFlowApi> HttpTodoStore<C> {
    pub fn new(client: Arc<C>, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }
}

#[async_trait]
impl<C: AuraFlowApi> TodoStore for HttpTodoStore<C> {
    async fn list(&self) -> Result<Vec<TodoItem>> {
        self.client.list_todos(&self.token).await
    }

    async fn add(&self, text: &str) -> Result<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation("To-do text cannot be empty".to_string()).into());
        }
        self.client.add_todo(&self.token, text).await
    }

    async fn toggle(&self, id: u64) -> Result<TodoItem> {
        // The update endpoint takes an absolute flag; read the current value
        // first, then send its inverse.
        let todos = self.client.list_todos(&self.token).await?;
        let current = todos
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("to-do {}", id)))?;

        self.client
            .update_todo(&self.token, id, !current.completed)
            .await
    }

    async fn remove(&self, id: u64) -> Result<()> {
        self.client.remove_todo(&self.token, id).await
    }
}
