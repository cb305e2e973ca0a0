//! Mock AuraFlow API client for testing
//!
//! Provides a mock implementation of `AuraFlowApi` for unit testing without
//! making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::AuraFlowApi;
use super::models::TodoItem;
use crate::error::{ApiError, Result};

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub authenticate: usize,
    pub signup: usize,
    pub list_todos: usize,
    pub add_todo: usize,
    pub update_todo: usize,
    pub remove_todo: usize,
}

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
#[derive(Default)]
pub struct MockAuraFlowClient {
    /// Token to return from authenticate
    token: Arc<Mutex<Option<String>>>,
    /// To-dos backing the to-do endpoints
    todos: Arc<Mutex<Vec<TodoItem>>>,
    /// Error to return (if any), consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

impl MockAuraFlowClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token returned by authenticate
    pub fn with_token(self, token: impl Into<String>) -> Self {
        *self.token.try_lock().expect("uncontended at build time") = Some(token.into());
        self
    }

    /// Seed the mock's to-do collection
    pub fn with_todos(self, todos: Vec<TodoItem>) -> Self {
        *self.todos.try_lock().expect("uncontended at build time") = todos;
        self
    }

    /// Queue an error to be returned by the next call
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("uncontended at build time") = Some(error);
        self
    }

    /// Get a snapshot of call counts
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    async fn take_error(&self) -> Option<ApiError> {
        self.error.lock().await.take()
    }
}

#[async_trait]
impl AuraFlowApi for MockAuraFlowClient {
    async fn authenticate(&self, _email: &str, _password: &str) -> Result<String> {
        self.call_count.lock().await.authenticate += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }

        let token = self.token.lock().await;
        token
            .clone()
            .ok_or_else(|| ApiError::AuthRejected("Login failed".to_string()).into())
    }

    async fn signup(&self, _email: &str, _password: &str) -> Result<()> {
        self.call_count.lock().await.signup += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(())
    }

    async fn list_todos(&self, _token: &str) -> Result<Vec<TodoItem>> {
        self.call_count.lock().await.list_todos += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(self.todos.lock().await.clone())
    }

    async fn add_todo(&self, _token: &str, text: &str) -> Result<TodoItem> {
        self.call_count.lock().await.add_todo += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }

        let mut todos = self.todos.lock().await;
        let id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let item = TodoItem {
            id,
            text: text.to_string(),
            completed: false,
        };
        todos.push(item.clone());
        Ok(item)
    }

    async fn update_todo(&self, _token: &str, id: u64, completed: bool) -> Result<TodoItem> {
        self.call_count.lock().await.update_todo += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }

        let mut todos = self.todos.lock().await;
        let item = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("to-do {}", id)))?;
        item.completed = completed;
        Ok(item.clone())
    }

    async fn remove_todo(&self, _token: &str, id: u64) -> Result<()> {
        self.call_count.lock().await.remove_todo += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }

        let mut todos = self.todos.lock().await;
        if !todos.iter().any(|t| t.id == id) {
            return Err(ApiError::NotFound(format!("to-do {}", id)).into());
        }
        todos.retain(|t| t.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::routes::{self, Route};
    use crate::session::SessionStore;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_successful_login_flow_persists_the_gateway_token() {
        let client = MockAuraFlowClient::new().with_token("tok123");

        let token = client.authenticate("a@b.com", "pw").await.unwrap();
        assert_eq!(token, "tok123");
        assert_eq!(client.call_counts().await.authenticate, 1);

        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        let session = SessionStore::restore(path.to_str()).unwrap();
        session.login(&token).unwrap();

        assert!(session.is_authenticated());
        // The dashboard now renders instead of redirecting
        assert_eq!(
            routes::resolve(Route::Dashboard, session.is_authenticated()),
            Route::Dashboard
        );
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_the_session_unauthenticated() {
        let client = MockAuraFlowClient::new()
            .with_error(ApiError::AuthRejected("bad creds".to_string()));

        let err = client.authenticate("a@b.com", "wrong").await.unwrap_err();
        match err {
            Error::Api(ApiError::AuthRejected(message)) => assert_eq!(message, "bad creds"),
            other => panic!("Expected AuthRejected, got {:?}", other),
        }

        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        let session = SessionStore::restore(path.to_str()).unwrap();

        // No session mutation happened on the failure path
        assert!(!session.is_authenticated());
        assert_eq!(
            routes::resolve(Route::Dashboard, session.is_authenticated()),
            Route::Login
        );
    }
}
