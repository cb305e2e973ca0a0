//! In-memory to-do store

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::TodoStore;
use crate::client::TodoItem;
use crate::error::{ApiError, Result};

/// In-memory mock store. Performs no I/O; apart from blank-text validation
/// and unknown ids, its operations cannot fail.
#[derive(Default)]
pub struct MemoryTodoStore {
    todos: Mutex<Vec<TodoItem>>,
}

impl MemoryTodoStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the demonstration to-dos the platform ships.
    pub fn seeded() -> Self {
        let todos = vec![
            TodoItem {
                id: 1,
                text: "Learn FastAPI for backend development".to_string(),
                completed: false,
            },
            TodoItem {
                id: 2,
                text: "Integrate React frontend with FastAPI".to_string(),
                completed: true,
            },
            TodoItem {
                id: 3,
                text: "Set up AWS RDS database".to_string(),
                completed: true,
            },
            TodoItem {
                id: 4,
                text: "Implement persistent login with tokens".to_string(),
                completed: false,
            },
        ];

        Self {
            todos: Mutex::new(todos),
        }
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> Result<Vec<TodoItem>> {
        Ok(self.todos.lock().await.clone())
    }

    async fn add(&self, text: &str) -> Result<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation("To-do text cannot be empty".to_string()).into());
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

    async fn toggle(&self, id: u64) -> Result<TodoItem> {
        let mut todos = self.todos.lock().await;
        let item = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("to-do {}", id)))?;
        item.completed = !item.completed;
        Ok(item.clone())
    }

    async fn remove(&self, id: u64) -> Result<()> {
        let mut todos = self.todos.lock().await;
        if !todos.iter().any(|t| t.id == id) {
            return Err(ApiError::NotFound(format!("to-do {}", id)).into());
        }
        todos.retain(|t| t.id != id);
        Ok(())
    }
}
