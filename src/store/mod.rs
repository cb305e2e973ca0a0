//! To-do storage
//!
//! The store is an interface boundary: the CLI only ever talks to
//! `TodoStore`, so the in-memory mock and the HTTP-backed implementation are
//! drop-in substitutes for each other.

use async_trait::async_trait;

use crate::client::TodoItem;
use crate::error::Result;

pub mod http;
pub mod memory;

pub use http::HttpTodoStore;
pub use memory::MemoryTodoStore;

/// Ordered collection of to-dos.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All items, in insertion order.
    async fn list(&self) -> Result<Vec<TodoItem>>;

    /// Append a new item. Its id is one greater than the current maximum
    /// (1 when empty). Blank text is a validation error.
    async fn add(&self, text: &str) -> Result<TodoItem>;

    /// Flip exactly one item's completed flag.
    async fn toggle(&self, id: u64) -> Result<TodoItem>;

    /// Remove an item, leaving the others' order and fields unchanged.
    async fn remove(&self, id: u64) -> Result<()>;
}
