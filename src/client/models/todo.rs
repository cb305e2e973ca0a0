//! To-do domain and wire types

use serde::{Deserialize, Serialize};

/// A to-do item.
///
/// Ids are unique and monotonic within a session; the text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Body of `POST /api/v1/todos`
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub text: &'a str,
}

/// Body of `PUT /api/v1/todos/{id}`
#[derive(Debug, Serialize)]
pub struct TodoPatch {
    pub completed: bool,
}
