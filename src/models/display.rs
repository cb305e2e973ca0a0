//! To-do display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::TodoItem;

/// To-do display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TodoDisplay {
    /// Item id
    #[tabled(rename = "ID")]
    pub id: u64,

    /// Completion marker
    #[tabled(rename = "DONE")]
    pub done: String,

    /// Item text
    #[tabled(rename = "TO-DO")]
    pub text: String,
}

impl From<TodoItem> for TodoDisplay {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            done: if item.completed { "✓" } else { "·" }.to_string(),
            text: item.text,
        }
    }
}

impl From<&TodoItem> for TodoDisplay {
    fn from(item: &TodoItem) -> Self {
        TodoDisplay::from(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_item_shows_check() {
        let display = TodoDisplay::from(TodoItem {
            id: 3,
            text: "Set up AWS RDS database".to_string(),
            completed: true,
        });

        assert_eq!(display.id, 3);
        assert_eq!(display.done, "✓");
    }

    #[test]
    fn test_pending_item_shows_dot() {
        let display = TodoDisplay::from(TodoItem {
            id: 1,
            text: "Learn FastAPI for backend development".to_string(),
            completed: false,
        });

        assert_eq!(display.done, "·");
    }
}
