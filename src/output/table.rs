//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::TodoItem;
    use crate::models::display::TodoDisplay;

    fn rows() -> Vec<TodoDisplay> {
        vec![
            TodoItem {
                id: 1,
                text: "Learn FastAPI for backend development".to_string(),
                completed: false,
            }
            .into(),
            TodoItem {
                id: 2,
                text: "Set up AWS RDS database".to_string(),
                completed: true,
            }
            .into(),
        ]
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TodoDisplay> = vec![];
        let result = format_table(&items);
        assert_eq!(result, "No results found.");
    }

    #[test]
    fn test_format_table_includes_headers_and_rows() {
        let result = format_table(&rows());

        assert!(result.contains("ID"));
        assert!(result.contains("DONE"));
        assert!(result.contains("TO-DO"));
        assert!(result.contains("Learn FastAPI for backend development"));
        assert!(result.contains("Set up AWS RDS database"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let result = format_table(&rows());

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
