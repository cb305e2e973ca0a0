//! API model types

mod auth;
mod todo;

pub use auth::{ApiMessage, LoginRequest, SignupRequest, TokenResponse};
pub use todo::{NewTodo, TodoItem, TodoPatch};
