mod error;
mod id;
mod merge;
mod requests;
mod responses;
mod types;

pub use error::TodoError;
pub use id::parse_todo_id;
pub use merge::merge_todo;
pub use requests::{CreateTodoRequest, NewTodo, TodoPatch};
pub use responses::StatusResponse;
pub use types::{TodoId, TodoItem, TodoItemWithId};
