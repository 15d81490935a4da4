//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Every statement that returns rows selects the columns
//! in `id, title, description, completed` order.

/// SQL statement to create the todos table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

pub const SELECT_TODOS: &str = r#"
SELECT id, title, description, completed
FROM todos
ORDER BY id
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, description, completed)
VALUES (?1, ?2, FALSE)
RETURNING id, title, description, completed
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, title, description, completed
FROM todos
WHERE id = ?1
"#;

/// Partial update in a single statement. A NULL parameter keeps the
/// current column value.
pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET title = COALESCE(?1, title),
    description = COALESCE(?2, description),
    completed = COALESCE(?3, completed)
WHERE id = ?4
RETURNING id, title, description, completed
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
RETURNING id, title, description, completed
"#;
