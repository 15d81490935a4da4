//! Partial-update merge for to-do items.
//!
//! Pure function shared by every storage backend that merges in Rust. The
//! SQLite backend performs the same merge inside its `UPDATE` statement.

use super::{requests::TodoPatch, types::TodoItem};

/// Apply `patch` on top of `previous`.
///
/// Each field present in the patch replaces the stored value, including an
/// empty string and `completed: false`. Absent fields keep their previous
/// value.
pub fn merge_todo(previous: &TodoItem, patch: &TodoPatch) -> TodoItem {
    TodoItem {
        title: patch
            .title
            .clone()
            .unwrap_or_else(|| previous.title.clone()),
        description: patch
            .description
            .clone()
            .unwrap_or_else(|| previous.description.clone()),
        completed: patch.completed.unwrap_or(previous.completed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_item() -> TodoItem {
        TodoItem::new("buy milk", "2%").with_completed(true)
    }

    #[test]
    fn test_empty_patch_keeps_everything() {
        let previous = completed_item();

        let merged = merge_todo(&previous, &TodoPatch::new());

        assert_eq!(merged, previous);
    }

    #[test]
    fn test_explicit_false_overrides_true() {
        let previous = completed_item();

        let merged = merge_todo(&previous, &TodoPatch::new().with_completed(false));

        assert!(!merged.completed);
        assert_eq!(merged.title, "buy milk");
        assert_eq!(merged.description, "2%");
    }

    #[test]
    fn test_title_only() {
        let previous = completed_item();

        let merged = merge_todo(&previous, &TodoPatch::new().with_title("buy oat milk"));

        assert_eq!(merged.title, "buy oat milk");
        assert_eq!(merged.description, "2%");
        assert!(merged.completed);
    }

    #[test]
    fn test_empty_string_is_a_value() {
        let previous = completed_item();

        let merged = merge_todo(&previous, &TodoPatch::new().with_description(""));

        assert_eq!(merged.description, "");
    }
}
