use thiserror::Error;

/// Errors raised while validating to-do payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("String values are required for both title and description in your JSON body")]
    NonStringFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_error_display() {
        assert_eq!(
            TodoError::NonStringFields.to_string(),
            "String values are required for both title and description in your JSON body"
        );
    }
}
