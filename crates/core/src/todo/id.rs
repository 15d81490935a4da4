//! Path id parsing.

use super::types::TodoId;

/// Parse a path segment into a [`TodoId`] using leading-integer semantics.
///
/// Surrounding whitespace and a single sign are accepted, then the longest
/// run of ASCII digits is read and anything after it is ignored, so
/// `"12abc"` parses as 12. Returns `None` when there are no leading digits
/// or the value does not fit in an `i64`; callers treat that as a lookup
/// that matches nothing.
pub fn parse_todo_id(raw: &str) -> Option<TodoId> {
    let trimmed = raw.trim();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let value: i64 = unsigned[..end].parse().ok()?;
    Some(TodoId::new(if negative { -value } else { value }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_todo_id("17"), Some(TodoId::new(17)));
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_todo_id("12abc"), Some(TodoId::new(12)));
        assert_eq!(parse_todo_id("3.9"), Some(TodoId::new(3)));
    }

    #[test]
    fn test_whitespace_and_sign() {
        assert_eq!(parse_todo_id("  5 "), Some(TodoId::new(5)));
        assert_eq!(parse_todo_id("+8"), Some(TodoId::new(8)));
        assert_eq!(parse_todo_id("-4"), Some(TodoId::new(-4)));
    }

    #[test]
    fn test_non_numeric_is_none() {
        assert_eq!(parse_todo_id("abc"), None);
        assert_eq!(parse_todo_id(""), None);
        assert_eq!(parse_todo_id("-"), None);
        assert_eq!(parse_todo_id("x12"), None);
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(parse_todo_id("99999999999999999999"), None);
    }
}
