//! English list joining for prompts and hand descriptions.

use std::fmt::Display;

/// Joins items with `delimiter`, putting `word` before the last item.
///
/// `joinor(&[1, 2, 3], ", ", "or")` gives `"1, 2, or 3"`. Two items
/// still use the delimiter (`"1, or 2"`).
pub fn join_with<T: Display>(items: &[T], delimiter: &str, word: &str) -> String {
    let mut parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    if parts.len() > 1
        && let Some(last) = parts.last_mut()
    {
        *last = format!("{} {}", word, last);
    }
    parts.join(delimiter)
}

/// `"a, b, or c"`.
pub fn joinor<T: Display>(items: &[T]) -> String {
    join_with(items, ", ", "or")
}

/// `"a, b, and c"`.
pub fn joinand<T: Display>(items: &[T]) -> String {
    join_with(items, ", ", "and")
}
